//! Header widget — form title

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget;

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::styled(
            "Contact us",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        Paragraph::new(title)
            .centered()
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
