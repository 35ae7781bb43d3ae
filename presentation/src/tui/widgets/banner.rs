//! Banner widget — transient confirmation and submission failure messages

use crate::tui::state::FormUiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

pub struct BannerWidget<'a> {
    state: &'a FormUiState,
}

impl<'a> BannerWidget<'a> {
    pub fn new(state: &'a FormUiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for BannerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some((message, _)) = &self.state.banner {
            Line::styled(
                message.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else if let Some(message) = self.state.submission.failure_message() {
            Line::styled(message, Style::default().fg(Color::Red))
        } else {
            Line::default()
        };

        Paragraph::new(line).centered().render(area, buf);
    }
}
