//! Status bar widget — phase indicator + key hints

use crate::tui::state::{Focus, FormUiState, is_select};
use inquiry_domain::SubmissionPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a FormUiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FormUiState) -> Self {
        Self { state }
    }

    fn phase_indicator(&self) -> (&'static str, Color) {
        if self.state.pending {
            return ("SENDING", Color::Yellow);
        }
        match self.state.submission.phase() {
            SubmissionPhase::Idle | SubmissionPhase::Validating => ("READY", Color::Cyan),
            SubmissionPhase::Submitting => ("SENDING", Color::Yellow),
            SubmissionPhase::Succeeded => ("SENT", Color::Green),
            SubmissionPhase::Failed { .. } => ("FAILED", Color::Red),
        }
    }

    fn key_hints(&self) -> &'static str {
        if self.state.pending {
            return "waiting for the endpoint...";
        }
        match self.state.focus {
            Focus::Submit => "Enter:send  Tab:next  Esc:quit",
            Focus::Field(field) if is_select(field) => {
                "Left/Right:choose  Tab:next  Ctrl+S:send  Esc:quit"
            }
            Focus::Field(_) => "Tab:next  Ctrl+S:send  Esc:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: phase indicator
        let (phase_text, phase_color) = self.phase_indicator();
        let phase_style = Style::default()
            .fg(Color::Black)
            .bg(phase_color)
            .add_modifier(Modifier::BOLD);
        let phase_line = Line::from(vec![Span::styled(
            format!(" {} ", phase_text),
            phase_style,
        )]);
        let phase_width = phase_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &phase_line, phase_width);

        // Right: key hints, right-aligned
        let hints = self.key_hints();
        let hints_width = hints.len() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + phase_width {
            let hints_line = Line::from(vec![Span::styled(hints, bg_style)]);
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}
