//! Form widget — the six fields plus the submit action
//!
//! Each field renders as a label/value row with an optional inline error
//! line underneath. Select fields (subject, contact method) render as
//! `< option >` pickers; text fields show a block cursor when focused.

use crate::tui::state::{Focus, FormUiState, is_select};
use inquiry_domain::{ContactMethod, FieldId, Subject};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::str::FromStr;

const LABEL_WIDTH: usize = 18;

pub struct FormWidget<'a> {
    state: &'a FormUiState,
}

impl<'a> FormWidget<'a> {
    pub fn new(state: &'a FormUiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line<'_>> = Vec::new();

        for field in FieldId::ALL {
            lines.push(field_line(self.state, field));
            if let Some(error) = self.state.visible_error(field) {
                lines.push(error_line(error));
            }
            lines.push(Line::default());
        }

        lines.push(submit_line(self.state));

        Paragraph::new(lines).render(area, buf);
    }
}

fn field_line(state: &FormUiState, field: FieldId) -> Line<'_> {
    let focused = state.focus == Focus::Field(field) && !state.pending;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let marker = if field.is_required() { "*" } else { " " };
    let label = format!("{marker} {:<width$}", field.label(), width = LABEL_WIDTH);

    let mut spans = vec![Span::styled(label, label_style)];
    if is_select(field) {
        spans.extend(select_spans(state, field, focused));
    } else {
        spans.extend(text_spans(state, field, focused));
    }
    Line::from(spans)
}

fn text_spans(state: &FormUiState, field: FieldId, focused: bool) -> Vec<Span<'_>> {
    let value = state.store.value(field);

    if !focused {
        return vec![Span::raw(value)];
    }

    // Split the value around the cursor and show a block cursor
    let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);
    let cursor = state.cursor(field).min(value.len());
    let before = &value[..cursor];
    let after = &value[cursor..];

    let mut spans = vec![Span::raw(before)];
    if after.is_empty() {
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        spans.push(Span::styled(&after[..ch_len], cursor_style));
        if ch_len < after.len() {
            spans.push(Span::raw(&after[ch_len..]));
        }
    }
    spans
}

fn select_spans(state: &FormUiState, field: FieldId, focused: bool) -> Vec<Span<'static>> {
    let value = state.store.value(field);

    let display = match field {
        FieldId::Subject => Subject::from_str(value)
            .map(|s| s.label())
            .unwrap_or("(select)"),
        FieldId::ContactMethod => ContactMethod::from_str(value)
            .map(|m| m.label())
            .unwrap_or("(none)"),
        // Only select fields reach this function
        _ => return Vec::new(),
    };

    if focused {
        vec![
            Span::styled("< ", Style::default().fg(Color::Cyan)),
            Span::styled(
                display.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" >", Style::default().fg(Color::Cyan)),
        ]
    } else {
        let style = if Subject::from_str(value).is_ok() || ContactMethod::from_str(value).is_ok() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![Span::styled(display.to_string(), style)]
    }
}

fn error_line(message: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ])
}

fn submit_line(state: &FormUiState) -> Line<'static> {
    let (text, style) = if state.pending {
        (
            "[ Sending... ]",
            Style::default().fg(Color::DarkGray),
        )
    } else if state.focus == Focus::Submit {
        (
            "[ Send inquiry ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Send inquiry ]", Style::default().fg(Color::DarkGray))
    };

    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(text.to_string(), style),
    ])
}
