//! Confirmation dialog widget for destructive and rebooting actions

use gpanel_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 54;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            let style = if i == self.state.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_lines = self.state.message.lines().count().max(1) as u16;
        // borders + spacer + message + spacer + buttons + hint
        let height = message_lines + 6;
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, height, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let block = styles::modal_block(&self.state.title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(message_lines),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("y", styles::keybinding()),
            Span::styled(" confirm  ", styles::text_muted()),
            Span::styled("n/Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gpanel_app::message::Message;

    fn delete_dialog() -> ConfirmDialogState {
        ConfirmDialogState::confirm(
            "Delete brand",
            "Delete custom brand \"Gree\"?\n\nThis will NOT delete saved IR keys.",
            "Delete",
            Message::DeleteBrand("Gree".to_string()),
        )
    }

    #[test]
    fn test_renders_title_and_multiline_message() {
        let mut term = TestTerminal::new();
        let state = delete_dialog();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Delete brand"));
        assert!(term.buffer_contains("Delete custom brand \"Gree\"?"));
        assert!(term.buffer_contains("This will NOT delete saved IR keys."));
    }

    #[test]
    fn test_shows_options_and_keybindings() {
        let mut term = TestTerminal::new();
        let state = delete_dialog();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains(" Delete "));
        assert!(term.buffer_contains(" Cancel "));
        assert!(term.buffer_contains("n/Esc"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let mut term = TestTerminal::with_size(20, 5);
        let state = delete_dialog();
        term.render_widget(ConfirmDialog::new(&state), term.area());
    }
}
