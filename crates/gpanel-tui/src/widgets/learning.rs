//! IR learning view
//!
//! Session status on top; below it the key-name generator and, once a
//! signal has been captured, the save form.

use gpanel_app::state::{AppState, LearnField};
use gpanel_app::view_model;
use gpanel_core::{classify, LearnPhase};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct Learning<'a> {
    state: &'a AppState,
}

impl<'a> Learning<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let session = &self.state.learn.session;
        let block = styles::titled_block("Learn IR");
        let inner = block.inner(area);
        block.render(area, buf);

        let color = match session.phase() {
            LearnPhase::Idle => palette::TEXT_SECONDARY,
            LearnPhase::Listening => palette::STATUS_YELLOW,
            LearnPhase::Captured { .. } => palette::STATUS_GREEN,
        };
        let status = Line::from(Span::styled(
            session.status_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(status).render(inner, buf);
    }

    fn field_line(&self, field: LearnField, label: &str, value: String) -> Line<'static> {
        let focused = self.state.learn.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let value_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(format!("{marker}{label:<7}"), styles::text_secondary()),
            Span::styled(format!(" ◀ {value} ▶ "), value_style),
        ])
    }

    fn render_generator(&self, area: Rect, buf: &mut Buffer) {
        let learn = &self.state.learn;
        let block = styles::titled_block("Key name");
        let inner = block.inner(area);
        block.render(area, buf);

        let brands = view_model::learn_brand_options(&self.state.brands.list);
        let brand = brands
            .get(learn.brand_index)
            .map(|o| o.label.clone())
            .unwrap_or_default();

        let mut lines = vec![
            self.field_line(LearnField::Brand, "Brand", brand),
            self.field_line(LearnField::Mode, "Mode", learn.mode.label().to_string()),
            self.field_line(LearnField::Temp, "Temp", format!("{}°C", learn.temp)),
            self.field_line(LearnField::Fan, "Fan", learn.fan.label().to_string()),
            Line::default(),
        ];

        let name = if learn.key_name.is_empty() {
            Span::styled("(none)", styles::text_muted())
        } else {
            Span::styled(learn.key_name.clone(), styles::accent_bold())
        };
        lines.push(Line::from(vec![
            Span::styled("  Name    ", styles::text_secondary()),
            name,
        ]));

        if learn.session.save_form_visible() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("  Enter", styles::keybinding()),
                Span::styled(" save captured signal", styles::text_secondary()),
            ]));
        }

        if let Some(message) = &learn.form_message {
            lines.push(Line::default());
            let style = styles::severity(classify(message));
            lines.push(Line::from(Span::styled(format!("  {message}"), style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for Learning<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);
        self.render_status(rows[0], buf);
        self.render_generator(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_core::LearnStatus;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 18);
        term.render_widget(Learning::new(state), term.area());
        term
    }

    #[test]
    fn test_idle_session_has_no_save_form() {
        let state = create_test_state();
        let term = render(&state);
        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("Daikin"));
        assert!(!term.buffer_contains("save captured signal"));
    }

    #[test]
    fn test_captured_signal_shows_save_form() {
        let mut state = create_test_state();
        state.learn.session.start();
        state.learn.session.apply_status(LearnStatus {
            learning: true,
            captured: 48,
        });
        state.learn.key_name = "dk_c24_a".to_string();
        let term = render(&state);

        assert!(term.buffer_contains("Signal Captured! (48 symbols)"));
        assert!(term.buffer_contains("save captured signal"));
        assert!(term.buffer_contains("dk_c24_a"));
    }

    #[test]
    fn test_focus_marker_and_form_message() {
        let mut state = create_test_state();
        state.learn.focus = LearnField::Temp;
        state.learn.form_message = Some("Enter a key name".to_string());
        let term = render(&state);
        assert!(term.buffer_contains("▶ Temp"));
        assert!(term.buffer_contains("Enter a key name"));
    }
}
