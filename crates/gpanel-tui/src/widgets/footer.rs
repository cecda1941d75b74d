//! Key hint bar for the current view and mode

use gpanel_app::state::{AppState, UiMode};
use gpanel_app::view::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode() {
            UiMode::Prompt => &[("Enter", "ok"), ("Esc", "cancel")],
            UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel"), ("←→", "choose")],
            UiMode::BrandManager => &[("a", "add"), ("r", "rename"), ("d", "delete"), ("Esc", "close")],
            UiMode::Normal => match self.state.view {
                View::Dashboard => &[("r", "refresh")],
                View::Controls => &[
                    ("o/x", "power"),
                    ("m", "mode"),
                    ("+/-", "temp"),
                    ("n", "fan"),
                    ("b/v", "brand"),
                    ("/", "filter"),
                    ("e", "brands"),
                ],
                View::Keys => &[("Enter", "send"), ("n", "rename"), ("d", "delete")],
                View::Learning => &[
                    ("s", "start"),
                    ("x", "stop"),
                    ("↑↓←→", "generator"),
                    ("k", "suggest"),
                    ("n", "name"),
                ],
                View::Led => &[
                    ("1-8", "select"),
                    ("0", "none"),
                    (",/.", "color"),
                    ("Enter", "apply"),
                    ("a", "all"),
                    ("e", "effect"),
                    ("p", "save"),
                ],
                View::Logs => &[("↑↓", "scroll"), ("c", "clear")],
                View::System => &[
                    ("s", "scan"),
                    ("i/w", "ssid/pass"),
                    ("W", "save"),
                    ("u", "check"),
                    ("U", "update"),
                ],
            },
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        if self.state.ui_mode() == UiMode::Normal {
            spans.push(Span::styled("Tab", styles::keybinding()));
            spans.push(Span::styled(" view  ", styles::text_muted()));
            spans.push(Span::styled("q", styles::keybinding()));
            spans.push(Span::styled(" quit", styles::text_muted()));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_app::prompt::{PromptKind, PromptState};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(Footer::new(state), term.area());
        term
    }

    #[test]
    fn test_hints_follow_view() {
        let mut state = create_test_state();
        state.view = View::Logs;
        let term = render(&state);
        assert!(term.buffer_contains("c clear"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_prompt_hints_replace_view_hints() {
        let mut state = create_test_state();
        state.view = View::Logs;
        state.prompt = Some(PromptState::new(PromptKind::AddBrand, ""));
        let term = render(&state);
        assert!(term.buffer_contains("Esc cancel"));
        assert!(!term.buffer_contains("c clear"));
        assert!(!term.buffer_contains("q quit"));
    }
}
