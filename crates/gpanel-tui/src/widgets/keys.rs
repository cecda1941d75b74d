//! Saved IR keys list

use gpanel_app::state::{AppState, Remote};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const NO_KEYS: &str = "No saved keys.";
pub const LOADING: &str = "Loading...";

pub struct KeyList<'a> {
    state: &'a AppState,
}

impl<'a> KeyList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for KeyList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = &self.state.keys;
        let title = match keys.list.loaded() {
            Some(list) => format!(" IR Keys ({}) ", list.len()),
            None => " IR Keys ".to_string(),
        };
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let list = match &keys.list {
            Remote::Loaded(list) if !list.is_empty() => list,
            Remote::Loaded(_) => {
                placeholder(NO_KEYS, inner, buf);
                return;
            }
            Remote::Failed(text) => {
                Paragraph::new(Span::styled(text.as_str(), styles::error_text()))
                    .render(inner, buf);
                return;
            }
            Remote::NotLoaded | Remote::Loading => {
                placeholder(LOADING, inner, buf);
                return;
            }
        };

        // Keep the highlighted key on screen
        let visible = usize::from(inner.height).max(1);
        let offset = keys.selected.saturating_sub(visible - 1);

        let lines: Vec<Line> = list
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, name)| {
                if i == keys.selected {
                    Line::from(Span::styled(format!("▶ {name}"), styles::focused_selected()))
                } else {
                    Line::from(Span::styled(format!("  {name}"), styles::text_primary()))
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

fn placeholder(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(text, styles::text_muted())).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    fn render(state: &AppState, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(40, height);
        term.render_widget(KeyList::new(state), term.area());
        term
    }

    #[test]
    fn test_placeholders() {
        let mut state = create_test_state();
        state.keys.list = Remote::Loading;
        assert!(render(&state, 6).buffer_contains(LOADING));

        state.keys.list = Remote::Loaded(Vec::new());
        assert!(render(&state, 6).buffer_contains(NO_KEYS));

        state.keys.list = Remote::Failed("Failed to load keys.".to_string());
        assert!(render(&state, 6).buffer_contains("Failed to load keys."));
    }

    #[test]
    fn test_selected_key_marked() {
        let mut state = create_test_state();
        state.keys.list = Remote::Loaded(vec!["tv_power".into(), "fan_on".into()]);
        state.keys.selected = 1;
        let term = render(&state, 6);
        assert!(term.buffer_contains("IR Keys (2)"));
        assert!(term.buffer_contains("▶ fan_on"));
        assert!(term.buffer_contains("  tv_power"));
    }

    #[test]
    fn test_scrolls_to_selection() {
        let mut state = create_test_state();
        let keys: Vec<String> = (0..10).map(|i| format!("key_{i}")).collect();
        state.keys.list = Remote::Loaded(keys);
        state.keys.selected = 9;
        // 3 inner rows
        let term = render(&state, 5);
        assert!(term.buffer_contains("▶ key_9"));
        assert!(!term.buffer_contains("key_0"));
    }
}
