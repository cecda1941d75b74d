//! Sidebar navigation
//!
//! Lists the reachable views with their function keys. The LED entry
//! disappears while the device reports the ring as disabled.

use gpanel_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Sidebar<'a> {
    state: &'a AppState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .state
            .visible_views()
            .into_iter()
            .map(|view| {
                let active = view == self.state.view;
                let key = format!("F{:<2}", view.index() + 1);
                let label = format!(" {:<width$}", view.title(), width = 14);
                if active {
                    Line::from(vec![
                        Span::styled(format!("▌{key}"), styles::accent_bold()),
                        Span::styled(label, styles::focused_selected()),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(format!(" {key}"), styles::keybinding()),
                        Span::styled(label, styles::text_primary()),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SIDEBAR_WIDTH;
    use crate::test_utils::{create_test_state, TestTerminal};

    #[test]
    fn test_sidebar_lists_views_with_fkeys() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(SIDEBAR_WIDTH, 12);
        term.render_widget(Sidebar::new(&state), term.area());

        assert!(term.buffer_contains("F1"));
        assert!(term.buffer_contains("Dashboard"));
        assert!(term.buffer_contains("F5"));
        assert!(term.buffer_contains("LED Ring"));
        assert!(term.buffer_contains("F7"));
        assert!(term.buffer_contains("System"));
    }

    #[test]
    fn test_hidden_led_entry_is_not_listed() {
        let mut state = create_test_state();
        state.dashboard.led_nav_hidden = true;
        let mut term = TestTerminal::with_size(SIDEBAR_WIDTH, 12);
        term.render_widget(Sidebar::new(&state), term.area());

        assert!(!term.buffer_contains("LED Ring"));
        // Function keys keep their view binding
        assert!(term.buffer_contains("F6"));
        assert!(!term.buffer_contains("F5"));
    }
}
