//! Header bar widget
//!
//! Connection dot, panel title, current view and device URL.

use gpanel_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Goku Panel";

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Green once stats arrived, red after a failed pull, hollow before.
    fn status_dot(&self) -> Span<'static> {
        let dash = &self.state.dashboard;
        if dash.last_error.is_some() {
            Span::styled("●", Style::default().fg(palette::STATUS_RED))
        } else if dash.stats.is_some() {
            Span::styled("●", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("○", styles::text_muted())
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            self.status_dot(),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.state.view.title(), styles::text_secondary()),
        ]);

        let mut right_spans = Vec::new();
        if self.state.debug_mode {
            right_spans.push(Span::styled(
                " DEBUG ",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ));
            right_spans.push(Span::raw(" "));
        }
        right_spans.push(Span::styled(
            self.state.settings.device.url.clone(),
            styles::text_muted(),
        ));
        right_spans.push(Span::raw(" "));
        let right = Line::from(right_spans);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Drop the right section rather than overlap the title
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_app::view::View;
    use gpanel_gateway::test_utils::sample_stats;

    fn render(state: &AppState, width: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, 3);
        term.render_widget(MainHeader::new(state), term.area());
        term
    }

    #[test]
    fn test_header_shows_title_and_view() {
        let mut state = create_test_state();
        state.view = View::Controls;
        let term = render(&state, 100);
        assert!(term.buffer_contains("Goku Panel"));
        assert!(term.buffer_contains("AC Control"));
        assert!(term.buffer_contains(&state.settings.device.url));
    }

    #[test]
    fn test_debug_badge_only_in_debug_mode() {
        let mut state = create_test_state();
        assert!(!render(&state, 100).buffer_contains("DEBUG"));
        state.debug_mode = true;
        assert!(render(&state, 100).buffer_contains("DEBUG"));
    }

    #[test]
    fn test_status_dot_follows_stats() {
        let mut state = create_test_state();
        assert!(render(&state, 100).buffer_contains("○"));

        state.dashboard.apply_stats(sample_stats());
        let term = render(&state, 100);
        assert!(term.buffer_contains("●"));
        assert!(!term.buffer_contains("○"));
    }

    #[test]
    fn test_narrow_header_drops_url() {
        let state = create_test_state();
        let term = render(&state, 30);
        assert!(term.buffer_contains("Goku Panel"));
        assert!(!term.buffer_contains(&state.settings.device.url));
    }
}
