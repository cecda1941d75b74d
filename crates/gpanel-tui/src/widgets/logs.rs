//! Device log viewer

use gpanel_app::state::{LogsState, Remote};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct LogView<'a> {
    state: &'a LogsState,
}

impl<'a> LogView<'a> {
    pub fn new(state: &'a LogsState) -> Self {
        Self { state }
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Device logs ");
        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = match &self.state.text {
            Remote::Loaded(text) if text.trim().is_empty() => {
                Paragraph::new(Span::styled("(empty)", styles::text_muted()))
            }
            Remote::Loaded(text) => {
                let lines: Vec<Line> = text
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary())))
                    .collect();
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((self.state.scroll, 0))
            }
            Remote::Failed(text) => Paragraph::new(Span::styled(text.as_str(), styles::error_text())),
            Remote::NotLoaded | Remote::Loading => {
                Paragraph::new(Span::styled("Loading...", styles::text_muted()))
            }
        };
        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(state: &LogsState) -> TestTerminal {
        let mut term = TestTerminal::with_size(50, 6);
        term.render_widget(LogView::new(state), term.area());
        term
    }

    #[test]
    fn test_placeholders() {
        let mut state = LogsState::default();
        assert!(render(&state).buffer_contains("Loading..."));

        state.text = Remote::Failed("Failed to load logs.".to_string());
        assert!(render(&state).buffer_contains("Failed to load logs."));
    }

    #[test]
    fn test_scroll_offsets_lines() {
        let mut state = LogsState {
            text: Remote::Loaded("line one\nline two\nline three".to_string()),
            scroll: 0,
        };
        assert!(render(&state).buffer_contains("line one"));

        state.scroll = 2;
        let term = render(&state);
        assert!(!term.buffer_contains("line one"));
        assert!(term.buffer_contains("line three"));
    }
}
