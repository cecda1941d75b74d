//! Single-line text prompt

use gpanel_app::prompt::PromptState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 5;

pub struct Prompt<'a> {
    state: &'a PromptState,
}

impl<'a> Prompt<'a> {
    pub fn new(state: &'a PromptState) -> Self {
        Self { state }
    }
}

impl Widget for Prompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let block = styles::modal_block(self.state.kind.title());
        let inner = block.inner(modal);
        block.render(modal, buf);

        // Keep the cursor end visible when the input outgrows the box
        let shown = self.state.display_input();
        let room = usize::from(inner.width.saturating_sub(3));
        let mut visible = shown.as_str();
        while visible.width() > room {
            let mut chars = visible.chars();
            chars.next();
            visible = chars.as_str();
        }

        let input = Line::from(vec![
            Span::styled("> ", styles::accent()),
            Span::styled(visible.to_string(), styles::text_primary()),
            Span::styled("█", styles::accent()),
        ]);
        let hint = Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" ok  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel  ", styles::text_muted()),
            Span::styled("^U", styles::keybinding()),
            Span::styled(" clear", styles::text_muted()),
        ]);
        Paragraph::new(vec![input, Line::default(), hint]).render(inner, buf);
    }
}
