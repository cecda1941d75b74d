//! Custom brand manager modal

use gpanel_app::state::BrandsState;
use gpanel_app::view_model;
use gpanel_core::MAX_CUSTOM_BRANDS;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 16;

pub struct BrandManager<'a> {
    state: &'a BrandsState,
}

impl<'a> BrandManager<'a> {
    pub fn new(state: &'a BrandsState) -> Self {
        Self { state }
    }
}

impl Widget for BrandManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let title = format!(
            "Custom brands ({}/{MAX_CUSTOM_BRANDS})",
            self.state.list.len()
        );
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let entries = view_model::manager_entries(&self.state.list);
        let lines: Vec<Line> = if entries.is_empty() {
            vec![Line::from(Span::styled(
                "No custom brands yet.",
                styles::text_muted(),
            ))]
        } else {
            let visible = usize::from(rows[0].height).max(1);
            let offset = self.state.manager_selected.saturating_sub(visible - 1);
            entries
                .into_iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(i, name)| {
                    if i == self.state.manager_selected {
                        Line::from(Span::styled(format!("▶ {name}"), styles::focused_selected()))
                    } else {
                        Line::from(Span::styled(format!("  {name}"), styles::text_primary()))
                    }
                })
                .collect()
        };
        Paragraph::new(lines).render(rows[0], buf);

        let hint = Line::from(vec![
            Span::styled("a", styles::keybinding()),
            Span::styled(" add  ", styles::text_muted()),
            Span::styled("r", styles::keybinding()),
            Span::styled(" rename  ", styles::text_muted()),
            Span::styled("d", styles::keybinding()),
            Span::styled(" delete  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]);
        Paragraph::new(hint).render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_manager() {
        let state = BrandsState::default();
        let mut term = TestTerminal::new();
        term.render_widget(BrandManager::new(&state), term.area());
        assert!(term.buffer_contains("Custom brands (0/20)"));
        assert!(term.buffer_contains("No custom brands yet."));
    }

    #[test]
    fn test_entries_are_decoded() {
        let state = BrandsState {
            list: vec!["My%20Split".to_string(), "Gree".to_string()],
            manager_selected: 1,
            manager_open: true,
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        term.render_widget(BrandManager::new(&state), term.area());
        assert!(term.buffer_contains("  My Split"));
        assert!(term.buffer_contains("▶ Gree"));
        assert!(!term.buffer_contains("%20"));
    }
}
