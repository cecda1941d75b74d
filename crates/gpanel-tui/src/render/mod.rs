//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use gpanel_app::state::{AppState, UiMode};
use gpanel_app::view::View;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure function of the state; overlays are picked from [`UiMode`] so at
/// most one modal is drawn, and toasts always end up on top.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.sidebar_open);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    if let Some(sidebar) = areas.sidebar {
        frame.render_widget(widgets::Sidebar::new(state), sidebar);
    }
    render_content(frame, state, areas.content);
    frame.render_widget(widgets::Footer::new(state), areas.footer);

    match state.ui_mode() {
        UiMode::Prompt => {
            if let Some(prompt) = &state.prompt {
                frame.render_widget(widgets::Prompt::new(prompt), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        UiMode::BrandManager => {
            frame.render_widget(widgets::BrandManager::new(&state.brands), area);
        }
        UiMode::Normal => {}
    }

    if !state.toasts.is_empty() {
        frame.render_widget(widgets::Toasts::new(&state.toasts), areas.content);
    }
}

fn render_content(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.view {
        View::Dashboard => frame.render_widget(widgets::Dashboard::new(state), area),
        View::Controls => frame.render_widget(widgets::AcControls::new(state), area),
        View::Keys => frame.render_widget(widgets::KeyList::new(state), area),
        View::Learning => frame.render_widget(widgets::Learning::new(state), area),
        View::Led => frame.render_widget(widgets::LedRing::new(state), area),
        View::Logs => frame.render_widget(widgets::LogView::new(&state.logs), area),
        View::System => frame.render_widget(widgets::SystemPanel::new(&state.system), area),
    }
}
