//! AC control view
//!
//! Power buttons, mode/temperature/fan pickers and the filtered brand list.

use gpanel_app::state::AppState;
use gpanel_app::view_model;
use gpanel_core::{AcMode, FanSpeed, TEMP_MAX, TEMP_MIN};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct AcControls<'a> {
    state: &'a AppState,
}

impl<'a> AcControls<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer) {
        let ac = &self.state.ac.mirror;
        let title = format!("AC · {}", view_model::ac_brand_label(&ac.brand));
        let block = styles::glass_block(true).title(format!(" {title} "));
        let inner = block.inner(area);
        block.render(area, buf);

        let buttons = ac.power_buttons();
        let power = Line::from(vec![
            Span::styled("Power  ", styles::text_secondary()),
            Span::styled(" ON ", styles::power_button(buttons.on)),
            Span::raw(" "),
            Span::styled(" OFF ", styles::power_button(buttons.off)),
        ]);

        let mut mode = vec![Span::styled("Mode   ", styles::text_secondary())];
        mode.extend(choice_spans(AcMode::ALL.iter().map(|m| (m.label(), *m == ac.mode))));

        let temp = Line::from(vec![
            Span::styled("Temp   ", styles::text_secondary()),
            Span::styled(format!("{}°C", ac.temp), styles::accent_bold()),
            Span::styled(format!("  ({TEMP_MIN}-{TEMP_MAX})"), styles::text_muted()),
        ]);

        let mut fan = vec![Span::styled("Fan    ", styles::text_secondary())];
        fan.extend(choice_spans(FanSpeed::ALL.iter().map(|f| (f.label(), *f == ac.fan))));

        let mut lines = vec![
            power,
            Line::default(),
            Line::from(mode),
            Line::default(),
            temp,
            Line::default(),
            Line::from(fan),
        ];
        if !self.state.ac.synced {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Waiting for device state...",
                styles::text_muted(),
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_brands(&self, area: Rect, buf: &mut Buffer) {
        let filter = &self.state.brands.filter;
        let title = if filter.is_empty() {
            " Brand ".to_string()
        } else {
            format!(" Brand · /{filter} ")
        };
        let block = styles::glass_block(false).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let current = view_model::current_ac_brand_value(self.state);
        let options = view_model::visible_ac_brands(self.state);
        if options.is_empty() {
            Paragraph::new(Span::styled("No matching brands", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = options
            .iter()
            .map(|o| {
                if o.value == current {
                    Line::from(Span::styled(format!("▶ {}", o.label), styles::focused_selected()))
                } else {
                    Line::from(Span::styled(format!("  {}", o.label), styles::text_primary()))
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// `[Cool] Heat Fan` style picker row.
fn choice_spans<'a>(choices: impl Iterator<Item = (&'a str, bool)>) -> Vec<Span<'a>> {
    choices
        .flat_map(|(label, active)| {
            let span = if active {
                Span::styled(format!("[{label}]"), styles::accent_bold())
            } else {
                Span::styled(format!(" {label} "), styles::text_muted())
            };
            [span, Span::raw(" ")]
        })
        .collect()
}

impl Widget for AcControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        self.render_panel(cols[0], buf);
        self.render_brands(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_core::{AcState, Brand};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 20);
        term.render_widget(AcControls::new(state), term.area());
        term
    }

    #[test]
    fn test_shows_mirror_values() {
        let mut state = create_test_state();
        state.ac.mirror = AcState {
            power: true,
            mode: AcMode::Heat,
            temp: 27,
            fan: FanSpeed::High,
            brand: Brand::default(),
        };
        state.ac.synced = true;
        let term = render(&state);

        assert!(term.buffer_contains("[Heat]"));
        assert!(term.buffer_contains("27°C"));
        assert!(term.buffer_contains("[High]"));
        assert!(!term.buffer_contains("Waiting for device state"));
    }

    fn has_bg(term: &TestTerminal, color: ratatui::style::Color) -> bool {
        term.buffer().content().iter().any(|cell| cell.bg == color)
    }

    #[test]
    fn test_exactly_one_power_button_highlighted() {
        use crate::theme::palette::{STATUS_GREEN, STATUS_RED};

        let mut state = create_test_state();
        state.ac.mirror.power = true;
        let term = render(&state);
        assert!(has_bg(&term, STATUS_GREEN));
        assert!(!has_bg(&term, STATUS_RED));

        state.ac.mirror.power = false;
        let term = render(&state);
        assert!(has_bg(&term, STATUS_RED));
        assert!(!has_bg(&term, STATUS_GREEN));
    }

    #[test]
    fn test_custom_brands_listed_with_icon_and_filter() {
        let mut state = create_test_state();
        state.brands.list = vec!["My%20Split".to_string()];
        assert!(render(&state).buffer_contains("My Split"));

        state.brands.filter = "split".to_string();
        let term = render(&state);
        assert!(term.buffer_contains("/split"));
        assert!(term.buffer_contains("My Split"));
        assert!(!term.buffer_contains("Daikin"));
    }

    #[test]
    fn test_filter_without_matches() {
        let mut state = create_test_state();
        state.brands.filter = "zzz".to_string();
        assert!(render(&state).buffer_contains("No matching brands"));
    }
}
