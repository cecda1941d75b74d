//! LED ring editor
//!
//! The ring is drawn from [`view_model::ring_cells`]; positions are offsets
//! from the ring center in layout units, scaled to the available cells.

use gpanel_app::state::{AppState, Remote};
use gpanel_app::view_model;
use gpanel_core::led::RING_RADIUS;
use gpanel_core::{Rgb, PALETTE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::palette::device_color;
use crate::theme::styles;

const SWATCH: &str = "██";

pub struct LedRing<'a> {
    state: &'a AppState,
}

impl<'a> LedRing<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_ring(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Ring ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 || inner.height < 3 {
            return;
        }

        let cx = f64::from(inner.x) + f64::from(inner.width) / 2.0;
        let cy = f64::from(inner.y) + f64::from(inner.height) / 2.0;
        let scale_x = (f64::from(inner.width) / 2.0 - 3.0).max(1.0) / RING_RADIUS;
        let scale_y = (f64::from(inner.height) / 2.0 - 1.0).max(1.0) / RING_RADIUS;

        let max_x = inner.right().saturating_sub(4);
        let max_y = inner.bottom().saturating_sub(1);

        for cell in view_model::ring_cells(self.state) {
            let x = ((cx + cell.x * scale_x).round() as u16)
                .saturating_sub(2)
                .clamp(inner.x, max_x);
            let y = ((cy + cell.y * scale_y).round() as u16).clamp(inner.y, max_y);

            let number = format!("{}", cell.index + 1);
            let number_style = if cell.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            buf.set_string(x, y, &number, number_style);
            buf.set_string(
                x + 1,
                y,
                SWATCH,
                Style::default().fg(device_color(cell.color)),
            );
        }

        let center = match self.state.led.selected {
            Some(i) => format!("#{}", i + 1),
            None => "none".to_string(),
        };
        let cx = (cx as u16).saturating_sub(center.len() as u16 / 2);
        buf.set_string(cx, cy as u16, &center, styles::accent_bold());
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let led = &self.state.led;
        let rows = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

        // Effect tabs
        let mut tabs = Vec::new();
        for tab in view_model::effect_tabs(&led.effect) {
            let style = if tab.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            tabs.push(Span::styled(format!(" {} ", tab.label), style));
            tabs.push(Span::raw(" "));
        }
        let block = styles::titled_block("Effect");
        let inner = block.inner(rows[0]);
        block.render(rows[0], buf);
        Paragraph::new(Line::from(tabs))
            .wrap(Wrap { trim: false })
            .render(inner, buf);

        // Speed and brightness
        let block = styles::titled_block("Levels");
        let inner = block.inner(rows[1]);
        block.render(rows[1], buf);
        let mut levels = vec![
            level_line("Speed", led.speed),
            level_line("Brightness", led.brightness),
        ];
        if let Remote::Failed(text) = &led.config {
            levels.push(Line::from(Span::styled(text.as_str(), styles::error_text())));
        }
        Paragraph::new(levels).render(inner, buf);

        // Palette
        let block = styles::titled_block("Color");
        let inner = block.inner(rows[2]);
        block.render(rows[2], buf);
        let mut swatches = Vec::new();
        for (i, hex) in PALETTE.iter().enumerate() {
            let color = Rgb::from_hex(hex).unwrap_or(Rgb::WHITE);
            let picked = led.custom_color.is_none() && i == led.swatch;
            let (open, close) = if picked { ("[", "]") } else { (" ", " ") };
            swatches.push(Span::styled(open, styles::accent_bold()));
            swatches.push(Span::styled(SWATCH, Style::default().fg(device_color(color))));
            swatches.push(Span::styled(close, styles::accent_bold()));
        }
        let picked = led.picked_color();
        let picked_label = if led.custom_color.is_some() {
            "Custom"
        } else {
            "Picked"
        };
        let picked_line = Line::from(vec![
            Span::styled(format!("{picked_label} "), styles::text_secondary()),
            Span::styled(SWATCH, Style::default().fg(device_color(picked))),
            Span::styled(format!(" {}", picked.to_hex()), styles::text_primary()),
        ]);
        Paragraph::new(vec![Line::from(swatches), Line::default(), picked_line])
            .render(inner, buf);

        self.render_system_colors(rows[3], buf);
    }

    fn render_system_colors(&self, area: Rect, buf: &mut Buffer) {
        let led = &self.state.led;
        let block = styles::titled_block("State colors");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match &led.system_colors {
            Remote::Loaded(colors) => colors
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let name_style = if i == led.system_selected {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    };
                    Line::from(vec![
                        Span::styled(format!(" {:<18}", c.name), name_style),
                        Span::raw(" "),
                        Span::styled(SWATCH, Style::default().fg(device_color(c.color()))),
                        Span::styled(format!(" {}", c.color().to_hex()), styles::text_muted()),
                    ])
                })
                .collect(),
            Remote::Failed(text) => vec![Line::from(Span::styled(
                text.as_str(),
                styles::error_text(),
            ))],
            Remote::NotLoaded | Remote::Loading => {
                vec![Line::from(Span::styled("Loading...", styles::text_muted()))]
            }
        };
        Paragraph::new(lines).render(inner, buf);
    }
}

fn level_line(label: &str, value: u8) -> Line<'static> {
    const WIDTH: usize = 20;
    let filled = usize::from(value) * WIDTH / 100;
    Line::from(vec![
        Span::styled(format!("{label:<11}"), styles::text_secondary()),
        Span::styled("▮".repeat(filled), styles::accent()),
        Span::styled("▯".repeat(WIDTH - filled), styles::text_muted()),
        Span::styled(format!(" {value:>3}"), styles::text_primary()),
    ])
}

impl Widget for LedRing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        self.render_ring(cols[0], buf);
        self.render_controls(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_core::{LedTarget, SystemColor};
    use ratatui::style::Color;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(110, 26);
        term.render_widget(LedRing::new(state), term.area());
        term
    }

    fn ring_state() -> AppState {
        let mut state = create_test_state();
        state.led.init_ring(RING_RADIUS);
        state
    }

    #[test]
    fn test_ring_draws_every_position() {
        let state = ring_state();
        let term = render(&state);
        for n in 1..=8 {
            assert!(term.buffer_contains(&format!("{n}██")), "position {n}");
        }
        assert!(term.buffer_contains("none"));
    }

    #[test]
    fn test_ring_cell_takes_device_color() {
        let mut state = ring_state();
        state
            .led
            .colors
            .apply(LedTarget::Position(2), Rgb::new(255, 0, 0));
        state.led.selected = Some(2);
        let term = render(&state);

        let red = term
            .buffer()
            .content()
            .iter()
            .filter(|c| c.symbol() == "█" && c.fg == Color::Rgb(255, 0, 0))
            .count();
        // One ring cell, two columns wide
        assert_eq!(red, 2);
        assert!(term.buffer_contains("#3"));
    }

    #[test]
    fn test_active_effect_tab_and_levels() {
        let mut state = ring_state();
        state.led.effect = "rainbow".to_string();
        state.led.speed = 50;
        let term = render(&state);
        assert!(term.buffer_contains("Rainbow"));
        assert!(term.buffer_contains("Speed"));
        assert!(term.buffer_contains(" 50"));
    }

    #[test]
    fn test_system_color_placeholders() {
        let mut state = ring_state();
        assert!(render(&state).buffer_contains("Loading..."));

        state.led.system_colors = Remote::Failed("Error loading colors".to_string());
        assert!(render(&state).buffer_contains("Error loading colors"));

        state.led.system_colors = Remote::Loaded(vec![SystemColor {
            id: 1,
            name: "Wi-Fi connecting".to_string(),
            r: 0,
            g: 0,
            b: 255,
        }]);
        let term = render(&state);
        assert!(term.buffer_contains("Wi-Fi connecting"));
        assert!(term.buffer_contains("#0000ff"));
    }
}
