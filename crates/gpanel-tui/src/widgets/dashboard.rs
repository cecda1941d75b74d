//! Dashboard view: temperature and RAM gauges, RSSI history, and the debug
//! extras (RAM chart, heap figures, last error).

use gpanel_app::state::AppState;
use gpanel_app::view_model::{self, DashboardGauges, DebugGauges};
use gpanel_core::Trend;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, Gauge, GraphType, Paragraph, Sparkline, Widget},
};

use crate::theme::{palette, styles};

pub const LOADING: &str = "Loading...";

/// Floor used to lift dBm readings into sparkline heights.
const RSSI_FLOOR: f64 = -100.0;

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = view_model::dashboard_view(self.state);

        let Some(gauges) = view.gauges else {
            let block = styles::titled_block("Device");
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled(LOADING, styles::text_muted())).render(inner, buf);
            return;
        };

        let mut constraints = vec![
            Constraint::Length(3), // temp gauge
            Constraint::Length(3), // ram gauge
            Constraint::Length(3), // info line
            Constraint::Min(4),    // rssi sparkline
        ];
        if view.show_ram_chart {
            constraints.push(Constraint::Min(8));
        }
        let rows = Layout::vertical(constraints).split(area);

        render_gauge(
            "Temperature",
            &gauges.temp_text,
            gauges.temp_percent,
            palette::STATUS_YELLOW,
            rows[0],
            buf,
        );
        render_gauge(
            "RAM",
            &gauges.ram_text,
            gauges.ram_percent,
            palette::ACCENT,
            rows[1],
            buf,
        );
        render_info(&gauges, view.debug.as_ref(), rows[2], buf);
        render_rssi(&self.state.dashboard.rssi_trend, &gauges.rssi, rows[3], buf);

        if view.show_ram_chart {
            render_ram_chart(
                &self.state.dashboard.ram_trend,
                self.state.dashboard.last_error.as_deref(),
                rows[4],
                buf,
            );
        }
    }
}

fn render_gauge(
    title: &str,
    label: &str,
    percent: f64,
    color: Color,
    area: Rect,
    buf: &mut Buffer,
) {
    Gauge::default()
        .block(styles::titled_block(title))
        .gauge_style(Style::default().fg(color).bg(palette::CARD_BG))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label.to_string())
        .render(area, buf);
}

fn render_info(gauges: &DashboardGauges, debug: Option<&DebugGauges>, area: Rect, buf: &mut Buffer) {
    let block = styles::titled_block("Firmware");
    let inner = block.inner(area);
    block.render(area, buf);

    let mut spans = vec![
        Span::styled(gauges.version.clone(), styles::text_primary()),
        Span::styled("  ·  ", styles::text_muted()),
        Span::styled(gauges.uptime.clone(), styles::text_secondary()),
    ];
    if let Some(debug) = debug {
        spans.extend([
            Span::styled("  ·  ", styles::text_muted()),
            Span::styled(format!("Heap {}", debug.free_heap), styles::text_secondary()),
            Span::styled(format!(" (min {})", debug.min_free_heap), styles::text_muted()),
            Span::styled(
                format!("  CPU {}  PSRAM {}", debug.cpu, debug.psram),
                styles::text_muted(),
            ),
        ]);
    }
    Paragraph::new(Line::from(spans)).render(inner, buf);
}

fn render_rssi(trend: &Trend, current: &str, area: Rect, buf: &mut Buffer) {
    let heights: Vec<u64> = trend
        .values()
        .into_iter()
        .map(|v| (v - RSSI_FLOOR).max(0.0) as u64)
        .collect();

    Sparkline::default()
        .block(styles::titled_block(&format!("Wi-Fi {current}")))
        .style(Style::default().fg(palette::STATUS_BLUE))
        .data(heights)
        .render(area, buf);
}

fn render_ram_chart(trend: &Trend, last_error: Option<&str>, area: Rect, buf: &mut Buffer) {
    let points: Vec<(f64, f64)> = trend
        .values()
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect();

    let labels: Vec<String> = match (trend.points().next(), trend.points().last()) {
        (Some(first), Some(last)) => vec![first.label(), last.label()],
        _ => Vec::new(),
    };

    let title = match last_error {
        Some(err) => format!("RAM history · last error: {err}"),
        None => "RAM history".to_string(),
    };

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette::ACCENT))
        .data(&points);

    Chart::new(vec![dataset])
        .block(styles::titled_block(&title))
        .x_axis(
            Axis::default()
                .style(styles::text_muted())
                .bounds([0.0, points.len().saturating_sub(1).max(1) as f64])
                .labels(labels),
        )
        .y_axis(
            Axis::default()
                .style(styles::text_muted())
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"]),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use gpanel_gateway::test_utils::sample_stats;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(90, 30);
        term.render_widget(Dashboard::new(state), term.area());
        term
    }

    #[test]
    fn test_loading_before_first_stats() {
        let state = create_test_state();
        let term = render(&state);
        assert!(term.buffer_contains(LOADING));
        assert!(!term.buffer_contains("Temperature"));
    }

    #[test]
    fn test_gauges_show_formatted_stats() {
        let mut state = create_test_state();
        state.dashboard.apply_stats(sample_stats());
        let term = render(&state);

        assert!(term.buffer_contains("42.5°C"));
        assert!(term.buffer_contains("37%"));
        assert!(term.buffer_contains("v2.1.0"));
        assert!(term.buffer_contains("Uptime: 1h 2m"));
        assert!(term.buffer_contains("-61 dBm"));
    }

    #[test]
    fn test_ram_chart_and_heap_only_in_debug() {
        let mut state = create_test_state();
        state.dashboard.apply_stats(sample_stats());
        assert!(!render(&state).buffer_contains("RAM history"));
        assert!(!render(&state).buffer_contains("Heap"));

        state.debug_mode = true;
        let term = render(&state);
        assert!(term.buffer_contains("RAM history"));
        assert!(term.buffer_contains("Heap 150.0 KB"));
        assert!(term.buffer_contains("Uptime: 1h 2m 5s"));
    }

    #[test]
    fn test_debug_chart_title_carries_last_error() {
        let mut state = create_test_state();
        state.debug_mode = true;
        state.dashboard.apply_stats(sample_stats());
        state.dashboard.last_error = Some("timeout".to_string());
        assert!(render(&state).buffer_contains("last error: timeout"));
    }
}
