//! System view: Wi-Fi scan and credentials, firmware update

use gpanel_app::state::{Remote, SystemState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const NO_NETWORKS: &str = "No networks found";

pub struct SystemPanel<'a> {
    state: &'a SystemState,
}

impl<'a> SystemPanel<'a> {
    pub fn new(state: &'a SystemState) -> Self {
        Self { state }
    }

    fn render_networks(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Wi-Fi networks ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match &self.state.networks {
            Remote::NotLoaded => vec![Line::from(Span::styled(
                "Press s to scan",
                styles::text_muted(),
            ))],
            Remote::Loading => vec![Line::from(Span::styled("Scanning...", styles::text_muted()))],
            Remote::Failed(text) => vec![Line::from(Span::styled(text.as_str(), styles::error_text()))],
            Remote::Loaded(list) if list.is_empty() => {
                vec![Line::from(Span::styled(NO_NETWORKS, styles::text_muted()))]
            }
            Remote::Loaded(list) => list
                .iter()
                .enumerate()
                .map(|(i, network)| {
                    let bars = usize::from(network.bars());
                    let signal = format!("{}{}", "▮".repeat(bars), "▯".repeat(4 - bars.min(4)));
                    let style = if i == self.state.selected {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    };
                    Line::from(vec![
                        Span::styled(format!(" {:<24}", network.ssid), style),
                        Span::styled(format!(" {signal}"), styles::accent()),
                        Span::styled(format!(" {} dBm", network.rssi), styles::text_muted()),
                    ])
                })
                .collect(),
        };
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_credentials(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Credentials");
        let inner = block.inner(area);
        block.render(area, buf);

        let wifi = &self.state.wifi;
        let ssid = if wifi.ssid.is_empty() {
            Span::styled("(not set)", styles::text_muted())
        } else {
            Span::styled(wifi.ssid.clone(), styles::text_primary())
        };
        let password = if wifi.password.is_empty() {
            Span::styled("(not set)", styles::text_muted())
        } else {
            Span::styled("*".repeat(wifi.password.chars().count()), styles::text_primary())
        };
        Paragraph::new(vec![
            Line::from(vec![Span::styled("SSID      ", styles::text_secondary()), ssid]),
            Line::from(vec![
                Span::styled("Password  ", styles::text_secondary()),
                password,
            ]),
        ])
        .render(inner, buf);
    }

    fn render_firmware(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Firmware");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        if let Some(ota) = &self.state.ota {
            lines.push(Line::from(vec![
                Span::styled("Installed ", styles::text_secondary()),
                Span::styled(format!("v{}", ota.current), styles::text_primary()),
            ]));
        }
        if let Some(status) = &self.state.ota_status {
            lines.push(Line::from(Span::styled(status.clone(), styles::accent())));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Press u to check for updates",
                styles::text_muted(),
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for SystemPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let right = Layout::vertical([Constraint::Length(4), Constraint::Min(4)]).split(cols[1]);
        self.render_networks(cols[0], buf);
        self.render_credentials(right[0], buf);
        self.render_firmware(right[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gpanel_core::{OtaInfo, WifiNetwork};

    fn render(state: &SystemState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 14);
        term.render_widget(SystemPanel::new(state), term.area());
        term
    }

    #[test]
    fn test_network_placeholders() {
        let mut state = SystemState::default();
        assert!(render(&state).buffer_contains("Press s to scan"));

        state.networks = Remote::Loaded(Vec::new());
        assert!(render(&state).buffer_contains(NO_NETWORKS));

        state.networks = Remote::Failed("Scan failed".to_string());
        assert!(render(&state).buffer_contains("Scan failed"));
    }

    #[test]
    fn test_networks_and_masked_password() {
        let mut state = SystemState::default();
        state.networks = Remote::Loaded(vec![WifiNetwork {
            ssid: "home".to_string(),
            rssi: -55,
        }]);
        state.wifi.ssid = "home".to_string();
        state.wifi.password = "secret".to_string();
        let term = render(&state);

        assert!(term.buffer_contains("-55 dBm"));
        assert!(term.buffer_contains("******"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_firmware_status() {
        let mut state = SystemState::default();
        state.ota = Some(OtaInfo {
            current: "2.1.0".to_string(),
            available: false,
            latest: None,
        });
        state.ota_status = Some("Checking...".to_string());
        let term = render(&state);
        assert!(term.buffer_contains("v2.1.0"));
        assert!(term.buffer_contains("Checking..."));
    }
}
