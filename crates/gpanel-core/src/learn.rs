//! IR learn session state machine and key-name generation
//!
//! The device captures raw IR symbols while a learn session is open. The
//! panel polls `/api/learn/status` once per second and moves between:
//!
//! ```text
//! Idle ──start──▶ Listening ──captured>0──▶ Captured ──save/stop──▶ Idle
//!                    │
//!                    └──stop / learning=false with nothing captured──▶ Idle
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ac::{AcMode, FanSpeed};

/// `GET /api/learn/status` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnStatus {
    pub learning: bool,
    pub captured: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LearnPhase {
    #[default]
    Idle,
    Listening,
    Captured { symbols: u32 },
}

/// Whether the status poll should keep running after a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    Continue,
    Stop,
}

/// Client-side view of a learn session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnSession {
    phase: LearnPhase,
    polling: bool,
    status_text: StatusText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum StatusText {
    #[default]
    Ready,
    Listening,
    Captured(u32),
    Stopped,
    NoSignal,
}

impl fmt::Display for StatusText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusText::Ready => f.write_str("Ready"),
            StatusText::Listening => f.write_str("Listening... Press remote button"),
            StatusText::Captured(n) => write!(f, "Signal Captured! ({n} symbols)"),
            StatusText::Stopped => f.write_str("Stopped"),
            StatusText::NoSignal => f.write_str("Stopped (No signal)"),
        }
    }
}

impl LearnSession {
    pub fn phase(&self) -> LearnPhase {
        self.phase
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    pub fn save_form_visible(&self) -> bool {
        matches!(self.phase, LearnPhase::Captured { .. })
    }

    pub fn status_text(&self) -> String {
        self.status_text.to_string()
    }

    /// Open a session. Any previous capture is discarded.
    pub fn start(&mut self) {
        self.phase = LearnPhase::Listening;
        self.polling = true;
        self.status_text = StatusText::Listening;
    }

    /// Explicit stop from the user.
    pub fn stop(&mut self) {
        self.phase = LearnPhase::Idle;
        self.polling = false;
        self.status_text = StatusText::Stopped;
    }

    /// The captured signal was stored on the device.
    pub fn saved(&mut self) {
        self.phase = LearnPhase::Idle;
        self.polling = false;
    }

    /// Fold one status report into the session.
    ///
    /// Reports arriving after polling ended are ignored and stop any
    /// straggling poller.
    pub fn apply_status(&mut self, status: LearnStatus) -> PollDecision {
        if !self.polling {
            return PollDecision::Stop;
        }

        if status.captured > 0 {
            self.phase = LearnPhase::Captured {
                symbols: status.captured,
            };
            self.status_text = StatusText::Captured(status.captured);
            if !status.learning {
                self.polling = false;
                return PollDecision::Stop;
            }
            return PollDecision::Continue;
        }

        if !status.learning {
            self.phase = LearnPhase::Idle;
            self.polling = false;
            self.status_text = StatusText::NoSignal;
            return PollDecision::Stop;
        }

        PollDecision::Continue
    }
}

/// Suggested key name for a captured AC signal: `{brand}_{mode}{temp}_{fan}`.
///
/// Well-known brands get a two-letter code; other brand names keep their
/// text with whitespace runs collapsed to `_`.
pub fn generate_key_name(brand: &str, mode: AcMode, temp: u8, fan: FanSpeed) -> String {
    let brand_code = match brand {
        "daikin" => "dk".to_string(),
        "samsung" => "ss".to_string(),
        "mitsubishi" => "mt".to_string(),
        other => other.split_whitespace().collect::<Vec<_>>().join("_"),
    };
    let fan_code = fan.key_code().unwrap_or('0');
    format!("{brand_code}_{}{temp}_{fan_code}", mode.key_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(learning: bool, captured: u32) -> LearnStatus {
        LearnStatus { learning, captured }
    }

    #[test]
    fn test_start_enters_listening() {
        let mut s = LearnSession::default();
        assert_eq!(s.status_text(), "Ready");
        s.start();
        assert_eq!(s.phase(), LearnPhase::Listening);
        assert!(s.is_polling());
        assert_eq!(s.status_text(), "Listening... Press remote button");
    }

    #[test]
    fn test_nothing_captured_while_learning_stays_listening() {
        let mut s = LearnSession::default();
        s.start();
        assert_eq!(s.apply_status(status(true, 0)), PollDecision::Continue);
        assert_eq!(s.phase(), LearnPhase::Listening);
        assert!(!s.save_form_visible());
    }

    #[test]
    fn test_timeout_without_capture_goes_idle() {
        let mut s = LearnSession::default();
        s.start();
        assert_eq!(s.apply_status(status(false, 0)), PollDecision::Stop);
        assert_eq!(s.phase(), LearnPhase::Idle);
        assert!(!s.is_polling());
        assert_eq!(s.status_text(), "Stopped (No signal)");
    }

    #[test]
    fn test_capture_reveals_form_regardless_of_learning_flag() {
        let mut s = LearnSession::default();
        s.start();
        assert_eq!(s.apply_status(status(true, 42)), PollDecision::Continue);
        assert!(s.save_form_visible());
        assert_eq!(s.phase(), LearnPhase::Captured { symbols: 42 });

        let mut s = LearnSession::default();
        s.start();
        assert_eq!(s.apply_status(status(false, 42)), PollDecision::Stop);
        assert!(s.save_form_visible());
        assert_eq!(s.status_text(), "Signal Captured! (42 symbols)");
    }

    #[test]
    fn test_stop_and_save_return_to_idle() {
        let mut s = LearnSession::default();
        s.start();
        s.stop();
        assert_eq!(s.phase(), LearnPhase::Idle);
        assert_eq!(s.status_text(), "Stopped");

        s.start();
        s.apply_status(status(false, 10));
        s.saved();
        assert_eq!(s.phase(), LearnPhase::Idle);
        assert!(!s.save_form_visible());
    }

    #[test]
    fn test_late_status_after_stop_is_ignored() {
        let mut s = LearnSession::default();
        s.start();
        s.stop();
        assert_eq!(s.apply_status(status(false, 12)), PollDecision::Stop);
        assert_eq!(s.phase(), LearnPhase::Idle);
    }

    #[test]
    fn test_generate_key_name() {
        assert_eq!(
            generate_key_name("daikin", AcMode::Cool, 24, FanSpeed::Auto),
            "dk_c24_a"
        );
        assert_eq!(
            generate_key_name("Mini  Split", AcMode::Dry, 18, FanSpeed::Turbo),
            "Mini_Split_d18_0"
        );
    }
}
