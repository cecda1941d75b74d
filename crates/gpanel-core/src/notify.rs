//! User-facing notifications

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
        }
    }
}

/// Guess a severity from free-form text.
///
/// Only used for text whose origin is not known at the call site, such as
/// bodies returned by the device. Success words win over failure words.
pub fn classify(message: &str) -> Severity {
    let lower = message.to_lowercase();
    const SUCCESS: [&str; 5] = ["success", "saved", "added", "renamed", "deleted"];
    const FAILURE: [&str; 2] = ["fail", "error"];

    if SUCCESS.iter().any(|w| lower.contains(w)) {
        Severity::Success
    } else if FAILURE.iter().any(|w| lower.contains(w)) {
        Severity::Error
    } else {
        Severity::Info
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Severity inferred with [`classify`].
    pub fn classified(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(classify(&message), message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.icon(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(classify("LED preset saved to device!"), Severity::Success);
        assert_eq!(classify("Failed to save preset"), Severity::Error);
        assert_eq!(classify("Error: Brand exists"), Severity::Error);
        assert_eq!(classify("Update started! Wait for reboot..."), Severity::Info);
    }

    #[test]
    fn test_classify_success_wins() {
        assert_eq!(classify("Brand \"error_report\" deleted"), Severity::Success);
        assert_eq!(classify("Failed to save"), Severity::Success);
    }

    #[test]
    fn test_explicit_severity_is_kept() {
        let n = Notification::error("Failed to save");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(Notification::classified("Saved!").severity, Severity::Success);
    }
}
