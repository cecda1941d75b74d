//! Named views of the panel

use std::fmt;

/// One page of the panel. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Controls,
    Keys,
    Learning,
    Led,
    Logs,
    System,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Controls,
        View::Keys,
        View::Learning,
        View::Led,
        View::Logs,
        View::System,
    ];

    pub fn id(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Controls => "controls",
            View::Keys => "keys",
            View::Learning => "learning",
            View::Led => "led",
            View::Logs => "logs",
            View::System => "system",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Controls => "AC Control",
            View::Keys => "IR Keys",
            View::Learning => "Learn",
            View::Led => "LED Ring",
            View::Logs => "Logs",
            View::System => "System",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Position in [`View::ALL`]; also the F-key number minus one.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Some(view));
        }
        assert_eq!(View::from_id("settings"), None);
    }

    #[test]
    fn test_index_matches_order() {
        assert_eq!(View::Dashboard.index(), 0);
        assert_eq!(View::System.index(), 6);
    }
}
