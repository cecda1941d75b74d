//! Triple-press gesture on the logo that toggles debug mode

use std::time::{Duration, Instant};

/// Maximum gap between consecutive presses.
pub const PRESS_WINDOW: Duration = Duration::from_millis(500);

/// Presses needed to fire.
pub const PRESSES_TO_TOGGLE: u8 = 3;

/// Counts logo presses. A gap longer than [`PRESS_WINDOW`] starts over.
#[derive(Debug, Clone, Default)]
pub struct DebugGesture {
    count: u8,
    last: Option<Instant>,
}

impl DebugGesture {
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Register a press at `now`. Returns `true` when this press completes
    /// the gesture; the counter is then reset.
    pub fn press(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            if now.saturating_duration_since(last) > PRESS_WINDOW {
                self.count = 0;
            }
        }

        self.count += 1;
        self.last = Some(now);

        if self.count >= PRESSES_TO_TOGGLE {
            self.count = 0;
            self.last = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_three_quick_presses_fire() {
        let t0 = Instant::now();
        let mut g = DebugGesture::default();
        assert!(!g.press(t0));
        assert!(!g.press(t0 + ms(200)));
        assert!(g.press(t0 + ms(650)));
        assert_eq!(g.count(), 0);
    }

    #[test]
    fn test_gap_exactly_at_window_still_counts() {
        let t0 = Instant::now();
        let mut g = DebugGesture::default();
        g.press(t0);
        g.press(t0 + ms(500));
        assert!(g.press(t0 + ms(1000)));
    }

    #[test]
    fn test_slow_press_restarts_count_at_one() {
        let t0 = Instant::now();
        let mut g = DebugGesture::default();
        g.press(t0);
        g.press(t0 + ms(100));
        assert_eq!(g.count(), 2);

        assert!(!g.press(t0 + ms(700)));
        assert_eq!(g.count(), 1);

        assert!(!g.press(t0 + ms(800)));
        assert!(g.press(t0 + ms(900)));
    }

    #[test]
    fn test_fourth_press_after_gap_is_one_not_four() {
        let t0 = Instant::now();
        let mut g = DebugGesture::default();
        g.press(t0);
        g.press(t0 + ms(100));
        assert!(g.press(t0 + ms(200)));
        assert!(!g.press(t0 + ms(900)));
        assert_eq!(g.count(), 1);
    }
}
