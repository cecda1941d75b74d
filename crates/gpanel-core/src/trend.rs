//! Bounded sample history for the dashboard charts

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Points kept per chart.
pub const TREND_CAPACITY: usize = 20;

/// A fixed-capacity buffer that drops the oldest entry when a push would
/// exceed capacity.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.buf.front()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

/// One chart sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub at: DateTime<Local>,
    pub value: f64,
}

impl TrendPoint {
    /// Axis label, wall-clock time of the sample.
    pub fn label(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// Time series shown on the dashboard.
#[derive(Debug, Clone)]
pub struct Trend {
    points: RingBuffer<TrendPoint>,
}

impl Default for Trend {
    fn default() -> Self {
        Self {
            points: RingBuffer::new(TREND_CAPACITY),
        }
    }
}

impl Trend {
    pub fn record(&mut self, value: f64) {
        self.record_at(Local::now(), value);
    }

    pub fn record_at(&mut self, at: DateTime<Local>, value: f64) {
        self.points.push(TrendPoint { at, value });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.latest().map(|p| p.value)
    }

    /// `(min, max)` over the stored values.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.value, p.value)),
            Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
        })
    }
}
