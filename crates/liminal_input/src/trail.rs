//! Fixed-capacity FIFO of recent pointer positions

use std::collections::VecDeque;

/// Default number of retained trail samples
pub const DEFAULT_TRAIL_CAPACITY: usize = 10;

/// Upper bound on retained trail samples and marker slots
pub const MAX_TRAIL_CAPACITY: usize = 256;

/// A timestamped pointer position in window pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub captured_at_ms: f64,
}

impl TrailPoint {
    pub fn new(x: f32, y: f32, captured_at_ms: f64) -> Self {
        Self { x, y, captured_at_ms }
    }
}

/// Trail buffer, oldest sample first
///
/// Never holds more than `capacity` points; pushing onto a full buffer evicts
/// the oldest sample.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

impl TrailBuffer {
    /// Create an empty buffer; capacity is clamped to `1..=MAX_TRAIL_CAPACITY`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_TRAIL_CAPACITY);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if over capacity
    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples in arrival order (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// The `age`-th newest sample (0 = newest)
    pub fn newest(&self, age: usize) -> Option<&TrailPoint> {
        let len = self.points.len();
        if age >= len {
            return None;
        }
        self.points.get(len - 1 - age)
    }
}
