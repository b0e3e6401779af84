//! Cursor trail markers
//!
//! A fixed pool of on-screen markers, one per trail slot. Marker `i` follows
//! the `i`-th newest trail point and is scaled by `decay^i`; markers with no
//! matching point are hidden rather than removed.

use crate::trail::{TrailBuffer, MAX_TRAIL_CAPACITY};

/// Geometric falloff for the marker at age `index`
#[inline]
pub fn decay_factor(decay: f32, index: usize) -> f32 {
    decay.powi(index as i32)
}

/// Visual state of one pooled marker (window pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMarker {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels
    pub size: f32,
    pub opacity: f32,
    /// Blur radius in pixels
    pub blur: f32,
    pub visible: bool,
}

impl TrailMarker {
    const HIDDEN: Self = Self {
        x: 0.0,
        y: 0.0,
        size: 0.0,
        opacity: 0.0,
        blur: 0.0,
        visible: false,
    };
}

/// Pool of trail markers plus the decay parameters that drive them
#[derive(Clone, Debug)]
pub struct CursorTrail {
    markers: Vec<TrailMarker>,
    decay: f32,
    base_opacity: f32,
    base_blur: f32,
    throttle_ms: f64,
    last_update_ms: Option<f64>,
}

impl CursorTrail {
    /// Create a pool of `count` hidden markers, at most `MAX_TRAIL_CAPACITY`
    pub fn new(count: usize) -> Self {
        Self {
            markers: vec![TrailMarker::HIDDEN; count.min(MAX_TRAIL_CAPACITY)],
            decay: 0.8,
            base_opacity: 0.6,
            base_blur: 10.0,
            throttle_ms: 16.0,
            last_update_ms: None,
        }
    }

    /// Builder: set the per-slot decay factor
    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Builder: set the blur radius of the newest marker
    pub fn with_base_blur(mut self, blur: f32) -> Self {
        self.base_blur = blur;
        self
    }

    /// Builder: set the opacity of the newest marker
    pub fn with_base_opacity(mut self, opacity: f32) -> Self {
        self.base_opacity = opacity;
        self
    }

    /// Builder: minimum milliseconds between marker updates
    pub fn with_throttle_ms(mut self, throttle_ms: f64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn markers(&self) -> &[TrailMarker] {
        &self.markers
    }

    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    /// Recompute marker state from the trail buffer
    ///
    /// Skipped when called again within the throttle interval. Returns true if
    /// the markers were updated.
    pub fn update(&mut self, now_ms: f64, trail: &TrailBuffer, base_size: f32) -> bool {
        if let Some(last) = self.last_update_ms {
            if now_ms - last < self.throttle_ms {
                return false;
            }
        }
        self.last_update_ms = Some(now_ms);

        for (i, marker) in self.markers.iter_mut().enumerate() {
            *marker = match trail.newest(i) {
                Some(point) => {
                    let factor = decay_factor(self.decay, i);
                    TrailMarker {
                        x: point.x,
                        y: point.y,
                        size: base_size * factor,
                        opacity: self.base_opacity * factor,
                        blur: self.base_blur * factor,
                        visible: true,
                    }
                }
                None => TrailMarker { visible: false, ..*marker },
            };
        }
        true
    }

    /// Hide every marker immediately, bypassing the throttle
    pub fn hide_all(&mut self) {
        for marker in &mut self.markers {
            marker.visible = false;
        }
        log::debug!("Hid {} trail markers", self.markers.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::TrailPoint;

    fn trail_of(n: usize) -> TrailBuffer {
        let mut trail = TrailBuffer::new(10);
        for i in 0..n {
            trail.push(TrailPoint::new(i as f32 * 10.0, 50.0, i as f64));
        }
        trail
    }

    #[test]
    fn test_decay_factor_powers() {
        assert_eq!(decay_factor(0.8, 0), 1.0);
        assert!((decay_factor(0.8, 1) - 0.8).abs() < 1e-6);
        assert!((decay_factor(0.8, 9) - 0.134_217_73).abs() < 1e-6);
    }

    #[test]
    fn test_marker_pool_is_bounded() {
        assert_eq!(CursorTrail::new(usize::MAX).markers().len(), MAX_TRAIL_CAPACITY);
        assert_eq!(CursorTrail::new(10).markers().len(), 10);
    }

    #[test]
    fn test_markers_follow_newest_first() {
        let mut cursor = CursorTrail::new(10);
        assert!(cursor.update(0.0, &trail_of(3), 100.0));

        let markers = cursor.markers();
        assert_eq!(cursor.visible_count(), 3);
        assert_eq!(markers[0].x, 20.0);
        assert_eq!(markers[2].x, 0.0);
        assert!(!markers[3].visible);
    }

    #[test]
    fn test_marker_scaling() {
        let mut cursor = CursorTrail::new(10).with_decay(0.8).with_base_blur(10.0);
        cursor.update(0.0, &trail_of(10), 100.0);

        let oldest = cursor.markers()[9];
        let factor = 0.8f32.powi(9);
        assert!((oldest.size - 100.0 * factor).abs() < 1e-4);
        assert!((oldest.blur - 10.0 * factor).abs() < 1e-5);
        assert!((oldest.opacity - 0.6 * factor).abs() < 1e-6);
        assert_eq!(cursor.markers()[0].size, 100.0);
    }

    #[test]
    fn test_update_throttled() {
        let mut cursor = CursorTrail::new(10).with_throttle_ms(16.0);
        assert!(cursor.update(100.0, &trail_of(1), 100.0));
        assert!(!cursor.update(110.0, &trail_of(2), 100.0));
        assert_eq!(cursor.visible_count(), 1);
        assert!(cursor.update(116.0, &trail_of(2), 100.0));
        assert_eq!(cursor.visible_count(), 2);
    }

    #[test]
    fn test_markers_hidden_not_removed() {
        let mut cursor = CursorTrail::new(10).with_throttle_ms(0.0);
        cursor.update(0.0, &trail_of(5), 100.0);
        cursor.update(1.0, &TrailBuffer::new(10), 100.0);

        assert_eq!(cursor.markers().len(), 10);
        assert_eq!(cursor.visible_count(), 0);
    }

    #[test]
    fn test_hide_all() {
        let mut cursor = CursorTrail::new(10);
        cursor.update(0.0, &trail_of(10), 100.0);
        assert_eq!(cursor.visible_count(), 10);

        cursor.hide_all();
        assert!(cursor.markers().iter().all(|m| !m.visible));
    }
}
