//! Pointer tracking
//!
//! Mouse and single-finger touch input both end up here. The tracker keeps
//! the normalized steering coordinates read by the camera and appends to the
//! cursor trail while the cursor effect is enabled.

use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use crate::trail::{TrailBuffer, TrailPoint};

/// Window size in physical pixels, never zero
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport, clamping each dimension to at least one pixel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map window pixels to `[-1, 1]` with +Y up
    pub fn normalize(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let x = (client_x / self.width) * 2.0 - 1.0;
        let y = -(client_y / self.height) * 2.0 + 1.0;
        (x, y)
    }
}

/// Pointer input after platform differences are removed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to window pixel coordinates
    Moved { x: f32, y: f32 },
    /// Button or touch went down; touches carry their position
    Pressed { at: Option<(f32, f32)> },
    /// Button or last touch released
    Released,
}

/// Maps winit window events to [`PointerEvent`]s
///
/// Touches are only honored while exactly one finger is down.
#[derive(Debug, Default)]
pub struct PointerEventMapper {
    active_touches: HashSet<u64>,
}

impl PointerEventMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event, returning None for unrelated events
    pub fn map(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(PointerEvent::Moved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => self.map_mouse_button(*button, *state),
            WindowEvent::Touch(touch) => self.map_touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
            ),
            _ => None,
        }
    }

    /// Any mouse button counts as a press
    pub fn map_mouse_button(&mut self, _button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        match state {
            ElementState::Pressed => Some(PointerEvent::Pressed { at: None }),
            ElementState::Released => Some(PointerEvent::Released),
        }
    }

    pub fn map_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                self.active_touches.insert(id);
                (self.active_touches.len() == 1).then_some(PointerEvent::Pressed { at: Some((x, y)) })
            }
            TouchPhase::Moved => {
                let single = self.active_touches.len() == 1 && self.active_touches.contains(&id);
                single.then_some(PointerEvent::Moved { x, y })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.remove(&id);
                Some(PointerEvent::Released)
            }
        }
    }

    pub fn active_touch_count(&self) -> usize {
        self.active_touches.len()
    }
}

/// Tracks the pointer position, trail, and first-interaction flag
#[derive(Clone, Debug)]
pub struct PointerTracker {
    viewport: Viewport,
    normalized: (f32, f32),
    last_client: Option<(f32, f32)>,
    trail: TrailBuffer,
    trail_enabled: bool,
    interacted: bool,
    pressed: bool,
}

impl PointerTracker {
    /// Create a tracker for a window of the given size
    pub fn new(width: u32, height: u32, trail_capacity: usize) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            normalized: (0.0, 0.0),
            last_client: None,
            trail: TrailBuffer::new(trail_capacity),
            trail_enabled: true,
            interacted: false,
            pressed: false,
        }
    }

    /// Record a pointer move in window pixels
    ///
    /// Returns true on the first move since the interaction flag was last
    /// reset.
    pub fn record_pointer(&mut self, client_x: f32, client_y: f32, now_ms: f64) -> bool {
        self.normalized = self.viewport.normalize(client_x, client_y);
        self.last_client = Some((client_x, client_y));

        if self.trail_enabled {
            self.trail.push(TrailPoint::new(client_x, client_y, now_ms));
        }

        let first = !self.interacted;
        self.interacted = true;
        first
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Steering coordinates in `[-1, 1]`
    pub fn normalized(&self) -> (f32, f32) {
        self.normalized
    }

    /// Last pointer position in window pixels
    pub fn last_client(&self) -> Option<(f32, f32)> {
        self.last_client
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn trail_enabled(&self) -> bool {
        self.trail_enabled
    }

    /// Enable or disable trail capture; disabling clears the buffer
    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
        if !enabled {
            self.trail.clear();
        }
    }

    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    pub fn reset_interaction(&mut self) {
        self.interacted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_corners() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.normalize(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(viewport.normalize(800.0, 600.0), (1.0, -1.0));
        assert_eq!(viewport.normalize(400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_normalize_idempotent() {
        let mut tracker = PointerTracker::new(800, 600, 10);
        tracker.record_pointer(200.0, 150.0, 0.0);
        let first = tracker.normalized();
        tracker.record_pointer(200.0, 150.0, 16.0);
        assert_eq!(tracker.normalized(), first);
        assert_eq!(first, (-0.5, 0.5));
    }

    #[test]
    fn test_zero_viewport_clamped() {
        let viewport = Viewport::new(0, 0);
        assert_eq!(viewport.width(), 1.0);
        assert_eq!(viewport.height(), 1.0);
        assert!(viewport.normalize(0.5, 0.5).0.is_finite());
    }

    #[test]
    fn test_three_moves_fill_trail_in_order() {
        let mut tracker = PointerTracker::new(1280, 720, 10);
        tracker.record_pointer(100.0, 100.0, 0.0);
        tracker.record_pointer(110.0, 100.0, 16.0);
        tracker.record_pointer(120.0, 100.0, 32.0);

        let xs: Vec<f32> = tracker.trail().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![100.0, 110.0, 120.0]);
    }

    #[test]
    fn test_fifteen_moves_keep_last_ten() {
        let mut tracker = PointerTracker::new(1280, 720, 10);
        for i in 0..15 {
            tracker.record_pointer(i as f32, 0.0, i as f64 * 16.0);
        }

        assert_eq!(tracker.trail().len(), 10);
        let first = tracker.trail().iter().next().map(|p| p.x);
        assert_eq!(first, Some(5.0));
        assert_eq!(tracker.trail().newest(0).map(|p| p.x), Some(14.0));
    }

    #[test]
    fn test_disabled_trail_not_recorded() {
        let mut tracker = PointerTracker::new(800, 600, 10);
        tracker.record_pointer(1.0, 1.0, 0.0);
        tracker.set_trail_enabled(false);
        assert!(tracker.trail().is_empty());

        tracker.record_pointer(2.0, 2.0, 16.0);
        assert!(tracker.trail().is_empty());
        // Steering still follows the pointer
        assert_eq!(tracker.last_client(), Some((2.0, 2.0)));
    }

    #[test]
    fn test_first_interaction_reported_once() {
        let mut tracker = PointerTracker::new(800, 600, 10);
        assert!(tracker.record_pointer(1.0, 1.0, 0.0));
        assert!(!tracker.record_pointer(2.0, 2.0, 1.0));

        tracker.reset_interaction();
        assert!(!tracker.has_interacted());
        assert!(tracker.record_pointer(3.0, 3.0, 2.0));
    }

    #[test]
    fn test_mouse_press_and_release() {
        let mut mapper = PointerEventMapper::new();
        assert_eq!(
            mapper.map_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(PointerEvent::Pressed { at: None })
        );
        assert_eq!(
            mapper.map_mouse_button(MouseButton::Right, ElementState::Released),
            Some(PointerEvent::Released)
        );
    }

    #[test]
    fn test_single_touch_moves() {
        let mut mapper = PointerEventMapper::new();
        assert_eq!(
            mapper.map_touch(1, TouchPhase::Started, 10.0, 20.0),
            Some(PointerEvent::Pressed { at: Some((10.0, 20.0)) })
        );
        assert_eq!(
            mapper.map_touch(1, TouchPhase::Moved, 15.0, 20.0),
            Some(PointerEvent::Moved { x: 15.0, y: 20.0 })
        );
        assert_eq!(mapper.map_touch(1, TouchPhase::Ended, 15.0, 20.0), Some(PointerEvent::Released));
        assert_eq!(mapper.active_touch_count(), 0);
    }

    #[test]
    fn test_multi_touch_ignored() {
        let mut mapper = PointerEventMapper::new();
        mapper.map_touch(1, TouchPhase::Started, 10.0, 20.0);
        assert_eq!(mapper.map_touch(2, TouchPhase::Started, 50.0, 60.0), None);
        assert_eq!(mapper.map_touch(1, TouchPhase::Moved, 12.0, 20.0), None);

        mapper.map_touch(2, TouchPhase::Cancelled, 50.0, 60.0);
        assert_eq!(
            mapper.map_touch(1, TouchPhase::Moved, 14.0, 20.0),
            Some(PointerEvent::Moved { x: 14.0, y: 20.0 })
        );
    }
}
