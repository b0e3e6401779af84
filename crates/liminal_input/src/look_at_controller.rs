//! Look-at camera steered by the pointer
//!
//! The eye stays put; the point it looks at eases toward a target derived
//! from the normalized pointer position. Easing is a fixed fraction per frame.

use liminal_math::{mat4, Mat4, Vec3};

/// Smoothed look-at camera
#[derive(Clone, Debug)]
pub struct LookAtController {
    eye: Vec3,
    look_at: Vec3,
    home_eye: Vec3,
    home_look_at: Vec3,

    // Configuration
    /// Fraction of the remaining distance covered each frame
    pub easing: f32,
    /// Horizontal target range for a pointer at the window edge
    pub range_x: f32,
    /// Vertical target range for a pointer at the window edge
    pub range_y: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl Default for LookAtController {
    fn default() -> Self {
        Self::new()
    }
}

impl LookAtController {
    pub fn new() -> Self {
        let eye = Vec3::new(0.0, 1.6, 5.0);
        let look_at = Vec3::new(0.0, 1.6, 0.0);
        Self {
            eye,
            look_at,
            home_eye: eye,
            home_look_at: look_at,
            easing: 0.05,
            range_x: 5.0,
            range_y: 2.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }

    /// Builder: set the eye position (also the reset position)
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self.home_eye = eye;
        self
    }

    /// Builder: set the initial look-at point (also the reset point)
    pub fn with_look_at(mut self, look_at: Vec3) -> Self {
        self.look_at = look_at;
        self.home_look_at = look_at;
        self
    }

    /// Builder: set the easing fraction
    pub fn with_easing(mut self, easing: f32) -> Self {
        self.easing = easing;
        self
    }

    /// Builder: set projection parameters
    pub fn with_projection(mut self, fov_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self.near = near;
        self.far = far;
        self
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Target look-at point for normalized pointer coordinates
    pub fn target_for(&self, pointer_x: f32, pointer_y: f32) -> Vec3 {
        Vec3::new(
            pointer_x * self.range_x,
            pointer_y * self.range_y + self.home_look_at.y,
            self.home_look_at.z,
        )
    }

    /// Ease the look-at point one frame toward the pointer target
    pub fn update(&mut self, pointer_x: f32, pointer_y: f32) -> Vec3 {
        let target = self.target_for(pointer_x, pointer_y);
        self.look_at += (target - self.look_at) * self.easing;
        self.look_at
    }

    /// Restore the eye and look-at point
    pub fn reset(&mut self) {
        self.eye = self.home_eye;
        self.look_at = self.home_look_at;
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Projection applied after view
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }
}
