//! The shared camera mutated by path playback.

use glam::Vec3;

use crate::options::CameraOptions;

/// Free-standing camera defined by an origin (eye) position and a focus
/// (look-at) target.
///
/// Playback writes the interpolated pose here every tick; rendering and
/// other systems read it. The camera itself has no notion of paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    focus: Vec3,
    up: Vec3,
}

impl Camera {
    /// Camera at `origin` looking at `focus`, with +Y up.
    #[must_use]
    pub const fn new(origin: Vec3, focus: Vec3) -> Self {
        Self {
            origin,
            focus,
            up: Vec3::Y,
        }
    }

    /// Camera configured from options (initial pose and up vector).
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            origin: Vec3::from_array(options.origin),
            focus: Vec3::from_array(options.focus),
            up: Vec3::from_array(options.up),
        }
    }

    /// World-space eye position.
    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Move the eye position.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// World-space look-at target.
    #[must_use]
    pub const fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Move the look-at target.
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    /// Up direction vector.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit vector from origin toward focus (zero if they coincide).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.focus - self.origin).normalize_or_zero()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_pose() {
        let mut camera = Camera::default();
        camera.set_origin(Vec3::new(1.0, 2.0, 3.0));
        camera.set_focus(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(camera.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.focus(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn forward_is_normalized() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert!((camera.forward() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn forward_of_degenerate_pose_is_zero() {
        let camera = Camera::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(camera.forward(), Vec3::ZERO);
    }
}
