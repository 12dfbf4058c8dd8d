use glam::{Mat4, Vec3};

use crate::scene::transform::Transform;

/// Perspective camera. Owns its own transform; the camera rig moves it.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// `fov_degrees` is the vertical field of view.
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            transform: Transform::new(),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from(self.transform.local_matrix()).inverse()
    }

    /// Right-handed, depth range 0..1.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
