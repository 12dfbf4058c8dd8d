use glam::{Affine3A, EulerRot, Mat3, Mat4, Quat, Vec3};

/// Local TRS plus the cached world matrix written by
/// [`Scene::update_world_matrices`](crate::scene::Scene::update_world_matrices).
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    pub(crate) world_matrix: Affine3A,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world_matrix: Affine3A::IDENTITY,
        }
    }

    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
            world_matrix: Affine3A::IDENTITY,
        }
    }

    /// Sets the rotation from XYZ Euler angles (radians).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Current rotation as XYZ Euler angles.
    #[must_use]
    pub fn rotation_euler(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    /// Orients -Z towards `target`. Both points are in the parent space.
    /// Leaves the rotation untouched when `target` is straight along `up`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        let right = forward.cross(up);
        if right.length_squared() < 1e-8 {
            return;
        }
        let right = right.normalize();
        let new_up = right.cross(forward);

        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, new_up, -forward));
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
