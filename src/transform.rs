use nalgebra::{UnitQuaternion, Vector3};

/// Rotation and position of the object driven by the controls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub rotation: UnitQuaternion<f32>,
    pub position: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            position: Vector3::zeros(),
        }
    }
}

impl Transform {
    pub fn new(rotation: UnitQuaternion<f32>, position: Vector3<f32>) -> Self {
        Self { rotation, position }
    }

    /// Local forward axis (-Z) expressed in world space.
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * -Vector3::z()
    }
}
