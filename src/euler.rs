use libm::{asinf, atan2f, fabsf};
use nalgebra::{UnitQuaternion, Vector3};

/// Past this the X rotation is treated as gimbal locked.
const GIMBAL_LOCK_THRESHOLD: f32 = 0.999_999_9;

/// Euler angles applied in Y, X, Z order (yaw, then pitch, then roll).
///
/// Angles are in radians. The composed rotation is `Ry(y) * Rx(x) * Rz(z)`,
/// which is the order the W3C device orientation angles map onto.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EulerYxz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerYxz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_rotation(&self) -> UnitQuaternion<f32> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.y)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.x)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.z)
    }

    /// Decomposes a rotation into YXZ angles.
    ///
    /// When the X rotation reaches +-90 degrees the Y and Z axes coincide; all
    /// of the remaining rotation is then reported as yaw and `z` is zero.
    pub fn from_rotation(rotation: &UnitQuaternion<f32>) -> Self {
        let m = rotation.to_rotation_matrix();
        let m = m.matrix();
        let m23 = m[(1, 2)].clamp(-1.0, 1.0);

        let x = asinf(-m23);
        if fabsf(m23) < GIMBAL_LOCK_THRESHOLD {
            let y = atan2f(m[(0, 2)], m[(2, 2)]);
            let z = atan2f(m[(1, 0)], m[(1, 1)]);
            Self::new(x, y, z)
        } else {
            Self::new(x, atan2f(-m[(2, 0)], m[(0, 0)]), 0.0)
        }
    }

    /// Keeps the heading only.
    pub fn yaw_only(&self) -> Self {
        Self::new(0.0, self.y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f32::consts::FRAC_PI_4;
    use libm::{cosf, sinf};

    #[test]
    fn identity_has_zero_angles() {
        let euler = EulerYxz::from_rotation(&UnitQuaternion::identity());
        assert_relative_eq!(euler.x, 0.0);
        assert_relative_eq!(euler.y, 0.0);
        assert_relative_eq!(euler.z, 0.0);
    }

    #[test]
    fn recovers_angles_away_from_gimbal_lock() {
        let euler = EulerYxz::new(0.3, -1.2, 0.7);
        let back = EulerYxz::from_rotation(&euler.to_rotation());
        assert_relative_eq!(back.x, euler.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, euler.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, euler.z, epsilon = 1e-5);
    }

    #[test]
    fn yaw_is_rotation_about_up() {
        let q = EulerYxz::new(0.0, FRAC_PI_4, 0.0).to_rotation();
        let forward = q * -Vector3::z();
        let expected = Vector3::new(-sinf(FRAC_PI_4), 0.0, -cosf(FRAC_PI_4));
        assert_relative_eq!(forward, expected, epsilon = 1e-6);
    }

    #[test]
    fn yaw_only_drops_pitch_and_roll() {
        let q = EulerYxz::new(0.5, 1.1, -0.2).to_rotation();
        let heading = EulerYxz::from_rotation(&q).yaw_only();
        assert_relative_eq!(heading.x, 0.0);
        assert_relative_eq!(heading.y, 1.1, epsilon = 1e-5);
        assert_relative_eq!(heading.z, 0.0);
    }
}
