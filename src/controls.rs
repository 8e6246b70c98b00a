use core::f32::consts::FRAC_PI_2;
use core::time::Duration;

use log::{debug, trace};
use nalgebra::{UnitQuaternion, Vector3};

use crate::euler::EulerYxz;
use crate::traits::OrientationSource;
use crate::transform::Transform;

/// Weight of the newest reading in the smoothed orientation.
pub const SMOOTHING_FACTOR: f32 = 0.5;

/// `movement_speed / FORWARD_SPEED_DIVISOR` world units are travelled per tick.
pub const FORWARD_SPEED_DIVISOR: f32 = 50.0;

const SLERP_EPSILON: f32 = 1.0e-6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlsParams {
    pub movement_speed: f32,
    /// Not used by the orientation math.
    pub roll_speed: f32,
    /// Calibrate the heading on the first reading with a nonzero alpha.
    pub auto_align: bool,
    /// Move the object along its facing direction every tick.
    pub auto_forward: bool,
}

impl Default for ControlsParams {
    fn default() -> Self {
        Self {
            movement_speed: 1.0,
            roll_speed: 0.005,
            auto_align: true,
            auto_forward: false,
        }
    }
}

/// Angles sampled on the last active tick, in radians.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SampledAngles {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
    /// Screen rotation.
    pub orient: f32,
}

/// Drives a [`Transform`] from device orientation readings.
///
/// Starts frozen; call [`connect`](Self::connect) and then
/// [`update`](Self::update) once per frame.
#[derive(Debug)]
pub struct DeviceOrientationControls<S> {
    source: S,
    object: Transform,
    params: ControlsParams,
    frozen: bool,
    angles: SampledAngles,
    align_quaternion: UnitQuaternion<f32>,
    orientation_quaternion: UnitQuaternion<f32>,
    smoothed: UnitQuaternion<f32>,
}

impl<S: OrientationSource> DeviceOrientationControls<S> {
    pub fn new(source: S, object: Transform) -> Self {
        DeviceOrientationControls::with_params(source, object, ControlsParams::default())
    }

    pub fn with_params(source: S, object: Transform, params: ControlsParams) -> Self {
        DeviceOrientationControls {
            source,
            object,
            params,
            frozen: true,
            angles: SampledAngles::default(),
            align_quaternion: UnitQuaternion::identity(),
            orientation_quaternion: UnitQuaternion::identity(),
            smoothed: UnitQuaternion::identity(),
        }
    }

    pub fn connect(&mut self) {
        self.frozen = false;
        debug!("device orientation controls connected");
    }

    pub fn disconnect(&mut self) {
        self.frozen = true;
        debug!("device orientation controls disconnected");
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Applies the latest reading to the object and returns its new transform.
    ///
    /// Does nothing while frozen. `_delta` is accepted for render-loop
    /// symmetry; movement is per tick, not per second.
    pub fn update(&mut self, _delta: Duration) -> Transform {
        if self.frozen {
            return self.object;
        }

        let (alpha, beta, gamma) = self.source.device_orientation().resolved();
        let orient = self.source.screen_orientation();
        self.angles = SampledAngles {
            alpha: alpha.to_radians(),
            beta: beta.to_radians(),
            gamma: gamma.to_radians(),
            orient: if orient.is_finite() {
                orient.to_radians()
            } else {
                0.0
            },
        };

        let euler = EulerYxz::new(self.angles.beta, self.angles.alpha, -self.angles.gamma);
        let raw = euler.to_rotation();
        self.smoothed = self
            .smoothed
            .try_slerp(&raw, SMOOTHING_FACTOR, SLERP_EPSILON)
            .unwrap_or_else(|| self.smoothed.nlerp(&raw, SMOOTHING_FACTOR));

        // smoothing lags the sensor and would skew the heading calibration
        let device = if self.params.auto_align {
            raw
        } else {
            self.smoothed
        };

        // camera looks out of the back of the device, not the top
        let device_to_camera = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2);
        let screen = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -self.angles.orient);
        self.orientation_quaternion = device * device_to_camera * screen;

        self.object.rotation = self.align_quaternion * self.orientation_quaternion;

        if self.params.auto_forward {
            let speed = self.params.movement_speed / FORWARD_SPEED_DIVISOR;
            self.object.position += self.object.forward() * speed;
        }

        trace!(
            "alpha={} beta={} gamma={} orient={} rotation={:?}",
            self.angles.alpha,
            self.angles.beta,
            self.angles.gamma,
            self.angles.orient,
            self.object.rotation
        );

        if self.params.auto_align && self.angles.alpha != 0.0 {
            self.params.auto_align = false;
            self.align();
        }

        self.object
    }

    /// Calibrates the heading so the current facing becomes the reference.
    ///
    /// Only the yaw of the look rotation is kept, so sensed pitch and roll
    /// still reach the object.
    pub fn align(&mut self) {
        let direction = self.orientation_quaternion.inverse() * -Vector3::z();
        let yaw = facing_yaw(&direction);
        self.align_quaternion = EulerYxz::new(0.0, yaw, 0.0).to_rotation();
        debug!("heading aligned, yaw={yaw}");
    }

    pub fn object(&self) -> &Transform {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Transform {
        &mut self.object
    }

    pub fn params(&self) -> &ControlsParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ControlsParams {
        &mut self.params
    }

    pub fn angles(&self) -> SampledAngles {
        self.angles
    }

    /// Heading correction applied in front of every orientation.
    pub fn alignment(&self) -> UnitQuaternion<f32> {
        self.align_quaternion
    }

    /// Device orientation with the camera and screen corrections, before alignment.
    pub fn orientation(&self) -> UnitQuaternion<f32> {
        self.orientation_quaternion
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_parts(self) -> (S, Transform) {
        (self.source, self.object)
    }
}

/// Below this squared length the direction counts as parallel to up.
const VERTICAL_EPSILON: f32 = 1.0e-12;

/// Yaw of a rotation looking from `direction` back towards the origin, +Y up.
///
/// Near vertical directions still yield the heading of their horizontal part
/// through the gimbal-lock branch of [`EulerYxz::from_rotation`].
fn facing_yaw(direction: &Vector3<f32>) -> f32 {
    let up = Vector3::y();
    if up.cross(direction).norm_squared() <= VERTICAL_EPSILON {
        return 0.0;
    }
    let look = UnitQuaternion::face_towards(direction, &up);
    EulerYxz::from_rotation(&look).yaw_only().y
}
