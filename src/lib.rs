#![no_std]
#![allow(clippy::needless_doctest_main)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod controls;
mod error;
mod euler;
mod screen;
mod sensor;
mod traits;
mod transform;

pub use controls::{
    ControlsParams, DeviceOrientationControls, SampledAngles, FORWARD_SPEED_DIVISOR,
    SMOOTHING_FACTOR,
};
pub use error::ParseScreenOrientationError;
pub use euler::EulerYxz;
pub use screen::{screen_orientation_angle, ScreenOrientationType};
pub use sensor::{DeviceOrientation, SensorBridge};
pub use traits::OrientationSource;
pub use transform::Transform;
