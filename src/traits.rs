use crate::sensor::DeviceOrientation;

/// Where the controls read sensor state from on each tick.
pub trait OrientationSource {
    /// Most recent device orientation reading.
    fn device_orientation(&self) -> DeviceOrientation;
    /// Current screen rotation in degrees.
    fn screen_orientation(&self) -> f32;
}

impl<T: OrientationSource + ?Sized> OrientationSource for &T {
    fn device_orientation(&self) -> DeviceOrientation {
        (**self).device_orientation()
    }

    fn screen_orientation(&self) -> f32 {
        (**self).screen_orientation()
    }
}
