use core::cell::Cell;

use log::debug;

use crate::screen::{screen_orientation_angle, ScreenOrientationType};
use crate::traits::OrientationSource;

/// One `deviceorientation` reading, angles in degrees.
///
/// Any angle may be missing: platforms report nothing until the first event
/// and some report only part of the triple.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DeviceOrientation {
    /// Compass heading around Z.
    pub alpha: Option<f32>,
    /// Front-back tilt around X'.
    pub beta: Option<f32>,
    /// Left-right tilt around Y''.
    pub gamma: Option<f32>,
}

impl DeviceOrientation {
    pub const fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Angles to feed the rotation, in degrees.
    ///
    /// Without gamma the reading counts as empty and every angle is zero.
    /// Otherwise each missing or non-finite angle is zero on its own.
    pub fn resolved(&self) -> (f32, f32, f32) {
        if finite(self.gamma).is_none() {
            return (0.0, 0.0, 0.0);
        }
        (
            finite(self.alpha).unwrap_or(0.0),
            finite(self.beta).unwrap_or(0.0),
            finite(self.gamma).unwrap_or(0.0),
        )
    }
}

fn finite(angle: Option<f32>) -> Option<f32> {
    angle.filter(|angle| angle.is_finite())
}

/// Latest-value cells fed by the platform's orientation events.
///
/// The host registers `on_device_orientation` and
/// `on_screen_orientation_change` as its event handlers and calls
/// [`attach`](Self::attach) / [`detach`](Self::detach) alongside the
/// subscription. Readers see the most recent value; nothing is queued.
#[derive(Debug, Default)]
pub struct SensorBridge {
    attached: Cell<bool>,
    device: Cell<DeviceOrientation>,
    screen: Cell<f32>,
}

impl SensorBridge {
    pub const fn new() -> Self {
        Self {
            attached: Cell::new(false),
            device: Cell::new(DeviceOrientation {
                alpha: None,
                beta: None,
                gamma: None,
            }),
            screen: Cell::new(0.0),
        }
    }

    pub fn attach(&self) {
        if !self.attached.replace(true) {
            debug!("sensor bridge attached");
        }
    }

    /// Stops accepting events. The last values stay readable.
    pub fn detach(&self) {
        if self.attached.replace(false) {
            debug!("sensor bridge detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn on_device_orientation(&self, reading: DeviceOrientation) {
        if self.attached.get() {
            self.device.set(reading);
        }
    }

    pub fn on_screen_orientation_change(
        &self,
        kind: Option<ScreenOrientationType>,
        legacy_angle: Option<f32>,
    ) {
        if self.attached.get() {
            self.screen.set(screen_orientation_angle(kind, legacy_angle));
        }
    }
}

impl OrientationSource for SensorBridge {
    fn device_orientation(&self) -> DeviceOrientation {
        self.device.get()
    }

    fn screen_orientation(&self) -> f32 {
        self.screen.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_gamma_zeroes_everything() {
        let reading = DeviceOrientation {
            alpha: Some(30.0),
            beta: Some(20.0),
            gamma: None,
        };
        assert_eq!(reading.resolved(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn missing_beta_is_zero_on_its_own() {
        let reading = DeviceOrientation {
            alpha: Some(30.0),
            beta: None,
            gamma: Some(-5.0),
        };
        assert_eq!(reading.resolved(), (30.0, 0.0, -5.0));
    }

    #[test]
    fn non_finite_angles_are_missing() {
        let reading = DeviceOrientation::new(f32::NAN, 10.0, 2.0);
        assert_eq!(reading.resolved(), (0.0, 10.0, 2.0));
        let no_gamma = DeviceOrientation::new(1.0, 2.0, f32::INFINITY);
        assert_eq!(no_gamma.resolved(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn detached_bridge_ignores_events() {
        let bridge = SensorBridge::new();
        bridge.on_device_orientation(DeviceOrientation::new(1.0, 2.0, 3.0));
        bridge.on_screen_orientation_change(Some(ScreenOrientationType::LandscapePrimary), None);
        assert_eq!(bridge.device_orientation(), DeviceOrientation::default());
        assert_eq!(bridge.screen_orientation(), 0.0);
    }

    #[test]
    fn last_writer_wins_and_detach_keeps_values() {
        let bridge = SensorBridge::new();
        bridge.attach();
        assert!(bridge.is_attached());

        bridge.on_device_orientation(DeviceOrientation::new(1.0, 2.0, 3.0));
        bridge.on_device_orientation(DeviceOrientation::new(4.0, 5.0, 6.0));
        bridge.on_screen_orientation_change(None, Some(-90.0));
        bridge.on_screen_orientation_change(Some(ScreenOrientationType::PortraitSecondary), None);

        bridge.detach();
        bridge.on_device_orientation(DeviceOrientation::new(7.0, 8.0, 9.0));

        assert!(!bridge.is_attached());
        let latest = DeviceOrientation::new(4.0, 5.0, 6.0);
        assert_eq!(bridge.device_orientation(), latest);
        assert_eq!(bridge.screen_orientation(), 180.0);
    }
}
