use core::str::FromStr;

use crate::error::ParseScreenOrientationError;

/// W3C screen orientation types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScreenOrientationType {
    PortraitPrimary,
    PortraitSecondary,
    LandscapePrimary,
    LandscapeSecondary,
}

impl ScreenOrientationType {
    /// Screen rotation in degrees relative to the natural orientation.
    pub const fn angle(self) -> f32 {
        match self {
            ScreenOrientationType::PortraitPrimary => 0.0,
            ScreenOrientationType::PortraitSecondary => 180.0,
            ScreenOrientationType::LandscapePrimary => 90.0,
            ScreenOrientationType::LandscapeSecondary => -90.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ScreenOrientationType::PortraitPrimary => "portrait-primary",
            ScreenOrientationType::PortraitSecondary => "portrait-secondary",
            ScreenOrientationType::LandscapePrimary => "landscape-primary",
            ScreenOrientationType::LandscapeSecondary => "landscape-secondary",
        }
    }
}

impl FromStr for ScreenOrientationType {
    type Err = ParseScreenOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ParseScreenOrientationError::Empty),
            "portrait-primary" => Ok(ScreenOrientationType::PortraitPrimary),
            "portrait-secondary" => Ok(ScreenOrientationType::PortraitSecondary),
            "landscape-primary" => Ok(ScreenOrientationType::LandscapePrimary),
            "landscape-secondary" => Ok(ScreenOrientationType::LandscapeSecondary),
            _ => Err(ParseScreenOrientationError::Unknown),
        }
    }
}

/// Resolves the current screen angle in degrees.
///
/// A known orientation type wins. Otherwise the platform's legacy angle is
/// used as reported, and a missing or non-finite one reads as 0.
pub fn screen_orientation_angle(
    kind: Option<ScreenOrientationType>,
    legacy_angle: Option<f32>,
) -> f32 {
    match kind {
        Some(kind) => kind.angle(),
        None => legacy_angle
            .filter(|angle| angle.is_finite())
            .unwrap_or(0.0),
    }
}
