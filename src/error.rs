/// Failure to recognise a screen orientation type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseScreenOrientationError {
    #[error("screen orientation type is empty")]
    Empty,

    #[error("unrecognized screen orientation type")]
    Unknown,
}
