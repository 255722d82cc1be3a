#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error condition reported by the sensor in place of a distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// The target is nearer than the minimum range
    DistanceTooShort,
    /// No return echo was received
    NoEcho,
    /// The returned signal is too strong
    ReflectionTooStrong,
    /// The signal is swamped by ambient light
    AmbientLightTooStrong,
    /// The frame does not carry a known error code
    Unrecognized,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DistanceTooShort => write!(f, "distance too short"),
            ErrorCode::NoEcho => write!(f, "no echo"),
            ErrorCode::ReflectionTooStrong => write!(f, "reflection too strong"),
            ErrorCode::AmbientLightTooStrong => write!(f, "ambient light too strong"),
            ErrorCode::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
