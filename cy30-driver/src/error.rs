use std::io;
use thiserror::Error;

/// Errors returned by a measurement call.
#[derive(Error, Debug)]
pub enum Cy30Error {
    #[error("Malformed frame. Observed = {0:?}.")]
    MalformedFrame(String),
    #[error("Distance too close")]
    TooClose,
    #[error("No signal from sensor")]
    NoSignal,
    #[error("Reflection too strong")]
    ReflectionTooStrong,
    #[error("Ambient light too strong")]
    AmbientLightTooStrong,
    #[error("No instruction confirmation. Observed = {0:?}.")]
    NoConfirm(String),
    #[error("Distance field is not a number: {0:?}")]
    InvalidNumeral(String),
    #[error("Transport error: {0}")]
    Transport(#[from] io::Error),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl Cy30Error {
    /// True for conditions the sensor itself reported in a data frame.
    pub fn is_sensor_error(&self) -> bool {
        matches!(
            self,
            Cy30Error::TooClose
                | Cy30Error::NoSignal
                | Cy30Error::ReflectionTooStrong
                | Cy30Error::AmbientLightTooStrong
        )
    }
}

/// Failure to acquire the serial port. Not recoverable by retrying a call.
#[derive(Error, Debug)]
#[error("Failed to open \"{port}\": {source}")]
pub struct OpenError {
    pub port: String,
    #[source]
    pub source: serialport::Error,
}
