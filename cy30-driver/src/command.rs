use crate::constants::{
    CMD_CLOSE_CONTINUOUS_MEASUREMENT, CMD_LIGHTS, CMD_OPEN_CONTINUOUS_MEASUREMENT,
    CMD_START_SINGLE_MEASUREMENT, CMD_STOP_CONTINUOUS_MEASUREMENT, CMD_TURN_OFF_LASER,
};

/// Commands understood by the sensor.
///
/// `StartSingleMeasurement`, `CloseContinuousMeasurement` and `TurnOffLaser`
/// share one literal frame in the sensor documentation. They are kept as
/// documented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StartSingleMeasurement,
    OpenContinuousMeasurement,
    StopContinuousMeasurement,
    CloseContinuousMeasurement,
    Lights,
    TurnOffLaser,
}

impl Command {
    /// Wire frame for this command.
    pub fn frame(self) -> &'static [u8] {
        match self {
            Command::StartSingleMeasurement => CMD_START_SINGLE_MEASUREMENT,
            Command::OpenContinuousMeasurement => CMD_OPEN_CONTINUOUS_MEASUREMENT,
            Command::StopContinuousMeasurement => CMD_STOP_CONTINUOUS_MEASUREMENT,
            Command::CloseContinuousMeasurement => CMD_CLOSE_CONTINUOUS_MEASUREMENT,
            Command::Lights => CMD_LIGHTS,
            Command::TurnOffLaser => CMD_TURN_OFF_LASER,
        }
    }
}
