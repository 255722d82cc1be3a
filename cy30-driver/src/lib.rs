use std::sync::mpsc;

mod command;
mod config;
mod constants;
mod error;
mod error_code;
mod frame;
mod numeric;
mod serial;

use crate::constants::FRAME_END;
use crate::frame::{decode_distance, is_confirmation};
use crate::numeric::to_string;
use log::{debug, error, warn};

pub use crate::command::Command;
pub use crate::config::Config;
pub use crate::error::{Cy30Error, OpenError};
pub use crate::serial::{is_timeout, SerialTransport, Transport};
pub use cy30_data::{Distance, ErrorCode};

/// Driver for a CY30 laser rangefinder.
///
/// One exchange runs at a time. Every call takes `&mut self`, so sharing a
/// `RangeFinder` between threads needs a `Mutex` around it.
pub struct RangeFinder<T: Transport = SerialTransport> {
    transport: T,
    config: Config,
}

impl RangeFinder<SerialTransport> {
    /// Opens the sensor on `port_name` (such as `/dev/ttyUSB0`) with default settings.
    pub fn open(port_name: &str) -> Result<Self, OpenError> {
        Self::open_with_config(port_name, Config::default())
    }

    /// Opens the sensor on `port_name`.
    /// # Arguments
    ///
    /// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
    /// * `config` - Baud rate, read timeout and retry bound.
    pub fn open_with_config(port_name: &str, config: Config) -> Result<Self, OpenError> {
        let transport = SerialTransport::open(port_name, &config)?;
        debug!("Opened \"{}\" at {} baud", port_name, config.baud_rate);
        Ok(RangeFinder::with_transport(transport, config))
    }
}

impl<T: Transport> RangeFinder<T> {
    pub fn with_transport(transport: T, config: Config) -> Self {
        RangeFinder { transport, config }
    }

    /// Takes one distance reading.
    ///
    /// Sends the start command, expects the instruction confirmation and then
    /// the data frame. If the data frame times out the whole exchange is sent
    /// again, at most `max_retries` times. Any other failure ends the call.
    pub fn single_distance(&mut self) -> Result<Distance, Cy30Error> {
        let mut retry = 0;
        loop {
            self.send_command(Command::StartSingleMeasurement)?;

            let first = self.read_frame()?;
            if !is_confirmation(&first) {
                error!("Expected instruction confirmation, got {:?}", to_string(&first));
                return Err(Cy30Error::NoConfirm(to_string(&first)));
            }

            let second = match self.transport.read_until(FRAME_END) {
                Ok(frame) => frame,
                Err(e) if is_timeout(&e) && retry < self.config.max_retries => {
                    retry += 1;
                    warn!(
                        "Data frame timed out ({}), retry {}/{}",
                        e, retry, self.config.max_retries
                    );
                    continue;
                }
                Err(e) => return Err(Cy30Error::Transport(e)),
            };
            debug!("Read {:?}", to_string(&second));

            return decode_distance(&second);
        }
    }

    /// Continuous measurement mode. Not implemented yet: always fails without
    /// touching the sensor.
    pub fn continuous_distance(&mut self) -> Result<mpsc::Receiver<Distance>, Cy30Error> {
        Err(Cy30Error::NotImplemented("continuous measurement"))
    }

    /// Leaves continuous measurement mode. Not implemented yet.
    pub fn stop_continuous(&mut self) -> Result<(), Cy30Error> {
        Err(Cy30Error::NotImplemented("continuous measurement"))
    }

    /// Flushes pending output and releases the transport.
    pub fn close(mut self) -> Result<(), Cy30Error> {
        self.transport.flush()?;
        Ok(())
    }

    fn send_command(&mut self, command: Command) -> Result<(), Cy30Error> {
        debug!("Write {:?} {:?}", command, to_string(command.frame()));
        self.transport.write_frame(command.frame())?;
        Ok(())
    }

    fn read_frame(&mut self) -> Result<Vec<u8>, Cy30Error> {
        let frame = self.transport.read_until(FRAME_END)?;
        debug!("Read {:?}", to_string(&frame));
        Ok(frame)
    }
}
