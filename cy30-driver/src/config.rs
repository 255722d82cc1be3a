use crate::constants::{DEFAULT_BAUD_RATE, DEFAULT_MAX_RETRIES, DEFAULT_READ_TIMEOUT_MS};
use std::time::Duration;

/// Settings for talking to the sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Serial baud rate.
    pub baud_rate: u32,
    /// How long a read waits for a frame before it times out.
    pub read_timeout: Duration,
    /// How many times a measurement is re-sent after the data frame times out.
    pub max_retries: u32,
}

impl Config {
    pub fn new(baud_rate: u32, read_timeout: Duration, max_retries: u32) -> Config {
        Config {
            baud_rate,
            read_timeout,
            max_retries,
        }
    }

    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// 115200 baud, a 3 second read timeout and 3 retries.
impl Default for Config {
    fn default() -> Config {
        Config {
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.baud_rate, 115200);
        assert_eq!(config.read_timeout, Duration::from_secs(3));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_setters() {
        let config = Config::default()
            .baud_rate(9600)
            .read_timeout(Duration::from_millis(50))
            .max_retries(0);
        assert_eq!(config, Config::new(9600, Duration::from_millis(50), 0));
    }
}
