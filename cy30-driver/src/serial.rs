use crate::config::Config;
use crate::error::OpenError;
use crate::numeric::to_string;
use log::debug;
use serialport::{ClearBuffer, SerialPort};
use std::io::{self, BufRead, BufReader, Write};

/// Byte stream the driver talks to the sensor through.
///
/// Reads are bounded by a timeout. A read that gives up before the delimiter
/// arrives must fail with an error for which [`is_timeout`] is true.
pub trait Transport {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
    /// Reads up to and including `delimiter`.
    fn read_until(&mut self, delimiter: u8) -> io::Result<Vec<u8>>;
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// True if the transport gave up waiting rather than failed.
pub fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::UnexpectedEof
    )
}

/// [`Transport`] over a serial port.
pub struct SerialTransport {
    reader: BufReader<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Wraps an already opened port. The port's own timeout bounds each read.
    pub fn new(port: Box<dyn SerialPort>) -> SerialTransport {
        SerialTransport {
            reader: BufReader::new(port),
        }
    }

    /// Opens `port_name` and drops whatever the sensor sent before.
    pub fn open(port_name: &str, config: &Config) -> Result<SerialTransport, OpenError> {
        let to_open_error = |source: serialport::Error| OpenError {
            port: port_name.to_string(),
            source,
        };
        let port = serialport::new(port_name, config.baud_rate)
            .timeout(config.read_timeout)
            .open()
            .map_err(to_open_error)?;
        port.clear(ClearBuffer::All).map_err(to_open_error)?;
        Ok(SerialTransport::new(port))
    }
}

impl Transport for SerialTransport {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let port = self.reader.get_mut();
        port.write_all(frame)?;
        port.flush()
    }

    fn read_until(&mut self, delimiter: u8) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        if let Err(e) = self.reader.read_until(delimiter, &mut buf) {
            if !buf.is_empty() {
                debug!("Discarding partial frame {:?}", to_string(&buf));
            }
            return Err(e);
        }
        if buf.last() != Some(&delimiter) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "Stream ended before {:?}. Read = {:?}",
                    delimiter as char,
                    to_string(&buf)
                ),
            ));
        }
        Ok(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.reader.get_mut().flush()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serialport::TTYPort;
    use std::io::Read;
    use std::time::Duration;

    fn slave_transport(slave: TTYPort) -> SerialTransport {
        let mut port = Box::new(slave) as Box<dyn SerialPort>;
        port.set_timeout(Duration::from_millis(50)).unwrap();
        SerialTransport::new(port)
    }

    #[test]
    fn test_write_frame() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut transport = slave_transport(slave);
        transport.write_frame(b"$00022123&").unwrap();

        std::thread::sleep(Duration::from_millis(10));

        let mut buf = [0u8; 10];
        master.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"$00022123&");
    }

    #[test]
    fn test_read_until_keeps_following_frame() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut transport = slave_transport(slave);
        master.write_all(b"$00023335&$0006210000279081&").unwrap();

        assert_eq!(transport.read_until(b'&').unwrap(), b"$00023335&");
        assert_eq!(transport.read_until(b'&').unwrap(), b"$0006210000279081&");
    }

    #[test]
    fn test_read_until_times_out() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut transport = slave_transport(slave);
        master.write_all(b"$00023335&$00062").unwrap();

        assert_eq!(transport.read_until(b'&').unwrap(), b"$00023335&");
        let err = transport.read_until(b'&').unwrap_err();
        assert!(is_timeout(&err));
    }

    #[test]
    fn test_is_timeout() {
        assert!(is_timeout(&io::Error::from(io::ErrorKind::TimedOut)));
        assert!(is_timeout(&io::Error::from(io::ErrorKind::UnexpectedEof)));
        assert!(!is_timeout(&io::Error::from(io::ErrorKind::BrokenPipe)));
    }

    #[test]
    fn test_open_missing_port() {
        let result = SerialTransport::open("/dev/cy30-does-not-exist", &Config::default());
        assert!(matches!(
            result,
            Err(OpenError { ref port, .. }) if port == "/dev/cy30-does-not-exist"
        ));
    }
}
