#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Meters represented by one unit of the wire value (0.1 mm).
pub const METERS_PER_UNIT: f64 = 1e-4;

/// One distance reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    /// Fixed-point value as sent by the sensor, in units of 0.1 mm.
    pub raw: i64,
}

impl Distance {
    pub fn from_raw(raw: i64) -> Distance {
        Distance { raw }
    }

    /// Distance in meters.
    pub fn meters(&self) -> f64 {
        (self.raw as f64) * METERS_PER_UNIT
    }

    /// Distance in millimeters.
    pub fn millimeters(&self) -> f64 {
        self.meters() * 1000.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters() {
        assert!(f64::abs(Distance::from_raw(27908).meters() - 2.7908) < 1e-12);
        assert!(f64::abs(Distance::from_raw(-15).meters() + 0.0015) < 1e-12);
        assert_eq!(Distance::from_raw(0).meters(), 0.);
    }

    #[test]
    fn test_millimeters() {
        assert!(f64::abs(Distance::from_raw(12345).millimeters() - 1234.5) < 1e-9);
    }
}
