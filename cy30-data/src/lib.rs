pub mod distance;
pub mod error_code;

pub use distance::{Distance, METERS_PER_UNIT};
pub use error_code::ErrorCode;
