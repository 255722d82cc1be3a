use crate::constants::{
    ERR_SUFFIX_AMBIENT_LIGHT_TOO_STRONG, ERR_SUFFIX_DISTANCE_TOO_SHORT, ERR_SUFFIX_NO_ECHO,
    ERR_SUFFIX_REFLECTION_TOO_STRONG,
};
use crate::error::Cy30Error;
use cy30_data::ErrorCode;

// Error frames have the data frame's shape and differ only in the trailing code.
pub(crate) fn to_error_code(frame: &[u8]) -> ErrorCode {
    if frame.ends_with(ERR_SUFFIX_NO_ECHO) {
        ErrorCode::NoEcho
    } else if frame.ends_with(ERR_SUFFIX_DISTANCE_TOO_SHORT) {
        ErrorCode::DistanceTooShort
    } else if frame.ends_with(ERR_SUFFIX_REFLECTION_TOO_STRONG) {
        ErrorCode::ReflectionTooStrong
    } else if frame.ends_with(ERR_SUFFIX_AMBIENT_LIGHT_TOO_STRONG) {
        ErrorCode::AmbientLightTooStrong
    } else {
        ErrorCode::Unrecognized
    }
}

pub(crate) fn to_error(code: ErrorCode) -> Option<Cy30Error> {
    match code {
        ErrorCode::DistanceTooShort => Some(Cy30Error::TooClose),
        ErrorCode::NoEcho => Some(Cy30Error::NoSignal),
        ErrorCode::ReflectionTooStrong => Some(Cy30Error::ReflectionTooStrong),
        ErrorCode::AmbientLightTooStrong => Some(Cy30Error::AmbientLightTooStrong),
        ErrorCode::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_error_code() {
        assert_eq!(
            to_error_code(b"$0006210000001542&"),
            ErrorCode::DistanceTooShort
        );
        assert_eq!(to_error_code(b"$0006210000001643&"), ErrorCode::NoEcho);
        assert_eq!(
            to_error_code(b"$0006210000001744&"),
            ErrorCode::ReflectionTooStrong
        );
        assert_eq!(
            to_error_code(b"$0006210000001845&"),
            ErrorCode::AmbientLightTooStrong
        );
        assert_eq!(
            to_error_code(b"$0006210000279081&"),
            ErrorCode::Unrecognized
        );
    }

    #[test]
    fn test_to_error() {
        assert!(matches!(
            to_error(ErrorCode::DistanceTooShort),
            Some(Cy30Error::TooClose)
        ));
        assert!(matches!(to_error(ErrorCode::NoEcho), Some(Cy30Error::NoSignal)));
        assert!(to_error(ErrorCode::Unrecognized).is_none());
    }
}
