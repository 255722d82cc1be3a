use crate::constants::{
    ANS_INSTRUCTION_CONFIRMATION, FRAME_END, FRAME_START, MIN_DATA_FRAME_SIZE, VALUE_DIGITS,
    VALUE_END_OFFSET,
};
use crate::error::Cy30Error;
use crate::error_code::{to_error, to_error_code};
use crate::numeric::{parse_fixed_point, to_string};
use cy30_data::Distance;

pub(crate) fn validate_frame(frame: &[u8]) -> Result<(), Cy30Error> {
    match (frame.first(), frame.last()) {
        (Some(&FRAME_START), Some(&FRAME_END)) => Ok(()),
        _ => Err(Cy30Error::MalformedFrame(to_string(frame))),
    }
}

pub(crate) fn is_confirmation(frame: &[u8]) -> bool {
    frame == ANS_INSTRUCTION_CONFIRMATION
}

fn value_field(frame: &[u8]) -> Result<&[u8], Cy30Error> {
    if frame.len() < MIN_DATA_FRAME_SIZE {
        return Err(Cy30Error::MalformedFrame(to_string(frame)));
    }
    let end = frame.len() - VALUE_END_OFFSET;
    Ok(&frame[end - VALUE_DIGITS..end])
}

/// Decodes a data frame such as `$0006210000279081&` into a distance.
///
/// Error frames are recognised by their trailing code and returned as the
/// matching [`Cy30Error`] variant.
pub(crate) fn decode_distance(frame: &[u8]) -> Result<Distance, Cy30Error> {
    validate_frame(frame)?;
    if let Some(err) = to_error(to_error_code(frame)) {
        return Err(err);
    }
    let raw = parse_fixed_point(value_field(frame)?)?;
    Ok(Distance::from_raw(raw))
}
