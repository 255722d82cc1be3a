pub(crate) const FRAME_START: u8 = b'$';
pub(crate) const FRAME_END: u8 = b'&';
// Shortest frame that still holds a value field: '$' + 7 digits + check digit + '&'
pub(crate) const MIN_DATA_FRAME_SIZE: usize = 10;
pub(crate) const VALUE_DIGITS: usize = 7;
// The value field stops one digit short of the terminator
pub(crate) const VALUE_END_OFFSET: usize = 2;

pub(crate) const CMD_START_SINGLE_MEASUREMENT: &[u8] = b"$00022123&";
pub(crate) const CMD_OPEN_CONTINUOUS_MEASUREMENT: &[u8] = b"$00022426&";
pub(crate) const CMD_STOP_CONTINUOUS_MEASUREMENT: &[u8] = b"$0003260029&";
pub(crate) const CMD_CLOSE_CONTINUOUS_MEASUREMENT: &[u8] = b"$00022123&";
pub(crate) const CMD_LIGHTS: &[u8] = b"$0003260130&";
pub(crate) const CMD_TURN_OFF_LASER: &[u8] = b"$00022123&";
pub(crate) const ANS_INSTRUCTION_CONFIRMATION: &[u8] = b"$00023335&";

pub(crate) const ERR_SUFFIX_DISTANCE_TOO_SHORT: &[u8] = b"0001542&";
pub(crate) const ERR_SUFFIX_NO_ECHO: &[u8] = b"0001643&";
pub(crate) const ERR_SUFFIX_REFLECTION_TOO_STRONG: &[u8] = b"0001744&";
pub(crate) const ERR_SUFFIX_AMBIENT_LIGHT_TOO_STRONG: &[u8] = b"0001845&";

pub(crate) const DEFAULT_BAUD_RATE: u32 = 115200;
pub(crate) const DEFAULT_READ_TIMEOUT_MS: u64 = 3000;
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 3;
