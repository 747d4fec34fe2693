//! Sexagesimal constants

/// Arc seconds in a single arc minute
pub const SECONDS_IN_MINUTE: u8 = 60;
/// Arc minutes in a single degree
pub const MINUTES_IN_DEGREE: u8 = 60;
/// Arc seconds in a single degree
pub const SECONDS_IN_DEGREE: i64 = SECONDS_IN_MINUTE as i64 * MINUTES_IN_DEGREE as i64;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

/// The protocol terminates every command and reply with this character
pub(crate) const MEADE_TERMINATOR: char = '#';

pub(crate) const FULL_TURN_DEG: i64 = 360;
pub(crate) const HALF_TURN_DEG: i64 = FULL_TURN_DEG >> 1;
pub(crate) const QUARTER_TURN_DEG: i64 = HALF_TURN_DEG >> 1;

/// Arc seconds in the complete angle
pub const FULL_TURN_SECONDS: i64 = FULL_TURN_DEG * SECONDS_IN_DEGREE;
/// Arc seconds in the straight angle
pub const HALF_TURN_SECONDS: i64 = HALF_TURN_DEG * SECONDS_IN_DEGREE;
