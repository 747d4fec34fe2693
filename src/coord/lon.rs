use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

use log::{debug, trace};
use num_traits::CheckedSub;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{
        consts::{DEGREE_SIGN, FULL_TURN_SECONDS, HALF_TURN_SECONDS, SECONDS_IN_DEGREE},
        dms::{Dms, DmsAngle},
        AngleNames, AngleNotInRange, ParseAngleError,
    },
    bool_enum,
};

use super::ParseCoordinateError;

bool_enum!(RotationalDirection: East and West; display as 'E':'W');

/// The Meade reply to `:Gg#` is `sDDD*MM`
const MEADE_TEMPLATE: &str = "{+}{D}*{m}";

/// The angle measured on the equatorial plane between the meridian of the point
/// and the prime meridian (Greenwich, UK).
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
///
/// The canonical range is `(-180°, +180°]`, east is positive.
/// The constructors keep the value as is, use [`normalize`](#method.normalize)
/// to bring it into the canonical range.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Longitude(DmsAngle);

impl Longitude {
    /// Construct a longitude from degrees, minutes and seconds.
    /// The sign of the `degree` is the direction: positive to the east.
    ///
    /// # Errors
    /// The minutes or seconds are not less than 60.
    pub fn with_dms(degree: i32, minutes: u8, seconds: u8) -> Result<Self, AngleNotInRange> {
        DmsAngle::with_dms(degree, minutes, seconds).map(Self)
    }

    /// Construct a longitude from decimal degrees, positive to the east.
    ///
    /// # Errors
    /// The value cannot be represented as arc seconds.
    pub fn from_degrees(degrees: f64) -> Result<Self, AngleNotInRange> {
        DmsAngle::from_degrees(degrees).map(Self)
    }

    /// Construct a longitude from arc seconds, positive to the east.
    pub const fn with_total_seconds(total_seconds: i64) -> Self {
        Self(DmsAngle::with_total_seconds(total_seconds))
    }

    /// The chosen by convention [0-meridian](https://en.wikipedia.org/wiki/Prime_meridian)
    pub fn prime() -> Self {
        Self(DmsAngle::zero())
    }

    /// The longitude opposite to the prime
    pub fn anti_meridian() -> Self {
        Self(DmsAngle::straight())
    }

    /// The stored value in arc seconds, positive to the east
    pub const fn total_seconds(self) -> i64 {
        self.0.total_seconds()
    }

    /// The stored value in decimal degrees, positive to the east
    pub fn degrees(self) -> f64 {
        self.0.degrees()
    }

    /// Wrap the value into the range `(-180°, +180°]`
    /// by removing the whole turns.
    pub fn normalize(&mut self) {
        let total = self.total_seconds();

        let mut wrapped = total.rem_euclid(FULL_TURN_SECONDS);
        if wrapped > HALF_TURN_SECONDS {
            wrapped -= FULL_TURN_SECONDS;
        }

        if wrapped != total {
            // the difference is an exact number of turns
            let turns = (i128::from(total) - i128::from(wrapped)) / i128::from(FULL_TURN_SECONDS);
            trace!("Longitude {total}″ is out of range, wrapping {turns} turn(s) to {wrapped}″");
            self.0 = DmsAngle::with_total_seconds(wrapped);
        }
    }

    /// The copy of the longitude in the range `(-180°, +180°]`
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Angle between the longitude and the prime meridian (absolute value of the longitude).
    pub fn angle(self) -> DmsAngle {
        self.normalized().0.abs()
    }

    /// In which direction (from the prime) should we move to reach the longitude faster
    pub fn direction(self) -> Option<RotationalDirection> {
        let angle = self.angle();
        if angle.is_zero() || angle.is_straight() {
            return None;
        }

        Some(if self.normalized().0.is_negative() {
            West
        } else {
            East
        })
    }

    /// Read the longitude from the Meade command set notation.
    ///
    /// The protocol is not consistent and has two conventions:
    /// - the signed value (`+045*30:00`) is the longitude with the east negative;
    /// - the unsigned value (`045*30:00`) is the longitude from 0 to 360
    ///   which is converted as `180° - value`.
    ///
    /// The result is always normalized.
    ///
    /// ```
    /// # use meade_geo::Longitude;
    /// let west = Longitude::parse_meade("+045*30:00").unwrap();
    /// assert_eq!(west.total_seconds(), -163_800);
    ///
    /// let east = Longitude::parse_meade("045*30:00").unwrap();
    /// assert_eq!(east.total_seconds(), 484_200);
    /// ```
    ///
    /// # Errors
    /// The string is empty or is not a valid angle of the Meade notation.
    pub fn parse_meade(s: &str) -> Result<Self, ParseCoordinateError> {
        debug!("Parsing longitude from {s:?}");

        let first = s.chars().next().ok_or(ParseCoordinateError::EmptyString)?;
        let parsed = DmsAngle::parse_meade(s)?;

        let angle = if matches!(first, '+' | '-') {
            -parsed
        } else {
            DmsAngle::straight()
                .checked_sub(&parsed)
                .ok_or(ParseAngleError::Range(AngleNotInRange::Degrees))?
        };

        let lon = Self(angle).normalized();
        debug!(
            "Parsed longitude {s:?} -> {lon} = {}″",
            lon.total_seconds()
        );
        Ok(lon)
    }

    /// Render with the angle template (see [`Dms::format`](struct.Dms.html#method.format)).
    /// Only the degrees carry the sign of the longitude.
    pub fn format_dms(self, template: &str) -> String {
        self.0.format_dms(template)
    }

    /// Render the longitude as the Meade command set expects it: `sDDD*MM`.
    /// The value is normalized first, the sign is inverted (east is negative)
    /// and the seconds are dropped.
    ///
    /// ```
    /// # use meade_geo::Longitude;
    /// let lon = Longitude::with_dms(134, 30, 0).unwrap();
    /// assert_eq!(lon.to_meade(), "-134*30");
    /// ```
    pub fn to_meade(self) -> String {
        let lon = self.normalized();
        let total = lon.total_seconds();
        debug!("Formatting longitude {total}″ for Meade");

        let dms = lon.0.dms();
        debug!(
            "Longitude degrees {}, minutes {}",
            dms.degrees, dms.minutes
        );

        let dms = Dms {
            negative: total > 0,
            ..dms
        };
        debug!(
            "Inverted longitude sign, now negative={}, degrees {}, minutes {}",
            dms.negative, dms.degrees, dms.minutes
        );

        dms.format(MEADE_TEMPLATE)
    }
}

impl PartialEq for Longitude {
    fn eq(&self, other: &Self) -> bool {
        // -180 == 180, 0 == 360
        self.normalized().0 == other.normalized().0
    }
}

impl Eq for Longitude {}

impl Neg for Longitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<DmsAngle> for Longitude {
    fn from(angle: DmsAngle) -> Self {
        Self(angle)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = AngleNotInRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_degrees(value)
    }
}

impl FromStr for Longitude {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_meade(s)
    }
}

impl fmt::Display for Longitude {
    /// The value from 0 to 360 and the absolute value with the hemisphere:
    /// `270.00 (90.00° W)`.
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.normalized().total_seconds();
        let full_circle = if total < 0 {
            total + FULL_TURN_SECONDS
        } else {
            total
        };
        let direction = RotationalDirection::from(total >= 0);

        let per_degree = SECONDS_IN_DEGREE as f64;
        write!(
            f,
            "{:.2} ({:.2}{} {})",
            full_circle as f64 / per_degree,
            total.unsigned_abs() as f64 / per_degree,
            DEGREE_SIGN,
            direction
        )
    }
}
