//! The angle stored as a signed number of whole arc seconds.
//!
//! No range is imposed on the value: the coordinates built on top of it
//! decide which part of the circle is canonical for them.

use std::{
    borrow::Cow,
    convert::TryFrom,
    fmt,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use num_traits::{CheckedAdd, CheckedSub};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{div_mod, StripChar};

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, FULL_TURN_DEG, HALF_TURN_DEG,
        MEADE_TERMINATOR, MINUTES_IN_DEGREE, QUARTER_TURN_DEG, SECONDS_IN_DEGREE,
        SECONDS_IN_MINUTE,
    },
    errors::{AngleNotInRange, ParseAngleError},
    meade::{format_template, parse_meade_parts},
    AngleNames,
};

/// Signed angle with the precision of one arc second.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsAngle {
    total_seconds: i64,
}

/// Degrees, minutes and seconds of an angle's absolute value.
///
/// The sign belongs to the degrees field only, as in the usual
/// astronomical notation `-00°30′00″`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dms {
    /// The angle is less than zero
    pub negative: bool,
    /// Whole degrees
    pub degrees: u64,
    /// Arc minutes `[0..60)`
    pub minutes: u8,
    /// Arc seconds `[0..60)`
    pub seconds: u8,
}

impl Dms {
    /// Render the parts with the template made of placeholders:
    /// - `{+}` the sign, always present;
    /// - `{-}` the sign, only for the negative values;
    /// - `{d}` degrees, at least 2 digits;
    /// - `{D}` degrees, at least 3 digits;
    /// - `{m}` minutes, 2 digits;
    /// - `{s}` seconds, 2 digits.
    ///
    /// Everything else is copied as is.
    ///
    /// ```
    /// # use meade_geo::DmsAngle;
    /// let a = DmsAngle::with_dms(-7, 5, 9).unwrap();
    /// assert_eq!(a.dms().format("{+}{D}*{m}:{s}"), "-007*05:09");
    /// ```
    pub fn format(&self, template: &str) -> String {
        format_template(template, self)
    }
}

impl DmsAngle {
    /// Construct the angle directly from its arc seconds.
    pub const fn with_total_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    /// Degree, minute, second.
    /// The sign of the angle is the sign of the `degree`.
    ///
    /// # Errors
    /// When the minutes or the seconds are not less than 60, the `AngleNotInRange` returned.
    pub fn with_dms(degree: i32, minutes: u8, seconds: u8) -> Result<Self, AngleNotInRange> {
        Self::with_signed_dms(degree < 0, degree.unsigned_abs(), minutes, seconds)
    }

    /// Degree, minute, second with the explicit sign,
    /// so the angles less than one degree can be negative too.
    ///
    /// # Errors
    /// When the minutes or the seconds are not less than 60, the `AngleNotInRange` returned.
    pub fn with_signed_dms(
        negative: bool,
        degree: u32,
        minutes: u8,
        seconds: u8,
    ) -> Result<Self, AngleNotInRange> {
        if minutes >= MINUTES_IN_DEGREE {
            return Err(AngleNotInRange::ArcMinutes);
        }

        if seconds >= SECONDS_IN_MINUTE {
            return Err(AngleNotInRange::ArcSeconds);
        }

        let total_minutes = i64::from(degree) * i64::from(MINUTES_IN_DEGREE) + i64::from(minutes);
        let total_seconds = total_minutes * i64::from(SECONDS_IN_MINUTE) + i64::from(seconds);

        let total_seconds = if negative {
            -total_seconds
        } else {
            total_seconds
        };
        Ok(Self { total_seconds })
    }

    /// Use with caution: the value is rounded to the nearest arc second.
    ///
    /// # Errors
    /// The value is not finite or too big to be stored as arc seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_degrees(value: f64) -> Result<Self, AngleNotInRange> {
        if !value.is_finite() {
            return Err(AngleNotInRange::Degrees);
        }

        let seconds = (value * SECONDS_IN_DEGREE as f64).round();
        if seconds.abs() >= i64::MAX as f64 {
            return Err(AngleNotInRange::Degrees);
        }

        Ok(Self {
            total_seconds: seconds as i64,
        })
    }

    /// The whole value of the angle in arc seconds
    pub const fn total_seconds(self) -> i64 {
        self.total_seconds
    }

    /// The angle in (fractional) degrees
    #[allow(clippy::cast_precision_loss)]
    pub fn degrees(self) -> f64 {
        self.total_seconds as f64 / SECONDS_IN_DEGREE as f64
    }

    /// The same angle without the sign
    pub const fn abs(self) -> Self {
        Self {
            total_seconds: self.total_seconds.saturating_abs(),
        }
    }

    /// Is the angle less than zero
    pub const fn is_negative(self) -> bool {
        self.total_seconds < 0
    }

    /// Split the absolute value into degrees, minutes and seconds
    pub fn dms(self) -> Dms {
        let total = self.total_seconds.unsigned_abs();

        let (total_minutes, seconds) = div_mod(total, u64::from(SECONDS_IN_MINUTE));
        let (degrees, minutes) = div_mod(total_minutes, u64::from(MINUTES_IN_DEGREE));

        Dms {
            negative: self.is_negative(),
            degrees,
            // both are remainders of the division by 60
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    /// Render the angle with the template (see [`Dms::format`]).
    pub fn format_dms(self, template: &str) -> String {
        self.dms().format(template)
    }

    /// Parse the angle as it is sent by the Meade protocol:
    /// `sDDD*MM:SS`, `sDD*MM`, `HH:MM:SS`, `DDD*MM` and so on.
    /// The trailing command terminator `#` is allowed.
    ///
    /// ```
    /// # use meade_geo::DmsAngle;
    /// let a = DmsAngle::parse_meade("-045*30:15#").unwrap();
    /// assert_eq!(a.total_seconds(), -(45 * 3600 + 30 * 60 + 15));
    /// ```
    ///
    /// # Errors
    /// The string is not a valid angle of such notation.
    pub fn parse_meade(s: &str) -> Result<Self, ParseAngleError> {
        let s = s
            .strip_suffix_char(MEADE_TERMINATOR)
            .map_or_else(|| Cow::Borrowed(s), Cow::Owned);

        let (negative, degrees, minutes, seconds) = parse_meade_parts(&s)?;
        Ok(Self::with_signed_dms(negative, degrees, minutes, seconds)?)
    }
}

impl AngleNames for DmsAngle {
    fn zero() -> Self {
        Self::default()
    }

    fn right() -> Self {
        Self::with_total_seconds(QUARTER_TURN_DEG * SECONDS_IN_DEGREE)
    }

    fn straight() -> Self {
        Self::with_total_seconds(HALF_TURN_DEG * SECONDS_IN_DEGREE)
    }

    fn complete() -> Self {
        Self::with_total_seconds(FULL_TURN_DEG * SECONDS_IN_DEGREE)
    }
}

impl CheckedAdd for DmsAngle {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.total_seconds
            .checked_add(rhs.total_seconds)
            .map(Self::with_total_seconds)
    }
}

impl CheckedSub for DmsAngle {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.total_seconds
            .checked_sub(rhs.total_seconds)
            .map(Self::with_total_seconds)
    }
}

impl Add for DmsAngle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with_total_seconds(self.total_seconds.saturating_add(rhs.total_seconds))
    }
}

impl Sub for DmsAngle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::with_total_seconds(self.total_seconds.saturating_sub(rhs.total_seconds))
    }
}

impl Neg for DmsAngle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::with_total_seconds(self.total_seconds.saturating_neg())
    }
}

impl TryFrom<f64> for DmsAngle {
    type Error = AngleNotInRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_degrees(value)
    }
}

impl From<DmsAngle> for f64 {
    fn from(angle: DmsAngle) -> Self {
        angle.degrees()
    }
}

impl FromStr for DmsAngle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_meade(s)
    }
}

impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.format_dms("{-}{d}*{m}:{s}"))
        } else {
            let Dms {
                negative,
                degrees,
                minutes,
                seconds,
            } = self.dms();
            if negative {
                write!(f, "-")?;
            }
            write!(
                f,
                "{degrees}{DEGREE_SIGN}{minutes}{ARC_MINUTE_SIGN}{seconds}{ARC_SECOND_SIGN}"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn angle_is_64_bits() {
        assert_eq!(size_of::<DmsAngle>(), 8)
    }

    #[test]
    fn default() {
        let zero = DmsAngle::default();
        assert!(zero.is_zero());
        assert_eq!(zero.total_seconds(), 0);
        assert_eq!(
            zero.dms(),
            Dms {
                negative: false,
                degrees: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn names() {
        assert_eq!(DmsAngle::right().total_seconds(), 324_000);
        assert_eq!(DmsAngle::straight().total_seconds(), 648_000);
        assert_eq!(DmsAngle::complete().total_seconds(), 1_296_000);
        assert!(DmsAngle::with_dms(90, 0, 0).unwrap().is_right());
        assert!(DmsAngle::with_dms(180, 0, 0).unwrap().is_straight());
        assert!(DmsAngle::with_dms(360, 0, 0).unwrap().is_complete());
    }

    #[test]
    fn from_dms() {
        let a = DmsAngle::with_dms(45, 30, 0).unwrap();
        assert_eq!(a.total_seconds(), 163_800);

        let a = DmsAngle::with_dms(-45, 30, 15).unwrap();
        assert_eq!(a.total_seconds(), -163_815);
    }

    #[test]
    fn negative_less_than_degree() {
        let a = DmsAngle::with_signed_dms(true, 0, 30, 0).unwrap();
        assert_eq!(a.total_seconds(), -1800);
        assert!(a.dms().negative);
        assert_eq!(a.dms().degrees, 0);
    }

    #[test]
    fn bigger_than_complete_is_valid() {
        let a = DmsAngle::with_dms(1000, 0, 1).unwrap();
        assert_eq!(a.total_seconds(), 3_600_001);
        assert_eq!(a.dms().degrees, 1000);
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn bad_minutes() {
        let _a = DmsAngle::with_dms(30, 60, 0).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn bad_seconds() {
        let _a = DmsAngle::with_dms(30, 59, 60).unwrap();
    }

    #[test]
    fn from_f64() {
        let a = DmsAngle::from_degrees(45.5).unwrap();
        assert_eq!(a.total_seconds(), 163_800);

        let a = DmsAngle::try_from(-84.120_456).unwrap();
        // 84°07′13.64″ rounds to the nearest second
        assert_eq!(a.total_seconds(), -(84 * 3600 + 7 * 60 + 14));
    }

    #[test]
    fn to_f64() {
        let a = DmsAngle::with_dms(-12, 15, 0).unwrap();
        let as_float: f64 = a.into();
        assert!((as_float + 12.25).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn from_nan() {
        let _a = DmsAngle::from_degrees(f64::NAN).unwrap();
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn from_huge_float() {
        let _a = DmsAngle::from_degrees(1e300).unwrap();
    }

    #[test]
    fn decompose() {
        let a = DmsAngle::with_total_seconds(-(134 * 3600 + 30 * 60 + 59));
        assert_eq!(
            a.dms(),
            Dms {
                negative: true,
                degrees: 134,
                minutes: 30,
                seconds: 59
            }
        );
    }

    #[test]
    fn decompose_min_value() {
        let a = DmsAngle::with_total_seconds(i64::MIN);
        let dms = a.dms();
        assert!(dms.negative);
        assert_eq!(dms.degrees, i64::MIN.unsigned_abs() / 3600);
    }

    #[test]
    fn arithmetic() {
        let a = DmsAngle::with_dms(100, 0, 0).unwrap();
        let b = DmsAngle::with_dms(30, 30, 0).unwrap();

        assert_eq!((a + b).total_seconds(), 469_800);
        assert_eq!((a - b).total_seconds(), 250_200);
        assert_eq!((-a).total_seconds(), -360_000);
        assert_eq!(b.checked_sub(&a).unwrap().total_seconds(), -250_200);
        assert!(DmsAngle::with_total_seconds(i64::MAX)
            .checked_add(&b)
            .is_none());
    }

    #[test]
    fn abs() {
        let a = DmsAngle::with_total_seconds(-15);
        assert_eq!(a.abs().total_seconds(), 15);
        assert!(!a.abs().is_negative());
    }

    #[test]
    fn display_unicode() {
        let a = DmsAngle::with_dms(-45, 3, 7).unwrap();
        assert_eq!(a.to_string(), "-45°3′7″");
    }

    #[test]
    fn display_ascii() {
        let a = DmsAngle::with_dms(-45, 3, 7).unwrap();
        assert_eq!(format!("{a:#}"), "-45*03:07");

        let a = DmsAngle::with_dms(5, 0, 0).unwrap();
        assert_eq!(format!("{a:#}"), "05*00:00");
    }

    #[test]
    fn parse_terminated() {
        let a: DmsAngle = "+045*30#".parse().unwrap();
        assert_eq!(a.total_seconds(), 163_800);
    }

    #[test]
    fn parse_display_ascii() {
        let a = DmsAngle::with_dms(-123, 4, 56).unwrap();
        let parsed: DmsAngle = format!("{a:#}").parse().unwrap();
        assert_eq!(parsed, a);
    }
}
