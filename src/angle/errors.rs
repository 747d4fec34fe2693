use std::{error::Error, fmt, num::ParseIntError};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some part of an angle cannot be represented
pub enum AngleNotInRange {
    /// The whole value overflows the storage (or is not a finite number)
    Degrees,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60
    ArcSeconds,
}

impl fmt::Display for AngleNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Degrees => "The angle cannot be represented in arc seconds",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for AngleNotInRange {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure of the protocol angle parser
pub enum ParseAngleError {
    /// Minutes or seconds out of range
    Range(AngleNotInRange),
    // this variant is practically impossible due to regex digits limitations
    /// Some part is not a valid integer
    Int(ParseIntError),
    /// The string does not follow the `sDDD*MM:SS` notation
    MeadeNotation,
}

enum_trivial_from_impl!(AngleNotInRange => ParseAngleError:Range);
enum_trivial_from_impl!(ParseIntError => ParseAngleError:Int);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::MeadeNotation => write!(f, "not a Meade (sDDD*MM:SS) notation"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::MeadeNotation => None,
        }
    }
}
