use std::{error::Error, fmt};

use crate::angle::ParseAngleError;

pub use self::lon::{Longitude, RotationalDirection};

mod lon;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The coordinate cannot be read from the protocol string
pub enum ParseCoordinateError {
    /// The underlying angle is malformed
    Angle(ParseAngleError),
    /// Nothing to parse
    EmptyString,
}

impl From<ParseAngleError> for ParseCoordinateError {
    fn from(err: ParseAngleError) -> Self {
        Self::Angle(err)
    }
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::Angle(inner) => write!(f, "{inner}"),
            Self::EmptyString => write!(f, "empty string provided"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Angle(inner) => Some(inner),
            Self::EmptyString => None,
        }
    }
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
/// and displayed as a single character
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; display as $true_ch:literal:$false_ch:literal) => {
        use self::$name::{$falsy, $truthy};

        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(missing_docs)]
        pub enum $name {
            $truthy,
            $falsy,
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{symbol}")
            }
        }
    };
}
