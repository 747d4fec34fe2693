//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the given character from the end
pub(crate) trait StripChar {
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
}

impl StripChar for &str {
    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(ToString::to_string)
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
