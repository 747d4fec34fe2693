//! Site longitude for the telescope mounts speaking the Meade LX200 command set.
//!
//! Internally the longitude is a signed number of arc seconds
//! in the range `(-180°, +180°]` with the east positive.
//! The protocol has its own (and not even a single) convention,
//! see [`Longitude::parse_meade`] and [`Longitude::to_meade`].

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// minutes and seconds are always the remainders of the division by 60
#![allow(clippy::cast_possible_truncation)]

pub use angle::{
    consts::{FULL_TURN_SECONDS, HALF_TURN_SECONDS, SECONDS_IN_DEGREE},
    dms::{Dms, DmsAngle},
    AngleNames, AngleNotInRange, ParseAngleError,
};
pub use coord::{Longitude, ParseCoordinateError, RotationalDirection};

mod angle;
mod coord;
mod utils;
