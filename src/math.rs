//! Math utility functions.

use std::{fmt, str::FromStr};

use num_traits::{Euclid, Float};

/// Round `value` to the given number of decimal places, resolving ties to the
/// even neighbour.
///
/// Rounding is decided on the exact binary value: `0.995` is stored as
/// `0.99499999...` and rounds down to `0.99`. Scaling by a power of ten first
/// would round the product up to an exact tie.
pub fn round_to<T: Float + fmt::Display + FromStr>(value: T, places: usize) -> T {
    // Float formatting expands the exact value and breaks true ties to even.
    let rounded = format!("{value:.places$}").parse().unwrap_or(value);
    // Adding zero turns a rounded `-0.0` into `0.0`.
    rounded + T::zero()
}

/// Map a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float + Euclid>(hue: T) -> T {
    let full_turn = T::from(360.0).unwrap_or_else(T::one);
    let hue = hue.rem_euclid(&full_turn);
    // rem_euclid may round up to exactly 360 for tiny negative inputs.
    if hue >= full_turn {
        T::zero()
    } else {
        hue
    }
}
