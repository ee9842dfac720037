//! Model a color with the HSV notation.

use crate::color::Component;

colorway_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}
