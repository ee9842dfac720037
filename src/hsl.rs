//! Model a color with the HSL notation.

use crate::color::Component;

colorway_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Return this color with its hue turned by the given number of degrees,
    /// wrapped into `[0, 360)`. Saturation and lightness are kept.
    pub fn rotate_hue(&self, degrees: Component) -> Self {
        Self::new(
            crate::math::normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }
}
