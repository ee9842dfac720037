//! Conversions from the [`Rgb`] model to the other color models, and from
//! [`Hsl`] back to [`Rgb`].
//!
//! All fractional results are rounded to two decimal places with ties going to
//! the even neighbour, judged on the exact stored value. A hue is undefined for achromatic colors (no chroma)
//! and reported as `0.0`.
//!
//! ```rust
//! use colorway::{Hsl, Rgb};
//! let blue = Rgb::new(0, 0, 255);
//! assert_eq!(blue.to_hsl(), Hsl::new(240.0, 1.0, 0.5));
//! assert_eq!(blue.to_hsl().to_rgb(), blue);
//! ```

use crate::{Cmyk, Hsl, Hsv, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(util::normalize(self)).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(util::normalize(self)).into()
    }

    /// Convert this color to the CMYK color model.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(util::normalize(self)).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels. Channels are
    /// truncated, not rounded, when scaled to `0..=255`.
    pub fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = util::hsl_to_rgb(self.to_array());
        Rgb::clamped(red, green, blue)
    }
}

mod util {
    use crate::{
        color::Component,
        math::{normalize_hue, round_to},
        Rgb,
    };

    const PLACES: usize = 2;

    /// Scale the channels of a color into `0.0..=1.0`.
    pub fn normalize(rgb: &Rgb) -> [Component; 3] {
        rgb.to_array().map(|c| Component::from(c) / 255.0)
    }

    /// Calculate the hue from normalized RGB components and return it along
    /// with the min and max component.
    fn rgb_to_hue_with_min_max(from: [Component; 3]) -> (Component, Component, Component) {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        (hue, min, max)
    }

    /// Convert from RGB to HSL.
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        [hue, saturation, lightness].map(|c| round_to(c, PLACES))
    }

    /// Convert from HSL to RGB, with channels scaled to `0..=255` and
    /// truncated toward zero.
    pub fn hsl_to_rgb(from: [Component; 3]) -> [i32; 3] {
        let [hue, saturation, lightness] = from;
        let hue = normalize_hue(hue);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = match hue {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        [red, green, blue].map(|c| ((c + m) * 255.0) as i32)
    }

    /// Convert from RGB to HSV.
    pub fn rgb_to_hsv(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [hue, saturation, max].map(|c| round_to(c, PLACES))
    }

    /// Convert from RGB to CMYK, as percentages.
    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let max = from[0].max(from[1]).max(from[2]);
        let key = 1.0 - max;

        let [cyan, magenta, yellow] = if key < 1.0 {
            from.map(|c| (1.0 - c - key) / (1.0 - key))
        } else {
            [0.0; 3]
        };

        [cyan, magenta, yellow, key].map(|c| round_to(c * 100.0, PLACES))
    }
}
