//! Fractional components, the color spaces reported for every color and the
//! relations linking a color to its neighbours on the hue wheel.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored as.
pub type Component = f64;

/// Color spaces a color is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels in `0..=255`.
    Rgb = 0,
    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    Hsl = 1,
    /// Hue in degrees, saturation and value in `0.0..=1.0`.
    Hsv = 2,
    /// Cyan, magenta, yellow and key as percentages.
    Cmyk = 3,
}

impl Space {
    /// All spaces, in the order they are reported.
    pub const ALL: [Space; 4] = [Space::Rgb, Space::Hsl, Space::Hsv, Space::Cmyk];

    /// The name used as key in the attributes of a full color.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Cmyk => "cmyk",
        }
    }
}

/// Relations from a color to other colors derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Relation {
    /// The inverted color.
    Complement = 0,
    /// Two colors evenly spaced around the hue wheel.
    Triad = 1,
    /// Three colors completing a rectangle on the hue wheel.
    Tetrad = 2,
}

impl Relation {
    /// All relations, in the order they are reported.
    pub const ALL: [Relation; 3] = [Relation::Complement, Relation::Triad, Relation::Tetrad];

    /// The name used as key in the links of a full color.
    pub fn name(&self) -> &'static str {
        match self {
            Relation::Complement => "complement",
            Relation::Triad => "triad",
            Relation::Tetrad => "tetrad",
        }
    }

    /// Hue offsets in degrees of the related colors. The complement is
    /// computed by channel inversion and has no hue offset.
    pub fn hue_offsets(&self) -> &'static [Component] {
        match self {
            Relation::Complement => &[],
            Relation::Triad => &[120.0, 240.0],
            Relation::Tetrad => &[60.0, 180.0, 240.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names = Space::ALL.map(|s| s.name()).to_vec();
        names.extend(Relation::ALL.map(|r| r.name()));
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn hue_offsets_match_relation_size() {
        assert!(Relation::Complement.hue_offsets().is_empty());
        assert_eq!(Relation::Triad.hue_offsets(), &[120.0, 240.0]);
        assert_eq!(Relation::Tetrad.hue_offsets(), &[60.0, 180.0, 240.0]);
    }
}
