//! Model a color with 8-bit red, green and blue channels and its six digit
//! hexadecimal color code.

use std::{fmt, str::FromStr};

use crate::error::InvalidColorFormat;

/// A color with red, green and blue channels in `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from its channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new color from channels that may be out of range; each is
    /// clamped to `0..=255`.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, u8::MAX as i32) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Parse a six digit hexadecimal color code with an optional leading `#`.
    /// Digits are case-insensitive.
    pub fn from_hex(code: &str) -> Result<Self, InvalidColorFormat> {
        let digits = code.strip_prefix('#').unwrap_or(code);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColorFormat::new(code));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| InvalidColorFormat::new(code))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// The canonical color code of this color.
    pub fn to_hex(&self) -> HexColor {
        HexColor(self.to_string())
    }

    /// The channels in red, green, blue order.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Formats as six lowercase hexadecimal digits without a leading `#`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_array(), serializer)
    }
}

/// A validated color code: six lowercase hexadecimal digits, no `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// The color this code stands for.
    pub fn to_rgb(&self) -> Rgb {
        // Only built from an `Rgb`, so the code is always six hex digits and
        // parsing a pair can not fail.
        let channel = |at: usize| u8::from_str_radix(&self.0[at..at + 2], 16).unwrap_or_default();
        Rgb::new(channel(0), channel(2), channel(4))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl FromStr for HexColor {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s).map(|rgb| rgb.to_hex())
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_hex() {
        assert_eq!(Rgb::from_hex("FFFFFF"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("000000"), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(Rgb::from_hex("FF0000"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("c0c0c0"), Ok(Rgb::new(192, 192, 192)));
        assert_eq!(Rgb::from_hex("#FFFFFF"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!("#1a2B3c".parse::<Rgb>(), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn reject_malformed_hex() {
        for input in [
            "foo", "191900f", "", "#", "12345", "##123456", "12345g", "+12345", "ff ff ff",
            "ffffé",
        ] {
            assert_eq!(
                Rgb::from_hex(input),
                Err(InvalidColorFormat::new(input)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn to_hex() {
        assert_eq!(Rgb::new(255, 255, 255).to_string(), "ffffff");
        assert_eq!(Rgb::new(192, 192, 192).to_string(), "c0c0c0");
        assert_eq!(Rgb::new(1, 2, 10).to_hex().as_str(), "01020a");
    }

    #[test]
    fn clamped_channels() {
        assert_eq!(Rgb::clamped(-127, 300, 42), Rgb::new(0, 255, 42));
    }

    #[test]
    fn hex_color_is_canonical() {
        let hex: HexColor = "#C0FFEE".parse().unwrap();
        assert_eq!(hex.as_str(), "c0ffee");
        assert_eq!(hex.to_rgb(), Rgb::new(0xc0, 0xff, 0xee));
        assert!("c0ffe".parse::<HexColor>().is_err());
    }

    #[test]
    fn hex_color_keeps_every_channel() {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0x0a, 0xb0, 0x0f),
        ] {
            let hex = HexColor::from(rgb);
            assert_eq!(hex.as_str().len(), 6);
            assert_eq!(hex.to_rgb(), rgb);
            assert_eq!(Rgb::from_hex(hex.as_str()), Ok(rgb));
        }
    }

    proptest! {
        #[test]
        fn hex_round_trip(red in any::<u8>(), green in any::<u8>(), blue in any::<u8>()) {
            let code = format!("{red:02x}{green:02x}{blue:02x}");
            let rgb = Rgb::from_hex(&code).unwrap();
            prop_assert_eq!(rgb, Rgb::new(red, green, blue));
            prop_assert_eq!(rgb.to_string(), code.clone());
            prop_assert_eq!(rgb.to_hex().to_rgb(), rgb);
            let upper = format!("#{}", code.to_uppercase());
            prop_assert_eq!(Rgb::from_hex(&upper).unwrap(), rgb);
        }
    }
}
