//! Views of a color as returned to clients: a [`SimpleColor`] carries a color
//! code and a link to itself, a [`FullColor`] adds the color in every
//! [`Space`] and links to its related colors.
//!
//! ```rust
//! use colorway::{FullColor, DEFAULT_BASE_URL};
//! let color = FullColor::new("#FF00FF", DEFAULT_BASE_URL).unwrap();
//! assert_eq!(color.colorcode().as_str(), "ff00ff");
//! assert_eq!(color.href(), "/api/v1/colors/ff00ff");
//! ```

use std::fmt;

use serde::Serialize;

use crate::{Cmyk, HexColor, Hsl, Hsv, InvalidColorFormat, Relation, Rgb, Space};

/// The path colors are served under.
pub const DEFAULT_BASE_URL: &str = "/api/v1/colors";

/// A color known only by its color code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimpleColor {
    colorcode: HexColor,
    href: String,
}

impl SimpleColor {
    /// Validate and canonicalize a color code. The link to the color is
    /// `{base_url}/{colorcode}`.
    pub fn new(input: &str, base_url: &str) -> Result<Self, InvalidColorFormat> {
        Ok(Self::from_hex(input.parse()?, base_url))
    }

    /// Wrap an already validated color code.
    pub fn from_hex(colorcode: HexColor, base_url: &str) -> Self {
        let href = format!("{}/{}", base_url, colorcode);
        Self { colorcode, href }
    }

    /// The canonical color code.
    pub fn colorcode(&self) -> &HexColor {
        &self.colorcode
    }

    /// The link to this color.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl fmt::Display for SimpleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.colorcode, f)
    }
}

/// A color in each of the reported color spaces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attributes {
    /// Red, green and blue channels.
    pub rgb: Rgb,
    /// Hue, saturation, lightness.
    pub hsl: Hsl,
    /// Hue, saturation, value.
    pub hsv: Hsv,
    /// Cyan, magenta, yellow, key percentages.
    pub cmyk: Cmyk,
}

impl Attributes {
    /// Convert the given color into every reported space.
    pub fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: rgb.to_hsl(),
            hsv: rgb.to_hsv(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// The components in the given space, RGB channels widened to floats.
    pub fn get(&self, space: Space) -> Vec<crate::Component> {
        match space {
            Space::Rgb => self.rgb.to_array().map(crate::Component::from).to_vec(),
            Space::Hsl => self.hsl.to_array().to_vec(),
            Space::Hsv => self.hsv.to_array().to_vec(),
            Space::Cmyk => self.cmyk.to_array().to_vec(),
        }
    }
}

/// Links to the colors related to a color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Links {
    /// The single complementary color.
    pub complement: Vec<SimpleColor>,
    /// The two triadic colors.
    pub triad: Vec<SimpleColor>,
    /// The three rectangle tetradic colors.
    pub tetrad: Vec<SimpleColor>,
}

impl Links {
    /// Derive the related colors of the given color.
    pub fn new(rgb: Rgb, base_url: &str) -> Self {
        let link = |relation| {
            rgb.related(relation)
                .into_iter()
                .map(|hex| SimpleColor::from_hex(hex, base_url))
                .collect::<Vec<_>>()
        };

        Self {
            complement: link(Relation::Complement),
            triad: link(Relation::Triad),
            tetrad: link(Relation::Tetrad),
        }
    }

    /// The colors for the given relation, in order.
    pub fn get(&self, relation: Relation) -> &[SimpleColor] {
        match relation {
            Relation::Complement => &self.complement,
            Relation::Triad => &self.triad,
            Relation::Tetrad => &self.tetrad,
        }
    }
}

/// A color with its representations in all spaces and links to its related
/// colors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FullColor {
    #[serde(flatten)]
    color: SimpleColor,
    attributes: Attributes,
    links: Links,
}

impl FullColor {
    /// Validate a color code and derive everything about it. The code is
    /// parsed once; all derived values are computed from that RGB value.
    pub fn new(input: &str, base_url: &str) -> Result<Self, InvalidColorFormat> {
        let rgb = Rgb::from_hex(input)?;
        tracing::trace!(input, %rgb, "deriving full color");

        Ok(Self {
            color: SimpleColor::from_hex(rgb.to_hex(), base_url),
            attributes: Attributes::new(rgb),
            links: Links::new(rgb, base_url),
        })
    }

    /// The color as a simple color.
    pub fn as_simple(&self) -> &SimpleColor {
        &self.color
    }

    /// The canonical color code.
    pub fn colorcode(&self) -> &HexColor {
        self.color.colorcode()
    }

    /// The link to this color.
    pub fn href(&self) -> &str {
        self.color.href()
    }

    /// The color in every reported space.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Links to related colors.
    pub fn links(&self) -> &Links {
        &self.links
    }
}

impl fmt::Display for FullColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(colors: &[SimpleColor]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn simple_color() {
        let color = SimpleColor::new("191900", DEFAULT_BASE_URL).unwrap();
        assert_eq!(color.to_string(), "191900");
        assert_eq!(color.href(), "/api/v1/colors/191900");

        let color = SimpleColor::new("#ABCDEF", "http://localhost:5000/colors").unwrap();
        assert_eq!(color.colorcode().as_str(), "abcdef");
        assert_eq!(color.href(), "http://localhost:5000/colors/abcdef");
    }

    #[test]
    fn simple_color_rejects_bad_codes() {
        assert_eq!(
            SimpleColor::new("191900f", DEFAULT_BASE_URL),
            Err(InvalidColorFormat::new("191900f"))
        );
        assert!(FullColor::new("foo", DEFAULT_BASE_URL).is_err());
    }

    #[test]
    fn full_color_of_white() {
        let color = FullColor::new("FFFFFF", DEFAULT_BASE_URL).unwrap();
        let attributes = color.attributes();

        assert_eq!(attributes.rgb, Rgb::new(255, 255, 255));
        assert_eq!(attributes.hsl, Hsl::new(0.0, 0.0, 1.0));
        assert_eq!(attributes.hsv, Hsv::new(0.0, 0.0, 1.0));
        assert_eq!(attributes.cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));

        let links = color.links();
        assert_eq!(codes(&links.complement), ["000000"]);
        // White has no hue, so rotating it stays white.
        assert_eq!(codes(&links.triad), ["ffffff", "ffffff"]);
        assert_eq!(codes(&links.tetrad), ["ffffff", "ffffff", "ffffff"]);
    }

    #[test]
    fn full_color_of_magenta() {
        let color = FullColor::new("ff00ff", DEFAULT_BASE_URL).unwrap();
        assert_eq!(color.as_simple().href(), "/api/v1/colors/ff00ff");
        assert_eq!(color.attributes().get(Space::Rgb), [255.0, 0.0, 255.0]);
        assert_eq!(color.attributes().get(Space::Hsl), [300.0, 1.0, 0.5]);
        assert_eq!(color.attributes().get(Space::Hsv), [300.0, 1.0, 1.0]);
        assert_eq!(color.attributes().get(Space::Cmyk), [0.0, 100.0, 0.0, 0.0]);

        let links = color.links();
        assert_eq!(codes(links.get(Relation::Complement)), ["00ff00"]);
        assert_eq!(codes(links.get(Relation::Triad)), ["ffff00", "00ffff"]);
        assert_eq!(
            codes(links.get(Relation::Tetrad)),
            ["ff0000", "00ff00", "00ffff"]
        );
        assert_eq!(links.triad[1].href(), "/api/v1/colors/00ffff");
    }

    #[test]
    fn serialized_shape() {
        let color = FullColor::new("ff00ff", DEFAULT_BASE_URL).unwrap();
        let json = serde_json::to_value(&color).unwrap();

        let object = json.as_object().unwrap();
        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, ["attributes", "colorcode", "href", "links"]);

        assert_eq!(json["colorcode"], "ff00ff");
        assert_eq!(json["href"], "/api/v1/colors/ff00ff");
        assert_eq!(json["attributes"]["rgb"], serde_json::json!([255, 0, 255]));
        assert_eq!(
            json["attributes"]["cmyk"],
            serde_json::json!([0.0, 100.0, 0.0, 0.0])
        );

        for space in Space::ALL {
            assert!(json["attributes"][space.name()].is_array());
        }
        for relation in Relation::ALL {
            assert!(json["links"][relation.name()].is_array());
        }
        assert_eq!(
            json["links"]["complement"],
            serde_json::json!([{"colorcode": "00ff00", "href": "/api/v1/colors/00ff00"}])
        );
    }
}
