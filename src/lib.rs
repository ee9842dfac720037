//! colorway converts hexadecimal color codes into the RGB, HSL, HSV and CMYK
//! color models and derives related colors (complement, triad and tetrad).

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod error;
mod harmony;
mod hsl;
mod hsv;
mod math;
mod model;
mod rgb;


pub use cmyk::Cmyk;
pub use color::{Component, Relation, Space};
pub use error::InvalidColorFormat;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use model::{Attributes, FullColor, Links, SimpleColor, DEFAULT_BASE_URL};
pub use rgb::{HexColor, Rgb};
