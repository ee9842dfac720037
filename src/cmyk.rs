//! Model a color in the subtractive CMYK color model.

use crate::color::Component;

colorway_macros::gen_model! {
    /// A color specified as cyan, magenta, yellow and key (black) inks, each
    /// as a percentage.
    pub struct Cmyk {
        /// Cyan ink.
        cyan: Component,
        /// Magenta ink.
        magenta: Component,
        /// Yellow ink.
        yellow: Component,
        /// Key (black) ink.
        key: Component,
    }
}
