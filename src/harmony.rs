//! Colors related to a base color by their position on the hue wheel.

use crate::{HexColor, Relation, Rgb};

impl Rgb {
    /// The complementary color, with every channel inverted.
    pub fn complement(&self) -> Rgb {
        Rgb::new(
            u8::MAX - self.red,
            u8::MAX - self.green,
            u8::MAX - self.blue,
        )
    }

    /// The two colors at 120 and 240 degrees from this color's hue.
    pub fn triad(&self) -> [HexColor; 2] {
        self.rotations(Relation::Triad)
    }

    /// The three colors at 60, 180 and 240 degrees from this color's hue,
    /// forming a rectangle on the hue wheel.
    pub fn tetrad(&self) -> [HexColor; 3] {
        self.rotations(Relation::Tetrad)
    }

    /// The colors related to this one, in order.
    pub fn related(&self, relation: Relation) -> Vec<HexColor> {
        match relation {
            Relation::Complement => vec![self.complement().to_hex()],
            Relation::Triad => self.triad().to_vec(),
            Relation::Tetrad => self.tetrad().to_vec(),
        }
    }

    fn rotations<const N: usize>(&self, relation: Relation) -> [HexColor; N] {
        let hsl = self.to_hsl();
        let offsets = relation.hue_offsets();
        debug_assert_eq!(offsets.len(), N);
        std::array::from_fn(|i| hsl.rotate_hue(offsets[i]).to_rgb().to_hex())
    }
}
