use strum_macros::FromRepr;

use super::scalars::Word;

/// Per-layer blending function, as stored in the layer chunk.
///
/// `Hue`, `Saturation`, `Color` and `Luminosity` are recognized but the
/// compositor renders them as `Normal`.
#[derive(FromRepr, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u16)]
pub enum BlendMode {
    #[default]
    Normal = 0,
    Multiply = 1,
    Screen = 2,
    Overlay = 3,
    Darken = 4,
    Lighten = 5,
    ColorDodge = 6,
    ColorBurn = 7,
    HardLight = 8,
    SoftLight = 9,
    Difference = 10,
    Exclusion = 11,
    Hue = 12,
    Saturation = 13,
    Color = 14,
    Luminosity = 15,
}

impl From<Word> for BlendMode {
    /// Unrecognized modes behave like `Normal`.
    fn from(word: Word) -> Self {
        Self::from_repr(word).unwrap_or(Self::Normal)
    }
}
