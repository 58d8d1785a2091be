use nom::combinator::map;

use super::errors::ParseResult;
use super::scalars::{word, Word};

/// Pixel storage mode of the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 1 byte per pixel, palette index
    Indexed,
    /// 2 bytes per pixel, value + alpha
    Grayscale,
    /// 4 bytes per pixel, RGBA
    Rgba,
    Unknown(Word),
}

impl From<Word> for ColorDepth {
    fn from(value: Word) -> Self {
        match value {
            8 => Self::Indexed,
            16 => Self::Grayscale,
            32 => Self::Rgba,
            depth => Self::Unknown(depth),
        }
    }
}

impl ColorDepth {
    /// Bytes per stored pixel, 0 when the depth is not recognized.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Indexed => 1,
            Self::Grayscale => 2,
            Self::Rgba => 4,
            Self::Unknown(_) => 0,
        }
    }
}

pub fn parse_color_depth(input: &[u8]) -> ParseResult<'_, ColorDepth> {
    map(word, ColorDepth::from)(input)
}
