use nom::bytes::complete::take;

use super::color_depth::{parse_color_depth, ColorDepth};
use super::errors::{ParseError, ParseResult};
use super::scalars::{byte, dword, word, Byte, Dword, Word};

pub const FILE_MAGIC: Word = 0xA5E0;

/// The fixed 128-byte file header.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    /// Number of frames that follow the header
    pub frames: Word,
    /// Canvas width in pixels
    pub width: Word,
    /// Canvas height in pixels
    pub height: Word,
    pub color_depth: ColorDepth,
    pub flags: Dword,
    /// Default frame duration in milliseconds, deprecated in favor of the
    /// per-frame duration
    pub speed: Word,
    /// Palette index rendered fully transparent in indexed mode
    pub transparent_index: Byte,
    /// Declared number of colors, 0 means 256
    pub num_colors: Word,
}

pub fn parse_header(input: &[u8]) -> ParseResult<'_, Header> {
    let (input, _file_size) = dword(input)?;
    let (input, magic) = word(input)?;
    if magic != FILE_MAGIC {
        return Err(nom::Err::Failure(ParseError::BadFileMagic(magic)));
    }
    let (input, frames) = word(input)?;
    let (input, width) = word(input)?;
    let (input, height) = word(input)?;
    let (input, color_depth) = parse_color_depth(input)?;
    let (input, flags) = dword(input)?;
    let (input, speed) = word(input)?;
    let (input, _) = take(8usize)(input)?;
    let (input, transparent_index) = byte(input)?;
    let (input, _) = take(3usize)(input)?;
    let (input, num_colors) = word(input)?;
    let (input, _) = take(94usize)(input)?;
    Ok((
        input,
        Header {
            frames,
            width,
            height,
            color_depth,
            flags,
            speed,
            transparent_index,
            num_colors,
        },
    ))
}
