use nom::multi::count;

use crate::binary::errors::ParseResult;
use crate::binary::scalars::{byte, word, Byte};
use crate::color::Color;

/// Legacy palette chunk: packets of (first index, count) runs of RGB
/// triples. Alpha is always fully opaque.
#[derive(Debug, Clone)]
pub struct OldPaletteChunk {
    pub packets: Vec<OldPalettePacket>,
}

#[derive(Debug, Clone)]
pub struct OldPalettePacket {
    pub first_index: Byte,
    pub colors: Vec<Color>,
}

pub fn parse_old_palette_chunk(input: &[u8]) -> ParseResult<'_, OldPaletteChunk> {
    let (input, packet_count) = word(input)?;
    let (input, packets) = count(parse_old_palette_packet, packet_count as usize)(input)?;
    Ok((input, OldPaletteChunk { packets }))
}

fn parse_old_palette_packet(input: &[u8]) -> ParseResult<'_, OldPalettePacket> {
    let (input, first_index) = byte(input)?;
    let (input, color_count) = byte(input)?;
    // a count of zero means a full run of 256 colors
    let color_count = if color_count == 0 {
        256
    } else {
        color_count as usize
    };
    let (input, colors) = count(parse_rgb, color_count)(input)?;
    Ok((
        input,
        OldPalettePacket {
            first_index,
            colors,
        },
    ))
}

fn parse_rgb(input: &[u8]) -> ParseResult<'_, Color> {
    let (input, red) = byte(input)?;
    let (input, green) = byte(input)?;
    let (input, blue) = byte(input)?;
    Ok((input, Color::from_rgba8(red, green, blue, u8::MAX)))
}
