use nom::{bytes::complete::take, combinator::rest};

use crate::binary::errors::ParseResult;
use crate::binary::image::Image;
use crate::binary::scalars::{byte, short, word, Byte, Short, Word};

/// The pixel content of one layer within one frame.
#[derive(Debug, Clone, Copy)]
pub struct CelChunk<'a> {
    pub layer_index: Word,
    /// Canvas position of the stored block, may be negative
    pub x: Short,
    pub y: Short,
    /// Cel opacity, combined with the owning layer's opacity when compositing
    pub opacity: Byte,
    pub content: CelContent<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum CelContent<'a> {
    Raw(Image<'a>),
    /// Reuses the cel of an earlier frame on the same layer
    Linked { frame_position: Word },
    Compressed(Image<'a>),
    Unknown(Word),
}

pub fn parse_cel_chunk(input: &[u8]) -> ParseResult<'_, CelChunk<'_>> {
    let (input, layer_index) = word(input)?;
    let (input, x) = short(input)?;
    let (input, y) = short(input)?;
    let (input, opacity) = byte(input)?;
    let (input, cel_type) = word(input)?;
    let (input, _) = take(7usize)(input)?;
    let (input, content) = match cel_type {
        0 => {
            let (input, image) = parse_image(input, false)?;
            (input, CelContent::Raw(image))
        }
        1 => {
            let (input, frame_position) = word(input)?;
            (input, CelContent::Linked { frame_position })
        }
        2 => {
            let (input, image) = parse_image(input, true)?;
            (input, CelContent::Compressed(image))
        }
        other => (input, CelContent::Unknown(other)),
    };
    Ok((
        input,
        CelChunk {
            layer_index,
            x,
            y,
            opacity,
            content,
        },
    ))
}

/// Width/height pair followed by the rest of the chunk as pixel data.
fn parse_image(input: &[u8], compressed: bool) -> ParseResult<'_, Image<'_>> {
    let (input, width) = word(input)?;
    let (input, height) = word(input)?;
    let (input, data) = rest(input)?;
    Ok((
        input,
        Image {
            width,
            height,
            data,
            compressed,
        },
    ))
}
