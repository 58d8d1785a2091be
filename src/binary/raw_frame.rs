use nom::bytes::complete::take;

use super::chunk::{parse_chunks, Chunk};
use super::errors::{ParseError, ParseResult};
use super::scalars::{dword_size, word, Word};

pub const FRAME_MAGIC: Word = 0xF1FA;

/// Size dword, magic, chunk count, duration, six reserved bytes.
const FRAME_HEADER_SIZE: u32 = 16;

/// One frame as stored in the file: a duration and the raw chunk list.
#[derive(Debug)]
pub struct RawFrame<'a> {
    pub duration: Word,
    pub chunks: Vec<Chunk<'a>>,
}

pub fn parse_raw_frame(input: &[u8]) -> ParseResult<'_, RawFrame<'_>> {
    let (input, size) = dword_size(input, FRAME_HEADER_SIZE, ParseError::InvalidFrameSize)?;
    // The next frame starts at the declared frame size, not wherever the
    // chunk parsers stop, so a corrupt chunk cannot desynchronize the frames
    // that follow it.
    let (rest, input) = take(size - 4)(input)?;
    let (input, magic) = word(input)?;
    if magic != FRAME_MAGIC {
        return Err(nom::Err::Failure(ParseError::BadFrameMagic(magic)));
    }
    let (input, chunk_count) = word(input)?;
    let (input, duration) = word(input)?;
    let (input, _) = take(6usize)(input)?;
    let (_, chunks) = parse_chunks(input, chunk_count as usize)?;
    Ok((rest, RawFrame { duration, chunks }))
}
