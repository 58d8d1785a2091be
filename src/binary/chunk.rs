use nom::{bytes::complete::take, multi::count};
use strum_macros::FromRepr;

use super::chunks::{
    cel::{parse_cel_chunk, CelChunk},
    layer::{parse_layer_chunk, LayerChunk},
    old_palette::{parse_old_palette_chunk, OldPaletteChunk},
    palette::{parse_palette_chunk, PaletteChunk},
};
use super::errors::{ParseError, ParseResult};
use super::scalars::{dword_size, word, Word};

/// Chunk type tags defined by the container format.
#[derive(FromRepr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ChunkType {
    OldPalette = 0x0004,
    OldPalette2 = 0x0011,
    Layer = 0x2004,
    Cel = 0x2005,
    Mask = 0x2016,
    Path = 0x2017,
    Tags = 0x2018,
    Palette = 0x2019,
    UserData = 0x2020,
}

/// One decoded chunk. Tags the document model has no use for are recognized
/// but carry no payload; unknown tags are skipped by declared size, which is
/// what keeps the framing forward compatible.
#[derive(Debug)]
pub enum Chunk<'a> {
    OldPalette(OldPaletteChunk),
    /// Deprecated second legacy palette tag, skipped
    OldPalette2,
    Layer(LayerChunk<'a>),
    Cel(CelChunk<'a>),
    Mask,
    Path,
    Tags,
    UserData,
    Palette(PaletteChunk),
    Unsupported(Word),
}

pub fn parse_chunks(input: &[u8], chunk_count: usize) -> ParseResult<'_, Vec<Chunk<'_>>> {
    count(parse_chunk, chunk_count)(input)
}

/// Size dword plus type word, counted inside the declared chunk size.
const CHUNK_HEADER_SIZE: u32 = 6;

pub fn parse_chunk(input: &[u8]) -> ParseResult<'_, Chunk<'_>> {
    let (input, size) = dword_size(input, CHUNK_HEADER_SIZE, ParseError::InvalidChunkSize)?;
    // The cursor advances by the declared size no matter how much of the
    // payload the type-specific parser consumes.
    let (rest, input) = take(size - 4)(input)?;
    let (payload, chunk_type) = word(input)?;
    let chunk = match ChunkType::from_repr(chunk_type) {
        Some(ChunkType::OldPalette) => {
            let (_, chunk) = parse_old_palette_chunk(payload)?;
            Chunk::OldPalette(chunk)
        }
        Some(ChunkType::OldPalette2) => Chunk::OldPalette2,
        Some(ChunkType::Layer) => {
            let (_, chunk) = parse_layer_chunk(payload)?;
            Chunk::Layer(chunk)
        }
        Some(ChunkType::Cel) => {
            let (_, chunk) = parse_cel_chunk(payload)?;
            Chunk::Cel(chunk)
        }
        Some(ChunkType::Mask) => Chunk::Mask,
        Some(ChunkType::Path) => Chunk::Path,
        Some(ChunkType::Tags) => Chunk::Tags,
        Some(ChunkType::UserData) => Chunk::UserData,
        Some(ChunkType::Palette) => {
            let (_, chunk) = parse_palette_chunk(payload)?;
            Chunk::Palette(chunk)
        }
        None => Chunk::Unsupported(chunk_type),
    };
    Ok((rest, chunk))
}
