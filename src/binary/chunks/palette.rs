use bitflags::bitflags;
use nom::{bytes::complete::take, combinator::cond, multi::count};

use crate::binary::errors::{ParseError, ParseResult};
use crate::binary::scalars::{dword, parse_color, parse_string, word, Dword, Word};
use crate::color::Color;

/// Sanity bound against hostile headers declaring enormous palettes.
pub const MAX_PALETTE_SIZE: Dword = 1 << 16;

/// Modern palette chunk: declares a new total palette size and rewrites the
/// entries in the `[first, last]` index range.
#[derive(Debug, Clone)]
pub struct PaletteChunk {
    pub new_size: Dword,
    /// Index the first entry in `entries` applies to
    pub first_index: Dword,
    pub entries: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub color: Color,
}

bitflags! {
    pub struct PaletteEntryFlags: Word {
        const HAS_NAME = 0x1;
    }
}

pub fn parse_palette_chunk(input: &[u8]) -> ParseResult<'_, PaletteChunk> {
    let (input, new_size) = dword(input)?;
    if new_size > MAX_PALETTE_SIZE {
        return Err(nom::Err::Failure(ParseError::PaletteTooLarge(new_size)));
    }
    let (input, first_index) = dword(input)?;
    let (input, last_index) = dword(input)?;
    if first_index > last_index || last_index >= new_size {
        return Err(nom::Err::Failure(ParseError::InvalidPaletteRange {
            first: first_index,
            last: last_index,
            size: new_size,
        }));
    }
    let (input, _) = take(8usize)(input)?;
    let (input, entries) = count(
        parse_palette_entry,
        (last_index - first_index + 1) as usize,
    )(input)?;
    Ok((
        input,
        PaletteChunk {
            new_size,
            first_index,
            entries,
        },
    ))
}

pub fn parse_palette_entry(input: &[u8]) -> ParseResult<'_, PaletteEntry> {
    let (input, flags) = word(input)?;
    let flags = PaletteEntryFlags::from_bits_truncate(flags);
    let (input, color) = parse_color(input)?;
    // the entry name trails the color when flagged; skipped, the document
    // model has no use for it
    let (input, _name) = cond(flags.contains(PaletteEntryFlags::HAS_NAME), parse_string)(input)?;
    Ok((input, PaletteEntry { color }))
}
