use bitflags::bitflags;
use nom::bytes::complete::take;

use crate::binary::blend_mode::BlendMode;
use crate::binary::errors::ParseResult;
use crate::binary::scalars::{byte, parse_string, word, Byte, Word};

/// One layer declaration. Layers are declared once for the whole document;
/// the order of declaration is the stacking order.
#[derive(Debug, Clone, Copy)]
pub struct LayerChunk<'a> {
    pub flags: LayerFlags,
    pub kind: LayerKind,
    /// Nesting level below the preceding group layer
    pub child_level: Word,
    pub blend_mode: BlendMode,
    pub opacity: Byte,
    pub name: &'a str,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LayerFlags: Word {
        const VISIBLE = 0x1;
        const EDITABLE = 0x2;
        const LOCK_MOVEMENT = 0x4;
        const BACKGROUND = 0x8;
        const PREFER_LINKED_CELS = 0x10;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Normal,
    Group,
    Unknown(Word),
}

impl From<Word> for LayerKind {
    fn from(value: Word) -> Self {
        match value {
            0 => Self::Normal,
            1 => Self::Group,
            kind => Self::Unknown(kind),
        }
    }
}

pub fn parse_layer_chunk(input: &[u8]) -> ParseResult<'_, LayerChunk<'_>> {
    let (input, flags) = word(input)?;
    let flags = LayerFlags::from_bits_truncate(flags);
    let (input, kind) = word(input)?;
    let (input, child_level) = word(input)?;
    // default layer width/height, ignored by the editor itself
    let (input, _) = take(4usize)(input)?;
    let (input, blend_mode) = word(input)?;
    let (input, opacity) = byte(input)?;
    let (input, _) = take(3usize)(input)?;
    let (input, name) = parse_string(input)?;
    Ok((
        input,
        LayerChunk {
            flags,
            kind: kind.into(),
            child_level,
            blend_mode: blend_mode.into(),
            opacity,
            name,
        },
    ))
}
