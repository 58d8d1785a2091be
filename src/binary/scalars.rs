use nom::{
    bytes::complete::take,
    combinator::map_res,
    number::complete::{le_i16, le_u16, le_u32, le_u8},
};

use super::errors::{ParseError, ParseResult};
use crate::color::Color;

pub type Byte = u8;
pub type Word = u16;
pub type Short = i16;
pub type Dword = u32;

pub fn byte(input: &[u8]) -> ParseResult<'_, Byte> {
    le_u8(input)
}

pub fn word(input: &[u8]) -> ParseResult<'_, Word> {
    le_u16(input)
}

pub fn short(input: &[u8]) -> ParseResult<'_, Short> {
    le_i16(input)
}

pub fn dword(input: &[u8]) -> ParseResult<'_, Dword> {
    le_u32(input)
}

/// Read a size field that must cover at least its own framing.
pub fn dword_size<'a>(
    input: &'a [u8],
    min: Dword,
    error: fn(Dword) -> ParseError<'a>,
) -> ParseResult<'a, Dword> {
    let (input, size) = dword(input)?;
    if size < min {
        return Err(nom::Err::Failure(error(size)));
    }
    Ok((input, size))
}

/// Length-prefixed UTF-8 string.
pub fn parse_string(input: &[u8]) -> ParseResult<'_, &str> {
    let (input, length) = word(input)?;
    map_res(take(length), std::str::from_utf8)(input)
}

/// Four RGBA bytes.
pub fn parse_color(input: &[u8]) -> ParseResult<'_, Color> {
    let (input, red) = byte(input)?;
    let (input, green) = byte(input)?;
    let (input, blue) = byte(input)?;
    let (input, alpha) = byte(input)?;
    Ok((input, Color::from_rgba8(red, green, blue, alpha)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_little_endian() {
        assert_eq!(word(&[0xE0, 0xA5]).unwrap().1, 0xA5E0);
        assert_eq!(short(&[0xFF, 0xFF]).unwrap().1, -1);
        assert_eq!(dword(&[0x01, 0x02, 0x03, 0x04]).unwrap().1, 0x0403_0201);
    }

    #[test]
    fn string_is_length_prefixed() {
        let input = [0x03, 0x00, b'a', b's', b'e', 0xFF];
        let (rest, s) = parse_string(&input).unwrap();
        assert_eq!(s, "ase");
        assert_eq!(rest, &[0xFF]);
    }

    #[test]
    fn dword_size_rejects_short_sizes() {
        let input = 4u32.to_le_bytes();
        assert!(dword_size(&input, 6, ParseError::InvalidChunkSize).is_err());
    }
}
