use thiserror::Error;

use super::scalars::{Dword, Word};

/// Error type threaded through the nom parsers.
#[derive(Debug, Error)]
pub enum ParseError<'a> {
    #[error("bad file magic number: {0:#06x}")]
    BadFileMagic(Word),
    #[error("bad frame magic number: {0:#06x}")]
    BadFrameMagic(Word),
    #[error("invalid frame size: {0}")]
    InvalidFrameSize(Dword),
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(Dword),
    #[error("palette range {first}..={last} does not fit a palette of size {size}")]
    InvalidPaletteRange {
        first: Dword,
        last: Dword,
        size: Dword,
    },
    #[error("declared palette size too large: {0}")]
    PaletteTooLarge(Dword),
    #[error("nom error: {0:?}")]
    Nom(nom::error::Error<&'a [u8]>),
}

pub type ParseResult<'a, T> = nom::IResult<&'a [u8], T, ParseError<'a>>;

impl<'a> nom::error::ParseError<&'a [u8]> for ParseError<'a> {
    fn from_error_kind(input: &'a [u8], kind: nom::error::ErrorKind) -> Self {
        Self::Nom(nom::error::Error::new(input, kind))
    }

    fn append(_input: &'a [u8], _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> nom::error::FromExternalError<&'a [u8], std::str::Utf8Error> for ParseError<'a> {
    fn from_external_error(
        input: &'a [u8],
        kind: nom::error::ErrorKind,
        _error: std::str::Utf8Error,
    ) -> Self {
        Self::Nom(nom::error::Error::new(input, kind))
    }
}
