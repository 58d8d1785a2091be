use nom::multi::count;

use super::errors::ParseError;
use super::header::{parse_header, Header};
use super::raw_frame::{parse_raw_frame, RawFrame};

/// The whole container after the borrowed parsing pass.
#[derive(Debug)]
pub struct RawFile<'a> {
    pub header: Header,
    pub frames: Vec<RawFrame<'a>>,
}

/// Parse the header, then exactly the declared number of frames. Trailing
/// bytes after the last frame are ignored.
pub fn parse_raw_file(input: &[u8]) -> Result<RawFile<'_>, nom::Err<ParseError<'_>>> {
    let (input, header) = parse_header(input)?;
    let (_, frames) = count(parse_raw_frame, header.frames as usize)(input)?;
    Ok(RawFile { header, frames })
}
