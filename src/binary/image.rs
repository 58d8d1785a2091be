use super::scalars::Word;

/// The pixel block stored by a cel, borrowed from the input buffer.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    /// Width in pixels
    pub width: Word,
    /// Height in pixels
    pub height: Word,
    /// Row-major pixel bytes, top to bottom, left to right within a row;
    /// zlib-compressed when `compressed` is set.
    pub data: &'a [u8],
    pub compressed: bool,
}

impl Image<'_> {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
