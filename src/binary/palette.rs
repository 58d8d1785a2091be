use super::chunk::Chunk;
use super::raw_frame::RawFrame;
use crate::color::Color;

/// The document's single palette, ordered by palette index.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Bounds-checked lookup, `None` for indices the palette never defined.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    fn ensure_len(&mut self, len: usize) {
        if self.colors.len() < len {
            self.colors.resize(len, Color::TRANSPARENT);
        }
    }
}

/// Fold every palette chunk in file order into one palette.
///
/// The palette mode is sticky per document: once a modern palette chunk has
/// been seen, legacy chunks are ignored, and the first modern chunk discards
/// whatever the legacy chunks wrote. Within a mode the last chunk wins for
/// the indices it overwrites.
pub fn create_palette(frames: &[RawFrame<'_>]) -> Palette {
    let mut palette = Palette::default();
    let mut uses_modern = false;
    for frame in frames {
        for chunk in &frame.chunks {
            match chunk {
                Chunk::OldPalette(chunk) if !uses_modern => {
                    // the legacy form is a fixed 256-entry table
                    palette.ensure_len(256);
                    for packet in &chunk.packets {
                        let first = packet.first_index as usize;
                        palette.ensure_len(first + packet.colors.len());
                        for (offset, color) in packet.colors.iter().enumerate() {
                            palette.colors[first + offset] = *color;
                        }
                    }
                }
                Chunk::Palette(chunk) => {
                    if !uses_modern {
                        palette.colors.clear();
                        uses_modern = true;
                    }
                    palette.ensure_len(chunk.new_size as usize);
                    let first = chunk.first_index as usize;
                    for (offset, entry) in chunk.entries.iter().enumerate() {
                        palette.colors[first + offset] = entry.color;
                    }
                }
                _ => {}
            }
        }
    }
    palette
}
