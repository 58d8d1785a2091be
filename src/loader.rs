use std::io::Read;

use flate2::read::ZlibDecoder;
use thiserror::Error;

use crate::binary::chunk::Chunk;
use crate::binary::chunks::cel::{CelChunk, CelContent};
use crate::binary::errors::ParseError;
use crate::binary::image::Image;
use crate::binary::palette::create_palette;
use crate::binary::raw_file::parse_raw_file;
use crate::document::{Cel, CelKind, Document, Frame, LayerInfo};

/// Errors produced while decoding a byte buffer into a [`Document`]. All of
/// them are fatal to the decode; no partial document is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// File or frame magic number mismatch
    #[error("bad magic number")]
    BadMagic,
    /// A read would have gone past the end of the buffer, or a declared size
    /// is inconsistent with the data carrying it
    #[error("truncated or malformed input")]
    Truncated,
    /// A cel referenced a layer the document never declared
    #[error("cel references layer {layer} but only {layers} layers are declared")]
    BadLayerIndex { layer: usize, layers: usize },
    /// The zlib stream of a compressed cel could not be inflated
    #[error("cel decompression failed: {0}")]
    DecompressionFailed(#[source] std::io::Error),
}

impl DecodeError {
    fn from_parse(err: nom::Err<ParseError<'_>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Self::Truncated,
            nom::Err::Error(e) | nom::Err::Failure(e) => match e {
                ParseError::BadFileMagic(_) | ParseError::BadFrameMagic(_) => Self::BadMagic,
                _ => Self::Truncated,
            },
        }
    }
}

/// Decode a complete file from memory.
///
/// The buffer is walked in a single forward pass: the borrowed raw parse
/// first, then an owning assembly that decompresses cels, folds the palette
/// chunks and validates layer references.
pub fn decode(data: &[u8]) -> Result<Document, DecodeError> {
    let raw = parse_raw_file(data).map_err(DecodeError::from_parse)?;
    let palette = create_palette(&raw.frames);
    let bytes_per_pixel = raw.header.color_depth.bytes_per_pixel();

    let mut frames = Vec::with_capacity(raw.frames.len());
    let mut layers: Vec<LayerInfo> = Vec::new();

    for raw_frame in raw.frames {
        let mut frame = Frame {
            duration: u32::from(raw_frame.duration),
            cels: Vec::new(),
        };
        for chunk in raw_frame.chunks {
            match chunk {
                Chunk::Layer(chunk) => layers.push(LayerInfo {
                    flags: chunk.flags,
                    kind: chunk.kind,
                    child_level: chunk.child_level,
                    blend_mode: chunk.blend_mode,
                    opacity: chunk.opacity,
                    name: chunk.name.to_owned(),
                }),
                Chunk::Cel(chunk) => {
                    let layer_index = chunk.layer_index as usize;
                    if layer_index >= layers.len() {
                        return Err(DecodeError::BadLayerIndex {
                            layer: layer_index,
                            layers: layers.len(),
                        });
                    }
                    // Frames do not pre-declare how many layers they use;
                    // the sparse table is sized on first need.
                    if frame.cels.len() < layers.len() {
                        frame.cels.resize(layers.len(), None);
                    }
                    if let Some(cel) = build_cel(chunk, bytes_per_pixel)? {
                        frame.cels[layer_index] = Some(cel);
                    }
                }
                // already folded into the palette above
                Chunk::OldPalette(_) | Chunk::Palette(_) => {}
                // recognized tags with no counterpart in the document model
                Chunk::OldPalette2
                | Chunk::Mask
                | Chunk::Path
                | Chunk::Tags
                | Chunk::UserData
                | Chunk::Unsupported(_) => {}
            }
        }
        frames.push(frame);
    }

    Ok(Document {
        header: raw.header,
        frames,
        layers,
        palette,
    })
}

/// Turn a raw cel chunk into an owned cel, inflating compressed pixel data.
/// Cels of a kind this crate does not know are dropped, mirroring how
/// unknown chunk types are skipped.
fn build_cel(chunk: CelChunk<'_>, bytes_per_pixel: usize) -> Result<Option<Cel>, DecodeError> {
    let (kind, width, height, pixels) = match chunk.content {
        CelContent::Raw(image) => (CelKind::Raw, image.width, image.height, image.data.to_vec()),
        CelContent::Compressed(image) => (
            CelKind::Compressed,
            image.width,
            image.height,
            inflate(&image, bytes_per_pixel)?,
        ),
        CelContent::Linked { frame_position } => (
            CelKind::Linked {
                frame: frame_position,
            },
            0,
            0,
            Vec::new(),
        ),
        CelContent::Unknown(_) => return Ok(None),
    };
    Ok(Some(Cel {
        x: chunk.x,
        y: chunk.y,
        opacity: chunk.opacity,
        kind,
        width,
        height,
        pixels,
    }))
}

/// Hostile headers can declare enormous cels; the buffer grows with the
/// actual decompressed data instead of the declared dimensions.
const CEL_PREALLOC_CAP: usize = 1 << 20;

/// The external inflate primitive: a zlib stream in, raw bytes out. Output
/// is capped at the size the cel's declared dimensions call for.
fn inflate(image: &Image<'_>, bytes_per_pixel: usize) -> Result<Vec<u8>, DecodeError> {
    let expected = image.pixel_count() * bytes_per_pixel;
    let mut pixels = Vec::with_capacity(expected.min(CEL_PREALLOC_CAP));
    let mut decoder = ZlibDecoder::new(image.data).take(expected as u64);
    decoder
        .read_to_end(&mut pixels)
        .map_err(DecodeError::DecompressionFailed)?;
    Ok(pixels)
}
