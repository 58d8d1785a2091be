//! Assembles synthetic `.ase` byte buffers for the tests, one builder call
//! per structure the format defines.
#![allow(dead_code)]

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};

pub const FILE_MAGIC: u16 = 0xA5E0;
pub const FRAME_MAGIC: u16 = 0xF1FA;

pub const CHUNK_OLD_PALETTE: u16 = 0x0004;
pub const CHUNK_LAYER: u16 = 0x2004;
pub const CHUNK_CEL: u16 = 0x2005;
pub const CHUNK_PALETTE: u16 = 0x2019;

/// Builds the fixed 128-byte file header plus any number of frames.
pub struct FileBuilder {
    width: u16,
    height: u16,
    color_depth: u16,
    transparent_index: u8,
    frames: Vec<Vec<u8>>,
}

impl FileBuilder {
    pub fn rgba(width: u16, height: u16) -> Self {
        Self::new(width, height, 32, 0)
    }

    pub fn indexed(width: u16, height: u16, transparent_index: u8) -> Self {
        Self::new(width, height, 8, transparent_index)
    }

    pub fn grayscale(width: u16, height: u16) -> Self {
        Self::new(width, height, 16, 0)
    }

    fn new(width: u16, height: u16, color_depth: u16, transparent_index: u8) -> Self {
        Self {
            width,
            height,
            color_depth,
            transparent_index,
            frames: Vec::new(),
        }
    }

    pub fn frame(mut self, frame: FrameBuilder) -> Self {
        self.frames.push(frame.build());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let body: Vec<u8> = self.frames.concat();
        let mut out = Vec::with_capacity(128 + body.len());
        out.extend_from_slice(&(128 + body.len() as u32).to_le_bytes());
        out.extend_from_slice(&FILE_MAGIC.to_le_bytes());
        out.extend_from_slice(&(self.frames.len() as u16).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.color_depth.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // flags
        out.extend_from_slice(&100u16.to_le_bytes()); // speed
        out.extend_from_slice(&[0; 8]);
        out.push(self.transparent_index);
        out.extend_from_slice(&[0; 3]);
        out.extend_from_slice(&0u16.to_le_bytes()); // color count
        out.extend_from_slice(&[0; 94]);
        out.extend_from_slice(&body);
        out
    }
}

/// One frame: a duration plus its chunks.
pub struct FrameBuilder {
    duration: u16,
    chunks: Vec<Vec<u8>>,
    trailing: Vec<u8>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            duration: 100,
            chunks: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn duration(mut self, ms: u16) -> Self {
        self.duration = ms;
        self
    }

    /// A well-formed chunk with the size field filled in.
    pub fn chunk(mut self, chunk_type: u16, payload: &[u8]) -> Self {
        let mut chunk = Vec::with_capacity(6 + payload.len());
        chunk.extend_from_slice(&(6 + payload.len() as u32).to_le_bytes());
        chunk.extend_from_slice(&chunk_type.to_le_bytes());
        chunk.extend_from_slice(payload);
        self.chunks.push(chunk);
        self
    }

    /// Arbitrary bytes counted as one chunk, for malformed-input tests.
    pub fn raw_chunk(mut self, bytes: &[u8]) -> Self {
        self.chunks.push(bytes.to_vec());
        self
    }

    /// Padding inside the declared frame size but after the last chunk.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let chunk_count = self.chunks.len() as u16;
        let body: Vec<u8> = self.chunks.concat();
        let size = 16 + body.len() + self.trailing.len();
        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&(size as u32).to_le_bytes());
        out.extend_from_slice(&FRAME_MAGIC.to_le_bytes());
        out.extend_from_slice(&chunk_count.to_le_bytes());
        out.extend_from_slice(&self.duration.to_le_bytes());
        out.extend_from_slice(&[0; 6]);
        out.extend_from_slice(&body);
        out.extend_from_slice(&self.trailing);
        out
    }
}

pub fn layer_payload(flags: u16, blend_mode: u16, opacity: u8, name: &str) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&flags.to_le_bytes());
    payload.extend_from_slice(&0u16.to_le_bytes()); // kind: normal
    payload.extend_from_slice(&0u16.to_le_bytes()); // child level
    payload.extend_from_slice(&0u16.to_le_bytes()); // default width, ignored
    payload.extend_from_slice(&0u16.to_le_bytes()); // default height, ignored
    payload.extend_from_slice(&blend_mode.to_le_bytes());
    payload.push(opacity);
    payload.extend_from_slice(&[0; 3]);
    payload.extend_from_slice(&(name.len() as u16).to_le_bytes());
    payload.extend_from_slice(name.as_bytes());
    payload
}

/// A visible, fully opaque normal-mode layer.
pub fn plain_layer(name: &str) -> Vec<u8> {
    layer_payload(0x1, 0, 255, name)
}

fn cel_header(layer: u16, x: i16, y: i16, opacity: u8, cel_type: u16) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&layer.to_le_bytes());
    payload.extend_from_slice(&x.to_le_bytes());
    payload.extend_from_slice(&y.to_le_bytes());
    payload.push(opacity);
    payload.extend_from_slice(&cel_type.to_le_bytes());
    payload.extend_from_slice(&[0; 7]);
    payload
}

pub fn raw_cel_payload(
    layer: u16,
    x: i16,
    y: i16,
    opacity: u8,
    width: u16,
    height: u16,
    pixels: &[u8],
) -> Vec<u8> {
    let mut payload = cel_header(layer, x, y, opacity, 0);
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.extend_from_slice(pixels);
    payload
}

pub fn linked_cel_payload(layer: u16, frame: u16) -> Vec<u8> {
    let mut payload = cel_header(layer, 0, 0, 255, 1);
    payload.extend_from_slice(&frame.to_le_bytes());
    payload
}

pub fn compressed_cel_payload(
    layer: u16,
    x: i16,
    y: i16,
    opacity: u8,
    width: u16,
    height: u16,
    pixels: &[u8],
) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(pixels).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut payload = cel_header(layer, x, y, opacity, 2);
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.extend_from_slice(&compressed);
    payload
}

/// Modern palette payload rewriting `colors.len()` entries from `first`.
pub fn palette_payload(new_size: u32, first: u32, colors: &[[u8; 4]]) -> Vec<u8> {
    let last = first + colors.len() as u32 - 1;
    let mut payload = Vec::new();
    payload.extend_from_slice(&new_size.to_le_bytes());
    payload.extend_from_slice(&first.to_le_bytes());
    payload.extend_from_slice(&last.to_le_bytes());
    payload.extend_from_slice(&[0; 8]);
    for color in colors {
        payload.extend_from_slice(&0u16.to_le_bytes()); // entry flags
        payload.extend_from_slice(color);
    }
    payload
}

/// Legacy palette payload: packets of (first index, RGB runs).
pub fn old_palette_payload(packets: &[(u8, Vec<[u8; 3]>)]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&(packets.len() as u16).to_le_bytes());
    for (first, colors) in packets {
        payload.push(*first);
        // 0 encodes a full run of 256 colors
        payload.push(if colors.len() == 256 {
            0
        } else {
            colors.len() as u8
        });
        for color in colors {
            payload.extend_from_slice(color);
        }
    }
    payload
}
