//! Decoder and compositor for Aseprite `.ase`/`.aseprite` files.
//!
//! [`decode`] walks an in-memory byte buffer in a single forward pass and
//! produces an owned [`Document`]: the file header, the frames with their
//! per-layer cels, the document-wide layer table and the palette. [`render`]
//! then composites the layers of one frame into a flat RGBA8 raster,
//! applying per-layer opacity and blend modes back to front.
//!
//! ```no_run
//! let data = std::fs::read("sprite.aseprite").unwrap();
//! let doc = asecomp::decode(&data).unwrap();
//! let image = asecomp::frame_image(&doc, 0).unwrap();
//! ```
//!
//! Reading the bytes from disk or the network is the caller's business; the
//! crate never does I/O of its own.

pub mod binary;
pub mod color;
pub mod document;
pub mod loader;
pub mod render;

pub use binary::blend_mode::BlendMode;
pub use binary::chunks::layer::{LayerFlags, LayerKind};
pub use binary::color_depth::ColorDepth;
pub use binary::header::Header;
pub use binary::palette::Palette;
pub use color::Color;
pub use document::{Cel, CelKind, Document, Frame, LayerInfo};
pub use loader::{decode, DecodeError};
pub use render::{frame_image, render, RenderError};
