use thiserror::Error;

use crate::binary::blend_mode::BlendMode;
use crate::binary::color_depth::ColorDepth;
use crate::color::Color;
use crate::document::{Cel, Document};

/// Errors of a single render call. None of them invalidate the document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("frame index out of range: {0}")]
    FrameIndexOutOfRange(usize),
    #[error("target buffer too small")]
    TargetBufferTooSmall,
    #[error("unsupported color depth")]
    UnsupportedColorDepth,
}

/// Composite one frame into a caller-owned RGBA8 buffer.
///
/// The canvas is placed at `(dest_x, dest_y)` inside the
/// `dest_width` x `dest_height` destination rectangle; pixels outside either
/// rectangle are left untouched. Layers paint back to front in declaration
/// order, each resolved through the palette (indexed mode) or read directly
/// (truecolor), scaled by the combined layer and cel opacity, and blended
/// with the layer's blend mode under the source-over alpha rule.
pub fn render(
    doc: &Document,
    frame_index: usize,
    dest: &mut [u8],
    dest_width: usize,
    dest_height: usize,
    dest_x: i32,
    dest_y: i32,
) -> Result<(), RenderError> {
    let frame = doc
        .frames
        .get(frame_index)
        .ok_or(RenderError::FrameIndexOutOfRange(frame_index))?;
    if dest.len() < dest_width * dest_height * 4 {
        return Err(RenderError::TargetBufferTooSmall);
    }
    match doc.header.color_depth {
        ColorDepth::Indexed | ColorDepth::Rgba => {}
        ColorDepth::Grayscale | ColorDepth::Unknown(_) => {
            return Err(RenderError::UnsupportedColorDepth)
        }
    }

    let canvas_width = i32::from(doc.header.width);
    let canvas_height = i32::from(doc.header.height);

    for (layer_index, layer) in doc.layers.iter().enumerate() {
        if layer.opacity == 0 || !layer.is_visible() {
            continue;
        }
        let Some(cel) = frame.cel(layer_index) else {
            continue;
        };
        if cel.pixels.is_empty() {
            // linked cels are not resolved and draw nothing
            continue;
        }
        let opacity = (u16::from(layer.opacity) * u16::from(cel.opacity) / 255) as u8;

        for y in 0..canvas_height {
            let dest_row = y + dest_y;
            if dest_row < 0 {
                continue;
            }
            if dest_row >= dest_height as i32 {
                break;
            }
            let source_row = y - i32::from(cel.y);
            if source_row < 0 || source_row >= i32::from(cel.height) {
                continue;
            }

            for x in 0..canvas_width {
                let dest_col = x + dest_x;
                if dest_col < 0 {
                    continue;
                }
                if dest_col >= dest_width as i32 {
                    break;
                }
                let source_col = x - i32::from(cel.x);
                if source_col < 0 || source_col >= i32::from(cel.width) {
                    continue;
                }

                let Some(source) = resolve_pixel(doc, cel, source_col as usize, source_row as usize)
                else {
                    continue;
                };
                let source = apply_opacity(source, opacity);

                let offset = (dest_row as usize * dest_width + dest_col as usize) * 4;
                let pixel = &mut dest[offset..offset + 4];
                // The first painted layer, and any pixel nothing has touched
                // yet, takes the source color directly without blend math.
                if layer_index == 0 || *pixel == [0; 4] {
                    pixel.copy_from_slice(&source.rgba8());
                } else if source.a8 != 0 {
                    let dest_color = Color::from_rgba8(pixel[0], pixel[1], pixel[2], pixel[3]);
                    let combined = combine(source, dest_color, layer.blend_mode);
                    pixel.copy_from_slice(&combined.rgba8());
                }
            }
        }
    }
    Ok(())
}

/// Render a whole frame at canvas size into a fresh [`image::RgbaImage`].
pub fn frame_image(doc: &Document, frame_index: usize) -> Result<image::RgbaImage, RenderError> {
    let width = u32::from(doc.header.width);
    let height = u32::from(doc.header.height);
    let mut target = vec![0; width as usize * height as usize * 4];
    render(
        doc,
        frame_index,
        &mut target,
        width as usize,
        height as usize,
        0,
        0,
    )?;
    image::RgbaImage::from_raw(width, height, target).ok_or(RenderError::TargetBufferTooSmall)
}

/// Resolve one source pixel from the cel's stored block. `None` when the
/// pixel buffer is too short for the requested coordinate.
fn resolve_pixel(doc: &Document, cel: &Cel, x: usize, y: usize) -> Option<Color> {
    let index = y * cel.width as usize + x;
    match doc.header.color_depth {
        ColorDepth::Indexed => {
            let palette_index = *cel.pixels.get(index)?;
            if palette_index == doc.header.transparent_index {
                Some(Color::TRANSPARENT)
            } else {
                // out-of-range indices resolve transparent instead of
                // failing the whole render
                Some(
                    doc.palette
                        .get(palette_index as usize)
                        .unwrap_or(Color::TRANSPARENT),
                )
            }
        }
        ColorDepth::Rgba => {
            let bytes = cel.pixels.get(index * 4..index * 4 + 4)?;
            Some(Color::from_rgba8(bytes[0], bytes[1], bytes[2], bytes[3]))
        }
        ColorDepth::Grayscale | ColorDepth::Unknown(_) => None,
    }
}

fn apply_opacity(color: Color, opacity: u8) -> Color {
    match opacity {
        0 => Color::TRANSPARENT,
        u8::MAX => color,
        _ => color.scale_alpha(f32::from(opacity) / 255.0),
    }
}

/// Source-over compositing with a per-channel blend formula.
fn combine(source: Color, dest: Color, blend_mode: BlendMode) -> Color {
    let out_alpha = source.a + dest.a * (1.0 - source.a);
    if out_alpha == 0.0 {
        return Color::TRANSPARENT;
    }
    let channel = |src: f32, dst: f32| {
        (blend_channel(src, dst, blend_mode) * source.a + dst * dest.a * (1.0 - source.a))
            / out_alpha
    };
    Color::from_rgba(
        channel(source.r, dest.r),
        channel(source.g, dest.g),
        channel(source.b, dest.b),
        out_alpha,
    )
}

fn blend_channel(src: f32, dest: f32, blend_mode: BlendMode) -> f32 {
    match blend_mode {
        BlendMode::Multiply => src * dest,
        BlendMode::Screen => 1.0 - (1.0 - src) * (1.0 - dest),
        BlendMode::Overlay => {
            if dest < 0.5 {
                2.0 * src * dest
            } else {
                1.0 - 2.0 * (1.0 - src) * (1.0 - dest)
            }
        }
        BlendMode::Darken => src.min(dest),
        BlendMode::Lighten => src.max(dest),
        BlendMode::ColorDodge => {
            if src == 1.0 {
                1.0
            } else {
                (dest / (1.0 - src)).min(1.0)
            }
        }
        BlendMode::ColorBurn => {
            if src == 0.0 {
                0.0
            } else {
                1.0 - ((1.0 - dest) / src).min(1.0)
            }
        }
        BlendMode::HardLight => {
            if src < 0.5 {
                2.0 * src * dest
            } else {
                1.0 - 2.0 * (1.0 - src) * (1.0 - dest)
            }
        }
        BlendMode::SoftLight => (1.0 - 2.0 * src) * dest * dest + 2.0 * dest * src,
        BlendMode::Difference => (dest - src).abs(),
        BlendMode::Exclusion => 0.5 - 2.0 * (dest - 0.5) * (src - 0.5),
        // Hue/Saturation/Color/Luminosity are not implemented and behave
        // like Normal
        BlendMode::Normal
        | BlendMode::Hue
        | BlendMode::Saturation
        | BlendMode::Color
        | BlendMode::Luminosity => src,
    }
}
