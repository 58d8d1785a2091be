/// RGBA color carrying both the 8-bit channels as stored in the file and the
/// normalized float form the blending math works in.
///
/// The two representations are kept in sync by construction: the constructors
/// are the only places either form is derived, always from the same source
/// data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r8: u8,
    pub g8: u8,
    pub b8: u8,
    pub a8: u8,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r8: 0,
        g8: 0,
        b8: 0,
        a8: 0,
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn from_rgba8(r8: u8, g8: u8, b8: u8, a8: u8) -> Self {
        Self {
            r8,
            g8,
            b8,
            a8,
            r: f32::from(r8) / 255.0,
            g: f32::from(g8) / 255.0,
            b: f32::from(b8) / 255.0,
            a: f32::from(a8) / 255.0,
        }
    }

    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r8: (r * 255.0) as u8,
            g8: (g * 255.0) as u8,
            b8: (b * 255.0) as u8,
            a8: (a * 255.0) as u8,
            r,
            g,
            b,
            a,
        }
    }

    /// Scale the alpha channel, recomputing the 8-bit form from the scaled
    /// float rather than rounding it independently.
    pub fn scale_alpha(self, factor: f32) -> Self {
        let a = self.a * factor;
        Self {
            a,
            a8: (a * 255.0) as u8,
            ..self
        }
    }

    pub fn rgba8(&self) -> [u8; 4] {
        [self.r8, self.g8, self.b8, self.a8]
    }
}
