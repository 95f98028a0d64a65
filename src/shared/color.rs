//! Opake 32-Bit-Farben im Format `0xRRGGBBAA`.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe, gepackt als `0xRRGGBBAA`.
///
/// In der TOML-Datei als Ganzzahl gespeichert (z.B. `0x353535FF` = `892679679`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Rot-Kanal
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Grün-Kanal
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blau-Kanal
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha-Kanal
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Kanäle als Bytes `[r, g, b, a]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Normalisierte Kanäle `[r, g, b, a]` in [0, 1] für Shader-Uniforms.
    pub fn to_f32_array(self) -> [f32; 4] {
        self.to_bytes().map(|c| c as f32 / 255.0)
    }
}
