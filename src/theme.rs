use raylib::prelude::*;

pub const BACKGROUND_TOP: Color = Color { r: 0x0A, g: 0x1A, b: 0x2F, a: 255 };
pub const BACKGROUND_MID: Color = Color { r: 0x0F, g: 0x2D, b: 0x4A, a: 255 };
pub const BACKGROUND_BOTTOM: Color = Color { r: 0x16, g: 0x4B, b: 0x7A, a: 255 };
pub const ACCENT: Color = Color { r: 0x22, g: 0xD3, b: 0xEE, a: 255 };
pub const TEXT: Color = Color { r: 255, g: 255, b: 255, a: 255 };

/// `color` with its alpha replaced by `opacity` in `[0, 1]`.
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}
