use std::path::Path;
use raylib::prelude::*;

const FONT_SIZE: i32 = 64; // Glyph atlas size, drawn scaled down

// --- Printable Latin-1: ASCII plus the accented letters Portuguese needs ---
pub fn latin1_glyphs() -> String {
    (0x20u32..=0x7E)
        .chain(0xA0..=0xFF)
        .filter_map(char::from_u32)
        .collect()
}

// --- Load the page font; None falls back to raylib's built-in ASCII font ---
pub fn load_font(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Option<Font> {
    let Some(filename) = path.to_str() else {
        log::warn!("Font path {:?} is not valid UTF-8, using the default font", path);
        return None;
    };
    if !path.is_file() {
        log::warn!("Font {:?} not found, accented text will not render", path);
        return None;
    }

    let glyphs = latin1_glyphs();
    match rl.load_font_ex(thread, filename, FONT_SIZE, Some(&glyphs)) {
        Ok(font) => {
            log::info!("Loaded font {:?}", path);
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to load font {:?}, accented text will not render: {}", path, e);
            None
        }
    }
}

/// Spacing raylib's own `DrawText` uses between glyphs.
pub fn glyph_spacing(size: f32) -> f32 {
    (size / 10.0).max(1.0)
}

// --- Draw UTF-8 text with the page font when there is one ---
pub fn draw_label(d: &mut RaylibDrawHandle, font: Option<&Font>, text: &str, x: f32, y: f32, size: f32, color: Color) {
    match font {
        Some(font) => d.draw_text_ex(font, text, Vector2::new(x, y), size, glyph_spacing(size), color),
        None => d.draw_text(text, x as i32, y as i32, size as i32, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn glyph_set_covers_portuguese_text() {
        let glyphs = latin1_glyphs();
        assert_eq!(glyphs.chars().count(), 95 + 96);
        for c in "Soluções História Informações bactérias Fórmula Econômico".chars() {
            assert!(glyphs.contains(c), "missing glyph {:?}", c);
        }
    }

    #[test]
    fn spacing_matches_default_text() {
        assert_eq!(glyph_spacing(20.0), 2.0);
        assert_eq!(glyph_spacing(44.0), 4.4);
        assert_eq!(glyph_spacing(5.0), 1.0);
    }
}
