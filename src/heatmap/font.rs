//! Tiny 5x7 bitmap font for sensor labels.
//!
//! Covers digits, the letters of the sensor names and a little punctuation.
//! Anything else renders as blank space.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in pixels (cap height, sits on the baseline).
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal advance per character.
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

/// Row bitmaps, top to bottom; bit 4 is the leftmost column.
pub fn glyph(ch: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match ch.to_ascii_lowercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        't' => [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// Lit pixel offsets `(dx, dy)` of a glyph relative to its top-left corner.
pub fn lit_pixels(ch: char) -> impl Iterator<Item = (usize, usize)> {
    let rows = glyph(ch).unwrap_or([0; GLYPH_HEIGHT]);
    (0..GLYPH_HEIGHT).flat_map(move |dy| {
        (0..GLYPH_WIDTH).filter_map(move |dx| {
            if rows[dy] & (0x10 >> dx) != 0 {
                Some((dx, dy))
            } else {
                None
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorId;

    #[test]
    fn test_label_characters_have_glyphs() {
        for id in SensorId::ALL {
            for ch in id.name().chars() {
                assert!(glyph(ch).is_some(), "missing glyph for {:?}", ch);
            }
        }
        for ch in "0123456789:".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for ch in "0123456789abcehlort:-".chars() {
            let rows = glyph(ch).unwrap();
            assert!(rows.iter().all(|r| *r < (1 << GLYPH_WIDTH)));
        }
    }

    #[test]
    fn test_unknown_and_space_are_blank() {
        assert!(glyph(' ').is_none());
        assert_eq!(lit_pixels('?').count(), 0);
        assert_eq!(lit_pixels('-').count(), 5);
    }
}
