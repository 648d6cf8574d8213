//! Page geometry, palette and text metrics shared by the whole pipeline.
//!
//! All layout coordinates are millimetres on an A4 portrait page with the
//! origin at the top-left corner; the drawing layer flips to PDF coordinates
//! at the last moment. Font sizes are points.

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

/// Left/right page margin and the cursor reset position on a fresh page.
pub const MARGIN: f32 = 15.0;

/// Vertical gap advanced after each drawn table.
pub const TABLE_GAP: f32 = 10.0;

/// Flowing tables stop this far above the page bottom to leave footer room.
pub const BOTTOM_MARGIN: f32 = 20.0;

/// Atomic blocks (hazard grids) break to a new page once the cursor passes
/// this distance from the page bottom.
pub const BLOCK_BREAK_MARGIN: f32 = 100.0;

/// Baseline of the per-page footer line.
pub const FOOTER_Y: f32 = PAGE_HEIGHT - 8.0;

/// Logo bounding box at the top-left margin.
pub const LOGO_MAX_WIDTH: f32 = 40.0;
pub const LOGO_MAX_HEIGHT: f32 = 20.0;

pub const PT_TO_MM: f32 = 0.352_778;

/// Padding inside table cells.
pub const CELL_PADDING: f32 = 2.0;

pub const BODY_FONT_SIZE: f32 = 9.0;
pub const HEADER_FONT_SIZE: f32 = 10.0;
pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// RGB in 0..=1, the range printpdf consumes directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32);

pub const WHITE: Color = Color(1.0, 1.0, 1.0);
pub const TEXT_GRAY: Color = Color(0.24, 0.24, 0.24);
pub const LABEL_FILL: Color = Color(0.94, 0.94, 0.94);
pub const ZEBRA_FILL: Color = Color(0.97, 0.97, 0.97);
pub const HEADER_FILL: Color = Color(0.16, 0.28, 0.42);
pub const BAND_FILL: Color = Color(0.85, 0.88, 0.92);
pub const BORDER_GRAY: Color = Color(0.75, 0.75, 0.75);
pub const PASS_GREEN: Color = Color(0.0, 0.5, 0.0);
pub const FAIL_RED: Color = Color(0.8, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Approximate Helvetica advance width. Half the em size is the standard
/// rough metric when real glyph widths are not loaded.
pub fn char_width_mm(font_size: f32) -> f32 {
    font_size * 0.5 * PT_TO_MM
}

pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * char_width_mm(font_size)
}

pub fn line_height_mm(font_size: f32) -> f32 {
    font_size * PT_TO_MM * 1.4
}

/// Greedy word wrap into lines no wider than `max_width` mm. Lines produced
/// by explicit newlines in the input are wrapped independently.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let max_chars = (max_width / char_width_mm(font_size)).floor().max(1.0) as usize;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.chars().count() <= max_chars {
            lines.push(paragraph.to_string());
            continue;
        }
        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let new_len = if current_len == 0 { word_len } else { current_len + 1 + word_len };
            if new_len <= max_chars {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = new_len;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if word_len > max_chars {
                    // Hard-break words wider than the column (long URLs,
                    // serial numbers) so they cannot overrun the cell.
                    let chars: Vec<char> = word.chars().collect();
                    let mut chunks = chars.chunks(max_chars).peekable();
                    while let Some(chunk) = chunks.next() {
                        let piece: String = chunk.iter().collect();
                        if chunks.peek().is_some() {
                            lines.push(piece);
                        } else {
                            current_len = chunk.len();
                            current = piece;
                        }
                    }
                } else {
                    current.push_str(word);
                    current_len = word_len;
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("hard hats", 80.0, 9.0), vec!["hard hats"]);
    }

    #[test]
    fn test_wrap_splits_long_text() {
        let lines = wrap_text("all operatives must wear hearing protection in zone two", 25.0, 9.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 9.0) <= 25.0 + char_width_mm(9.0));
        }
    }

    #[test]
    fn test_wrap_respects_explicit_newlines() {
        let lines = wrap_text("first\nsecond", 80.0, 9.0);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_wrap_of_empty_text_is_single_empty_line() {
        assert_eq!(wrap_text("", 80.0, 9.0), vec![""]);
    }

    #[test]
    fn test_wrap_hard_breaks_oversized_words() {
        let url = "https://example.com/uploads/equipment/breaker-registration-certificate.pdf";
        let max_chars = (25.0 / char_width_mm(9.0)).floor() as usize;
        let lines = wrap_text(url, 25.0, 9.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= max_chars);
        }
        // No character lost across the breaks.
        assert_eq!(lines.concat(), url);
    }

    #[test]
    fn test_wrap_continues_after_oversized_word() {
        let lines = wrap_text("see attached-certificate-ref-00981 for details", 25.0, 9.0);
        assert_eq!(
            lines,
            vec!["see", "attached-certif", "icate-ref-00981", "for details"]
        );
    }
}
