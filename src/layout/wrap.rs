use super::metrics::{width_of_text, FontMetrics};
use crate::units::Pt;

/// Strings that overshoot the line by at most this many characters are kept on one line
const WRAP_TOLERANCE: usize = 4;

/// Wraps `text` into lines that fit `width`, estimating how many characters fit on a line
/// from the text's average character width.
///
/// The line length is derived once, from the rounded average character width of the whole
/// string, and the text is then word-wrapped at that many characters. Lines are not measured
/// again after wrapping, so with fonts whose glyph widths vary a lot a line can still slightly
/// overflow `width`.
///
/// Returns an empty list for empty text, and also when the average character width rounds to
/// zero (the font cannot meaningfully measure the text); the text is dropped in that case.
pub fn wrap_text(text: &str, width: Pt, font: &dyn FontMetrics, size: Pt) -> Vec<String> {
    let char_count = text.chars().count();
    if char_count == 0 {
        return Vec::new();
    }

    let length = width_of_text(text, font, size);
    let average = (length / char_count as f32).round();
    if average.0 <= 0.0 {
        log::warn!(
            "average character width of {text:?} at {size}pt is zero, dropping the text"
        );
        return Vec::new();
    }

    // text that already fits never needs wrapping
    if length <= width && !text.contains('\n') {
        return vec![text.to_string()];
    }

    let mut chars_per_line = (width / average).round().0.max(0.0) as usize;
    if char_count.saturating_sub(chars_per_line) <= WRAP_TOLERANCE {
        chars_per_line = char_count;
    }

    word_wrap(text, chars_per_line)
}

/// Greedy word wrap at `width` characters. Breaks on spaces where possible (the space at the
/// break is dropped), honours embedded newlines, and hard-breaks words longer than a line.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;
        let mut started = false;

        for word in paragraph.split(' ') {
            let mut word = word;
            let mut word_len = word.chars().count();

            if started && line_len + 1 + word_len <= width {
                line.push(' ');
                line.push_str(word);
                line_len += 1 + word_len;
                continue;
            }

            if started {
                lines.push(std::mem::take(&mut line));
            }

            while word_len > width {
                let split = word
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
                word_len -= width;
            }

            line.push_str(word);
            line_len = word_len;
            started = true;
        }

        lines.push(line);
    }

    lines
}
