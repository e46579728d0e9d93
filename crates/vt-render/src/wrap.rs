use crate::context::visual_width;
use unicode_segmentation::UnicodeSegmentation;

/// Greedily wrap `text` at word boundaries so no line exceeds `max_width`
/// visual columns. A single word wider than `max_width` is placed alone on
/// its own line rather than split mid-grapheme.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_word_bounds() {
        let word_width = visual_width(word);
        if current_width > 0 && current_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines.into_iter().map(|l| l.trim_end().to_string()).collect()
}
