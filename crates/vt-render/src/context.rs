/// Everything a formatter/enumerator/background callback is told about the
/// row it is rendering. Formatters are pure functions over these inputs; they
/// must never mutate state visible to the core.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub is_cursor: bool,
    pub is_selected: bool,
    pub is_top_threshold: bool,
    pub is_bottom_threshold: bool,
    pub loading: bool,
    pub disabled: bool,
    pub error: Option<String>,
}

/// Left/right alignment used when padding a fragment to a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Pad (or leave alone) `text` to at least `width` visual columns. `width ==
/// 0` means "no fixed width, use natural width".
pub fn pad_to_width(text: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return text.to_string();
    }
    let visual = unicode_width::UnicodeWidthStr::width(text);
    if visual >= width {
        return text.to_string();
    }
    let fill = " ".repeat(width - visual);
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

pub fn visual_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}
