use unicode_segmentation::UnicodeSegmentation;
use vt_render::{pad_to_width, visual_width, Align};

use crate::column::{Column, ColumnWidth};

/// Resolve every column's `width` against `total_width`. `Fixed` columns
/// keep their declared width; `Fit` columns split whatever is left (total
/// minus fixed columns minus one separator per gap) proportionally to
/// their weight.
pub fn resolve_widths<T>(columns: &[Column<T>], total_width: usize, separator_width: usize) -> Vec<usize> {
    let fixed_total: usize = columns
        .iter()
        .filter_map(|c| match c.width {
            ColumnWidth::Fixed(w) => Some(w as usize),
            ColumnWidth::Fit(_) => None,
        })
        .sum();
    let fit_weight_total: u32 = columns
        .iter()
        .filter_map(|c| match c.width {
            ColumnWidth::Fit(w) => Some(w as u32),
            ColumnWidth::Fixed(_) => None,
        })
        .sum();
    let separators = separator_width.saturating_mul(columns.len().saturating_sub(1));
    let remaining = total_width.saturating_sub(fixed_total + separators);

    columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w as usize,
            ColumnWidth::Fit(weight) if fit_weight_total > 0 => {
                (remaining * weight as usize) / fit_weight_total as usize
            }
            ColumnWidth::Fit(_) => 0,
        })
        .collect()
}

/// Pad or truncate `text` to exactly `width` visual columns, the way a
/// table cell must: truncation appends a single ellipsis glyph, and never
/// happens unless `text` actually overflows.
pub fn fit_to_width(text: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return String::new();
    }
    if visual_width(text) <= width {
        return pad_to_width(text, width, align);
    }
    let budget = width.saturating_sub(1);
    let mut truncated = String::new();
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let grapheme_width = visual_width(grapheme);
        if used + grapheme_width > budget {
            break;
        }
        truncated.push_str(grapheme);
        used += grapheme_width;
    }
    truncated.push('…');
    pad_to_width(&truncated, width, align)
}

/// [`fit_to_width`], plus `padding` blank columns held out on each side of
/// the content — the column's resolved width never grows to accommodate it,
/// so padding shrinks the space available for text instead of adding to it.
pub fn fit_cell(text: &str, width: usize, align: Align, padding: usize) -> String {
    if padding == 0 {
        return fit_to_width(text, width, align);
    }
    let gutter = " ".repeat(padding);
    let inner_width = width.saturating_sub(padding * 2);
    let content = fit_to_width(text, inner_width, align);
    format!("{gutter}{content}{gutter}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(width: ColumnWidth) -> Column<String> {
        Column::new("t", width, std::sync::Arc::new(|s: &String| s.clone()))
    }

    #[test]
    fn fixed_and_fit_columns_split_remaining_width() {
        let columns = vec![col(ColumnWidth::Fixed(10)), col(ColumnWidth::Fit(1)), col(ColumnWidth::Fit(3))];
        let widths = resolve_widths(&columns, 50, 1);
        // 50 - 10 fixed - 2 separators = 38 remaining, split 1:3 -> 9:28 (floor)
        assert_eq!(widths[0], 10);
        assert_eq!(widths[1] + widths[2], 37); // floor division drops a column of slack
    }

    #[test]
    fn short_text_is_unchanged_but_padded() {
        assert_eq!(fit_to_width("hi", 5, Align::Left), "hi   ");
    }

    #[test]
    fn long_text_truncates_with_ellipsis_at_exact_width() {
        let fitted = fit_to_width("a very long cell value", 10, Align::Left);
        assert_eq!(visual_width(&fitted), 10);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn exact_width_text_is_returned_unchanged() {
        assert_eq!(fit_to_width("exact", 5, Align::Left), "exact");
    }

    #[test]
    fn padding_is_held_out_of_the_content_budget() {
        let cell = fit_cell("hi", 8, Align::Left, 2);
        assert_eq!(cell, "  hi    ");
        assert_eq!(visual_width(&cell), 8);
    }

    #[test]
    fn padding_shrinks_truncation_budget_accordingly() {
        let cell = fit_cell("a very long value", 8, Align::Left, 1);
        assert_eq!(visual_width(&cell), 8);
        assert!(cell.starts_with(' '));
        assert!(cell.ends_with(' '));
    }
}
