use crate::component::{BackgroundTarget, ComponentKind, PartKind, RenderConfig};
use crate::context::{pad_to_width, visual_width, RenderContext};
use crate::wrap::wrap;

/// Assemble one item into one or more physical lines (more than one only
/// when content wrapping is enabled and the content overflows `max_width`).
/// Continuation lines are indented to match the visual width of the
/// cursor/pre-spacing/enumerator prefix on the first line.
pub fn render_row<T: ToString>(
    config: &RenderConfig<T>,
    item: &T,
    absolute_index: usize,
    ctx: &RenderContext,
) -> Vec<String> {
    let active = |k: ComponentKind| config.order.contains(&k);

    let cursor = if active(ComponentKind::Cursor) && config.cursor.enabled {
        if ctx.is_cursor {
            config.cursor.cursor_indicator.clone()
        } else {
            config.cursor.normal_spacing.clone()
        }
    } else {
        String::new()
    };

    let pre_spacing = if active(ComponentKind::PreSpacing) && config.pre_spacing.enabled {
        config.pre_spacing.text.clone()
    } else {
        String::new()
    };

    let enumerator = if active(ComponentKind::Enumerator) && config.enumerator.enabled {
        let raw = (config.enumerator.formatter)(item, absolute_index, ctx);
        pad_to_width(&raw, config.enumerator.max_width, config.enumerator.align)
    } else {
        String::new()
    };

    let prefix_width = visual_width(&cursor) + visual_width(&pre_spacing) + visual_width(&enumerator);

    let content = if active(ComponentKind::Content) && config.content.enabled {
        if ctx.loading {
            config.content.loading_text.clone()
        } else if ctx.error.is_some() {
            config.content.error_text.clone()
        } else if let Some(formatter) = &config.content.formatter {
            formatter(item, absolute_index, ctx)
        } else {
            item.to_string()
        }
    } else {
        String::new()
    };

    let post_spacing = if active(ComponentKind::PostSpacing) && config.post_spacing.enabled {
        config.post_spacing.text.clone()
    } else {
        String::new()
    };

    let background_active = config.background.enabled && active(ComponentKind::Background);
    let content_lines = match config.content.max_width {
        Some(w) if w > 0 => wrap(&content, w),
        _ => vec![content],
    };

    let mut lines = Vec::with_capacity(content_lines.len().max(1));
    for (i, content_line) in content_lines.iter().enumerate() {
        if i == 0 {
            lines.push(assemble_first_line(
                config,
                background_active,
                &cursor,
                &pre_spacing,
                &enumerator,
                content_line,
                &post_spacing,
                ctx,
            ));
        } else {
            let indent = " ".repeat(prefix_width);
            let styled_content = if background_active
                && matches!(
                    config.background.target,
                    BackgroundTarget::WholeLine | BackgroundTarget::ContentOnly
                ) {
                (config.background.formatter)(content_line, ctx)
            } else {
                content_line.clone()
            };
            lines.push(format!("{indent}{styled_content}"));
        }
    }
    if lines.is_empty() {
        lines.push(format!("{cursor}{pre_spacing}{enumerator}"));
    }
    lines
}

#[allow(clippy::too_many_arguments)]
fn assemble_first_line<T>(
    config: &RenderConfig<T>,
    background_active: bool,
    cursor: &str,
    pre_spacing: &str,
    enumerator: &str,
    content: &str,
    post_spacing: &str,
    ctx: &RenderContext,
) -> String {
    if !background_active {
        return format!("{cursor}{pre_spacing}{enumerator}{content}{post_spacing}");
    }
    match &config.background.target {
        BackgroundTarget::WholeLine => {
            let assembled = format!("{cursor}{pre_spacing}{enumerator}{content}{post_spacing}");
            (config.background.formatter)(&assembled, ctx)
        }
        BackgroundTarget::ContentOnly => {
            let styled = (config.background.formatter)(content, ctx);
            format!("{cursor}{pre_spacing}{enumerator}{styled}{post_spacing}")
        }
        BackgroundTarget::CursorOnly => {
            let styled = (config.background.formatter)(cursor, ctx);
            format!("{styled}{pre_spacing}{enumerator}{content}{post_spacing}")
        }
        BackgroundTarget::Subset(parts) => {
            let apply = |part: PartKind, fragment: &str| -> String {
                if parts.contains(&part) {
                    (config.background.formatter)(fragment, ctx)
                } else {
                    fragment.to_string()
                }
            };
            format!(
                "{}{}{}{}{}",
                apply(PartKind::Cursor, cursor),
                apply(PartKind::PreSpacing, pre_spacing),
                apply(PartKind::Enumerator, enumerator),
                apply(PartKind::Content, content),
                apply(PartKind::PostSpacing, post_spacing),
            )
        }
    }
}
