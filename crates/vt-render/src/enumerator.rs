use std::sync::Arc;

use crate::context::RenderContext;

/// `(item, absolute_index, render_context) -> fragment`.
pub type EnumeratorFn<T> = Arc<dyn Fn(&T, usize, &RenderContext) -> String + Send + Sync>;

/// `(item) -> bool`, used by [`conditional`] to pick a branch.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub fn bullet<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, _index, _ctx| "• ".to_string())
}

pub fn dash<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, _index, _ctx| "- ".to_string())
}

pub fn arrow<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, _index, ctx| if ctx.is_cursor { "> " } else { "  " }.to_string())
}

pub fn arabic<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, index, _ctx| format!("{}. ", index + 1))
}

pub fn alphabetical<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, index, _ctx| format!("{}. ", to_alphabetical(index)))
}

pub fn roman<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, index, _ctx| format!("{}. ", to_roman(index + 1)))
}

/// Renders `[x]`/`[ ]` based on [`RenderContext::is_selected`].
pub fn checkbox<T>() -> EnumeratorFn<T> {
    Arc::new(|_item, _index, ctx| {
        if ctx.is_selected {
            "[x] ".to_string()
        } else {
            "[ ] ".to_string()
        }
    })
}

/// Composes other enumerators keyed by predicates on the item; the first
/// matching predicate wins, falling back to `default` when none match.
pub fn conditional<T: 'static>(
    branches: Vec<(Predicate<T>, EnumeratorFn<T>)>,
    default: EnumeratorFn<T>,
) -> EnumeratorFn<T> {
    Arc::new(move |item, index, ctx| {
        for (predicate, f) in &branches {
            if predicate(item) {
                return f(item, index, ctx);
            }
        }
        default(item, index, ctx)
    })
}

fn to_alphabetical(index: usize) -> String {
    // 0 -> a, 25 -> z, 26 -> aa, matching a base-26 bijective numeral system.
    let mut n = index;
    let mut letters = Vec::new();
    loop {
        letters.push((b'a' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

fn to_roman(mut n: usize) -> String {
    const TABLE: &[(usize, &str)] = &[
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut out = String::new();
    for &(value, symbol) in TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetical_wraps_after_z() {
        assert_eq!(to_alphabetical(0), "a");
        assert_eq!(to_alphabetical(25), "z");
        assert_eq!(to_alphabetical(26), "aa");
        assert_eq!(to_alphabetical(27), "ab");
    }

    #[test]
    fn roman_basic_values() {
        assert_eq!(to_roman(1), "i");
        assert_eq!(to_roman(4), "iv");
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(1994), "mcmxciv");
    }

    #[test]
    fn checkbox_reflects_selection() {
        let f = checkbox::<u32>();
        let mut ctx = RenderContext::default();
        assert_eq!(f(&0, 0, &ctx), "[ ] ");
        ctx.is_selected = true;
        assert_eq!(f(&0, 0, &ctx), "[x] ");
    }

    #[test]
    fn conditional_falls_through_to_default() {
        let is_even: Predicate<u32> = Arc::new(|item| item % 2 == 0);
        let f = conditional(
            vec![(is_even, bullet())],
            dash(),
        );
        let ctx = RenderContext::default();
        assert_eq!(f(&2, 0, &ctx), "• ");
        assert_eq!(f(&3, 0, &ctx), "- ");
    }
}
