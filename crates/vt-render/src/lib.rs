//! Row render pipeline (C10): an ordered, toggleable chain of components —
//! cursor, pre-spacing, enumerator, content, post-spacing, background — that
//! together assemble one visual line per item.
//!
//! Every callback here is a pure function over its inputs (`RenderContext`
//! plus, for enumerator/content, the item and its absolute index); none of
//! them may mutate state the core can observe.

mod component;
mod context;
mod enumerator;
mod pipeline;
mod wrap;

pub use component::{
    BackgroundComponent, BackgroundFn, BackgroundTarget, ComponentKind, ContentComponent,
    ContentFn, CursorComponent, EnumeratorComponent, PartKind, RenderConfig, SpacingComponent,
};
pub use context::{pad_to_width, visual_width, Align, RenderContext};
pub use enumerator::{
    alphabetical, arabic, arrow, bullet, checkbox, conditional, dash, roman, EnumeratorFn,
    Predicate,
};
pub use pipeline::render_row;
pub use wrap::wrap;
