use std::sync::Arc;

use crate::context::{Align, RenderContext};
use crate::enumerator::EnumeratorFn;

/// A fragment of the row, identified for background-targeting and ordering
/// purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Cursor,
    PreSpacing,
    Enumerator,
    Content,
    PostSpacing,
}

/// Order in which component kinds are assembled into one line. Defaults to
/// `[Cursor, Enumerator, Content]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Cursor,
    PreSpacing,
    Enumerator,
    Content,
    PostSpacing,
    Background,
}

#[derive(Debug, Clone)]
pub struct CursorComponent {
    pub enabled: bool,
    pub cursor_indicator: String,
    pub normal_spacing: String,
}

impl Default for CursorComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            cursor_indicator: "> ".to_string(),
            normal_spacing: "  ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpacingComponent {
    pub enabled: bool,
    pub text: String,
}

/// `(formatter) -> fragment`, aligned to `max_width` (`0` = natural width).
#[derive(Clone)]
pub struct EnumeratorComponent<T> {
    pub enabled: bool,
    pub max_width: usize,
    pub align: Align,
    pub formatter: EnumeratorFn<T>,
}

impl<T: 'static> Default for EnumeratorComponent<T> {
    fn default() -> Self {
        Self {
            enabled: true,
            max_width: 0,
            align: Align::Left,
            formatter: crate::enumerator::arabic(),
        }
    }
}

/// `(item, absolute_index, render_context) -> fragment`, same shape as
/// [`EnumeratorFn`] plus the threshold flags content formatters additionally
/// receive.
pub type ContentFn<T> = Arc<dyn Fn(&T, usize, &RenderContext) -> String + Send + Sync>;

#[derive(Clone)]
pub struct ContentComponent<T> {
    pub enabled: bool,
    /// `None` uses the default conversion (`T: ToString`).
    pub formatter: Option<ContentFn<T>>,
    /// Wrap content at this many visual columns; `None` disables wrapping.
    pub max_width: Option<usize>,
    pub loading_text: String,
    pub error_text: String,
}

impl<T> Default for ContentComponent<T> {
    fn default() -> Self {
        Self {
            enabled: true,
            formatter: None,
            max_width: None,
            loading_text: "…".to_string(),
            error_text: "!".to_string(),
        }
    }
}

/// `(assembled_fragment, render_context) -> styled_fragment`.
pub type BackgroundFn = Arc<dyn Fn(&str, &RenderContext) -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundTarget {
    WholeLine,
    ContentOnly,
    CursorOnly,
    /// A user-nominated subset of fragments; each listed part gets the style
    /// applied individually before the line is reassembled.
    Subset(Vec<PartKind>),
}

#[derive(Clone)]
pub struct BackgroundComponent {
    pub enabled: bool,
    pub target: BackgroundTarget,
    pub formatter: BackgroundFn,
}

impl Default for BackgroundComponent {
    fn default() -> Self {
        Self {
            enabled: false,
            target: BackgroundTarget::WholeLine,
            formatter: Arc::new(|fragment, _ctx| fragment.to_string()),
        }
    }
}

/// Ordered, toggleable component chain that together produce one visual
/// line. Replaced atomically by the list core on a render-config message.
#[derive(Clone)]
pub struct RenderConfig<T> {
    pub order: Vec<ComponentKind>,
    pub cursor: CursorComponent,
    pub pre_spacing: SpacingComponent,
    pub enumerator: EnumeratorComponent<T>,
    pub content: ContentComponent<T>,
    pub post_spacing: SpacingComponent,
    pub background: BackgroundComponent,
    /// Shown in place of the row pipeline entirely when the list's `total`
    /// is zero. Defaults to the empty string, matching prior behavior.
    pub empty_state: String,
}

impl<T: 'static> Default for RenderConfig<T> {
    fn default() -> Self {
        Self {
            order: vec![ComponentKind::Cursor, ComponentKind::Enumerator, ComponentKind::Content],
            cursor: CursorComponent::default(),
            pre_spacing: SpacingComponent::default(),
            enumerator: EnumeratorComponent::default(),
            content: ContentComponent::default(),
            post_spacing: SpacingComponent::default(),
            background: BackgroundComponent::default(),
            empty_state: String::new(),
        }
    }
}
