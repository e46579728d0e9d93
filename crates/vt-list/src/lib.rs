//! List core (C7): composes the viewport calculator, chunk cache,
//! bounding-area loader and row render pipeline behind a single
//! `update`/`view` pair, plus the selection coordinator (C6) and message
//! router (C11) that route every intent to the right sub-component.
//!
//! The list is the only crate in the workspace allowed to own all of
//! `vt-viewport`, `vt-cache`, `vt-loader` and `vt-render` at once; everything
//! below it stays a pure function over data it is handed.

mod item;
mod list;
mod message;

pub use item::{Item, SelectionSummary};
pub use list::List;
pub use message::Message;

pub use vt_protocol::{Command, DataRequest, FilterValue, SelectionOperation, SelectionReply, SortDirection};
pub use vt_viewport::{ViewportConfig, ViewportState};
