//! Pure presentation core: turn a fetch result and a theme flag into a
//! display state plus the layout tree the host draws.
//!
//! Everything here is synchronous and deterministic. Identical inputs yield
//! byte-identical serialized output, which is what makes the snapshot tests
//! in `tests/select_snapshots.rs` meaningful.

pub mod layout;
pub mod select;
pub mod state;
pub mod theme;

pub use layout::{FontWeight, LayoutNode, Rgb};
pub use select::{Rendered, select};
pub use state::DisplayState;
pub use theme::Theme;
