//! Concrete widget kinds.
//!
//! Every kind here is a thin leaf over the lifecycle core: a behavior type
//! implementing the fixed hook set, a `Copy` wrapper carrying the widget id,
//! and the kind's own operations expressed through the display. None of them
//! alter the lifecycle orchestration order.

pub mod button;
pub mod composite;
pub mod scrollbar;
pub mod text;
pub mod toolbar;
pub mod tree;

pub use button::Button;
pub use composite::Composite;
pub use scrollbar::ScrollBar;
pub use text::Text;
pub use toolbar::{ToolBar, ToolItem};
pub use tree::{Tree, TreeItem};

pub(crate) use button::ButtonState;
pub(crate) use composite::CompositeState;
pub(crate) use scrollbar::ScrollBarState;
pub(crate) use text::TextState;
pub(crate) use toolbar::{ToolBarState, ToolItemState};
pub(crate) use tree::{TreeItemState, TreeState};
