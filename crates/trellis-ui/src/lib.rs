//! Trellis UI - retained-mode widget lifecycle and event dispatch core
//!
//! This crate provides the object-lifetime and notification protocol shared
//! by every widget kind:
//! - Widget construction, registration and deterministic teardown
//! - The disposal cascade through the parent/child hierarchy
//! - Owning-thread affinity guarded at every public operation
//! - Per-widget event tables for synchronous and deferred notification
//! - Batched, idempotent reskin requests
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use trellis_ui::{Composite, Display, EventKind, StyleFlags, Text};
//!
//! let mut display = Display::new();
//! let shell = Composite::root(&mut display, StyleFlags::NONE)?;
//! let field = Text::new(&mut display, shell, StyleFlags::SINGLE)?;
//!
//! display.add_listener(
//!     field.id(),
//!     EventKind::Modify,
//!     Rc::new(|_, event| println!("modified: {:?}", event)),
//! )?;
//!
//! field.set_text(&mut display, "hello")?;
//! shell.dispose(&mut display)?;
//! assert!(field.is_disposed(&display));
//! # Ok::<(), trellis_ui::Error>(())
//! ```

pub mod backend;
pub mod data;
pub mod display;
pub mod error;
pub mod event;
pub mod style;
pub mod widget;
pub mod widgets;

pub use backend::{HeadlessBackend, NativeHandle, Orientation, PlatformBackend};
pub use data::{DataSlot, DataValue};
pub use display::{Display, EventPoster, ReskinScope};
pub use error::{Error, Result};
pub use event::{Event, EventKind, EventTable, ListenerFn, ListenerId};
pub use style::StyleFlags;
pub use widget::{WidgetBehavior, WidgetClass, WidgetFlags, WidgetId};
pub use widgets::{Button, Composite, ScrollBar, Text, ToolBar, ToolItem, Tree, TreeItem};
