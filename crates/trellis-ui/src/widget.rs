//! The base widget entity: lifecycle flags, class registry, behavior hooks
//! and the node stored in the display's arena.

use std::any::{Any, TypeId};

use bitflags::bitflags;
use trellis_core::alloc::Slot;

use crate::backend::{NativeHandle, PlatformBackend};
use crate::data::DataSlot;
use crate::error::Result;
use crate::event::{EventKind, EventTable};
use crate::style::StyleFlags;

bitflags! {
    /// Mutable lifecycle state of one widget.
    ///
    /// The three disposal facts are independent on purpose: a widget may be
    /// released without owning the native teardown (a parent-driven cascade
    /// leaves the actual destroy to the cascade root).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u32 {
        /// The reserved Dispose event has been sent.
        const DISPOSE_NOTIFIED = 1 << 0;

        /// Widget-owned references have been released.
        const RELEASED         = 1 << 1;

        /// Terminal: no operation except `is_disposed` may succeed.
        const DISPOSED         = 1 << 2;

        /// The data slot has been promoted to a key table.
        const KEYED_DATA       = 1 << 3;

        /// Already queued on the display's reskin worklist.
        const SKIN_QUEUED      = 1 << 4;

        /// Display hint: widget is hidden.
        const HIDDEN           = 1 << 5;

        /// Display hint: widget is disabled.
        const DISABLED         = 1 << 6;
    }
}

/// Identifier of a widget owned by a [`Display`](crate::display::Display).
///
/// Ids are `Copy` and generational: once the widget is disposed its slot
/// generation is bumped, so a stale id can never reach a live widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(Slot);

impl WidgetId {
    pub(crate) fn new(slot: Slot) -> Self {
        Self(slot)
    }

    pub(crate) fn slot(&self) -> Slot {
        self.0
    }
}

static_assertions::assert_eq_size!(WidgetId, Option<WidgetId>);

/// The closed set of concrete widget kinds.
///
/// The toolkit enumerates its leaf types; consumers compose widgets, they do
/// not extend the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetClass {
    Composite,
    Button,
    Text,
    Tree,
    TreeItem,
    ToolBar,
    ToolItem,
    ScrollBar,
}

impl WidgetClass {
    /// Returns whether widgets of this class own a child collection.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            WidgetClass::Composite
                | WidgetClass::Tree
                | WidgetClass::TreeItem
                | WidgetClass::ToolBar
        )
    }

    /// Returns whether a child of `child` class may be created under this
    /// class.
    pub fn accepts_child(&self, child: WidgetClass) -> bool {
        match self {
            WidgetClass::Composite => matches!(
                child,
                WidgetClass::Composite
                    | WidgetClass::Button
                    | WidgetClass::Text
                    | WidgetClass::Tree
                    | WidgetClass::ToolBar
            ),
            WidgetClass::Tree => child == WidgetClass::TreeItem,
            WidgetClass::TreeItem => child == WidgetClass::TreeItem,
            WidgetClass::ToolBar => child == WidgetClass::ToolItem,
            _ => false,
        }
    }

    /// Returns whether this class may own scrollbar satellites.
    pub fn is_scrollable(&self) -> bool {
        matches!(
            self,
            WidgetClass::Composite | WidgetClass::Tree | WidgetClass::Text
        )
    }

    /// The concrete behavior type this class enumerates. Construction
    /// verifies the supplied behavior against it.
    pub(crate) fn behavior_type_id(&self) -> TypeId {
        use crate::widgets;
        match self {
            WidgetClass::Composite => TypeId::of::<widgets::CompositeState>(),
            WidgetClass::Button => TypeId::of::<widgets::ButtonState>(),
            WidgetClass::Text => TypeId::of::<widgets::TextState>(),
            WidgetClass::Tree => TypeId::of::<widgets::TreeState>(),
            WidgetClass::TreeItem => TypeId::of::<widgets::TreeItemState>(),
            WidgetClass::ToolBar => TypeId::of::<widgets::ToolBarState>(),
            WidgetClass::ToolItem => TypeId::of::<widgets::ToolItemState>(),
            WidgetClass::ScrollBar => TypeId::of::<widgets::ScrollBarState>(),
        }
    }
}

pub(crate) mod sealed {
    /// The behavior hierarchy is closed; only in-crate widget kinds may
    /// implement [`WidgetBehavior`](super::WidgetBehavior).
    pub trait Sealed {}
}

/// Per-kind lifecycle hooks.
///
/// The disposal orchestrator calls these at fixed points; implementations
/// never alter the orchestration order. All hooks default to no-ops except
/// `class`, which identifies the concrete kind.
pub trait WidgetBehavior: sealed::Sealed + Any {
    /// The concrete class of this behavior.
    fn class(&self) -> WidgetClass;

    /// Adds or strips implied style bits before the style is stored
    /// immutably.
    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        style
    }

    /// Creates the native resource for this widget.
    fn create_handle(
        &mut self,
        backend: &mut dyn PlatformBackend,
        parent: Option<NativeHandle>,
        style: StyleFlags,
    ) -> Result<NativeHandle> {
        backend.create_handle(self.class(), parent, style)
    }

    /// Native notifications this kind wants hooked at construction.
    fn hooked_events(&self) -> &'static [EventKind] {
        &[]
    }

    /// Clears widget-owned references during release.
    fn release_widget(&mut self) {}

    /// Nulls out handle back-references when the native resource is torn
    /// down by an ancestor.
    fn release_handle(&mut self) {}

    /// Additional widgets a reskin of this widget's subtree must reach,
    /// beyond children and satellites.
    fn reskin_targets(&self) -> Vec<WidgetId> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// One widget as stored in the display's arena.
pub(crate) struct WidgetNode {
    pub(crate) class: WidgetClass,
    pub(crate) style: StyleFlags,
    pub(crate) flags: WidgetFlags,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    /// Widgets owned by this one outside the child collection
    /// (scrollbars and similar companions).
    pub(crate) satellites: Vec<WidgetId>,
    pub(crate) handle: Option<NativeHandle>,
    /// Lazily allocated on the first `add_listener` call.
    pub(crate) listeners: Option<EventTable>,
    pub(crate) data: DataSlot,
    pub(crate) behavior: Box<dyn WidgetBehavior>,
}

impl WidgetNode {
    pub(crate) fn new(
        class: WidgetClass,
        style: StyleFlags,
        parent: Option<WidgetId>,
        handle: NativeHandle,
        behavior: Box<dyn WidgetBehavior>,
    ) -> Self {
        Self {
            class,
            style,
            flags: WidgetFlags::empty(),
            parent,
            children: Vec::new(),
            satellites: Vec::new(),
            handle: Some(handle),
            listeners: None,
            data: DataSlot::new(),
            behavior,
        }
    }
}
