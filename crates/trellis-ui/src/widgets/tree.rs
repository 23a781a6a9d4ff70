//! Tree widgets and their items.
//!
//! A tree owns top-level items; items own nested items. Expanding or
//! collapsing an item notifies the owning tree, which is where consumers
//! hook `Expand`/`Collapse`.

use std::any::Any;

use crate::display::Display;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};
use crate::widgets::scrollbar::{self, ScrollBar};

pub(crate) struct TreeState;

impl Sealed for TreeState {}

impl WidgetBehavior for TreeState {
    fn class(&self) -> WidgetClass {
        WidgetClass::Tree
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        // Trees always scroll.
        let style = style | StyleFlags::H_SCROLL | StyleFlags::V_SCROLL;
        style.check_bits(StyleFlags::SINGLE | StyleFlags::MULTI, StyleFlags::SINGLE)
    }

    fn hooked_events(&self) -> &'static [EventKind] {
        &[
            EventKind::Selection,
            EventKind::DefaultSelection,
            EventKind::Expand,
            EventKind::Collapse,
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Default)]
pub(crate) struct TreeItemState {
    pub(crate) text: String,
    pub(crate) expanded: bool,
}

impl Sealed for TreeItemState {}

impl WidgetBehavior for TreeItemState {
    fn class(&self) -> WidgetClass {
        WidgetClass::TreeItem
    }

    fn release_widget(&mut self) {
        self.text.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Handle to a tree widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    id: WidgetId,
}

impl Tree {
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(TreeState),
            WidgetClass::Tree,
        )?;
        scrollbar::create_scroll_bars(display, id)?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Top-level items, in creation order.
    pub fn items(&self, display: &Display) -> Result<Vec<TreeItem>> {
        Ok(display
            .children(self.id)?
            .into_iter()
            .map(|id| TreeItem { id })
            .collect())
    }

    pub fn item_count(&self, display: &Display) -> Result<usize> {
        Ok(display.children(self.id)?.len())
    }

    pub fn horizontal_bar(&self, display: &Display) -> Result<Option<ScrollBar>> {
        scrollbar::find_bar(display, self.id, true)
    }

    pub fn vertical_bar(&self, display: &Display) -> Result<Option<ScrollBar>> {
        scrollbar::find_bar(display, self.id, false)
    }

    pub fn dispose(&self, display: &mut Display) -> Result<()> {
        display.dispose(self.id)
    }

    pub fn is_disposed(&self, display: &Display) -> bool {
        display.is_disposed(self.id)
    }
}

impl From<Tree> for WidgetId {
    fn from(tree: Tree) -> WidgetId {
        tree.id
    }
}

/// Handle to one item of a tree. The parent may be the tree itself or
/// another item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeItem {
    id: WidgetId,
}

impl TreeItem {
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(TreeItemState::default()),
            WidgetClass::TreeItem,
        )?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn set_text(&self, display: &mut Display, text: &str) -> Result<()> {
        display.behavior_mut::<TreeItemState>(self.id)?.text = text.to_string();
        Ok(())
    }

    pub fn text(&self, display: &Display) -> Result<String> {
        Ok(display.behavior_ref::<TreeItemState>(self.id)?.text.clone())
    }

    /// Nested items, in creation order.
    pub fn items(&self, display: &Display) -> Result<Vec<TreeItem>> {
        Ok(display
            .children(self.id)?
            .into_iter()
            .map(|id| TreeItem { id })
            .collect())
    }

    pub fn expanded(&self, display: &Display) -> Result<bool> {
        Ok(display.behavior_ref::<TreeItemState>(self.id)?.expanded)
    }

    /// Expands or collapses the item. On a state change the owning tree is
    /// sent `Expand`/`Collapse` with this item's id as the payload.
    pub fn set_expanded(&self, display: &mut Display, expanded: bool) -> Result<()> {
        let state = display.behavior_mut::<TreeItemState>(self.id)?;
        if state.expanded == expanded {
            return Ok(());
        }
        state.expanded = expanded;
        let tree = self.owning_tree(display)?;
        let kind = if expanded {
            EventKind::Expand
        } else {
            EventKind::Collapse
        };
        let mut event = Event::with_payload(kind, Box::new(self.id));
        display.notify_listeners(tree, kind, &mut event)
    }

    fn owning_tree(&self, display: &Display) -> Result<WidgetId> {
        let mut current = self.id;
        while let Some(parent) = display.parent(current)? {
            if display.widget_class(parent)? == WidgetClass::Tree {
                return Ok(parent);
            }
            current = parent;
        }
        Err(Error::InvalidArgument {
            reason: "tree item has no owning tree".to_string(),
        })
    }

    pub fn dispose(&self, display: &mut Display) -> Result<()> {
        display.dispose(self.id)
    }

    pub fn is_disposed(&self, display: &Display) -> bool {
        display.is_disposed(self.id)
    }
}

impl From<TreeItem> for WidgetId {
    fn from(item: TreeItem) -> WidgetId {
        item.id
    }
}
