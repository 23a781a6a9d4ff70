//! Toolbars and their items.

use std::any::Any;

use crate::display::Display;
use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};

pub(crate) struct ToolBarState;

impl Sealed for ToolBarState {}

impl WidgetBehavior for ToolBarState {
    fn class(&self) -> WidgetClass {
        WidgetClass::ToolBar
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        style.check_bits(
            StyleFlags::HORIZONTAL | StyleFlags::VERTICAL,
            StyleFlags::HORIZONTAL,
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Default)]
pub(crate) struct ToolItemState {
    pub(crate) text: String,
    pub(crate) selected: bool,
}

impl Sealed for ToolItemState {}

impl WidgetBehavior for ToolItemState {
    fn class(&self) -> WidgetClass {
        WidgetClass::ToolItem
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        style.check_bits(
            StyleFlags::PUSH | StyleFlags::TOGGLE | StyleFlags::CHECK,
            StyleFlags::PUSH,
        )
    }

    fn hooked_events(&self) -> &'static [EventKind] {
        &[EventKind::Selection]
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

/// Handle to a toolbar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolBar {
    id: WidgetId,
}

impl ToolBar {
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(ToolBarState),
            WidgetClass::ToolBar,
        )?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn items(&self, display: &Display) -> Result<Vec<ToolItem>> {
        Ok(display
            .children(self.id)?
            .into_iter()
            .map(|id| ToolItem { id })
            .collect())
    }

    pub fn item_count(&self, display: &Display) -> Result<usize> {
        Ok(display.children(self.id)?.len())
    }

    pub fn dispose(&self, display: &mut Display) -> Result<()> {
        display.dispose(self.id)
    }

    pub fn is_disposed(&self, display: &Display) -> bool {
        display.is_disposed(self.id)
    }
}

impl From<ToolBar> for WidgetId {
    fn from(bar: ToolBar) -> WidgetId {
        bar.id
    }
}

/// Handle to one toolbar item. Only a [`ToolBar`] may parent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolItem {
    id: WidgetId,
}

impl ToolItem {
    pub fn new(display: &mut Display, parent: ToolBar, style: StyleFlags) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.id()),
            style,
            Box::new(ToolItemState::default()),
            WidgetClass::ToolItem,
        )?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn set_text(&self, display: &mut Display, text: &str) -> Result<()> {
        display.behavior_mut::<ToolItemState>(self.id)?.text = text.to_string();
        Ok(())
    }

    pub fn text(&self, display: &Display) -> Result<String> {
        Ok(display.behavior_ref::<ToolItemState>(self.id)?.text.clone())
    }

    /// The checked/pressed state. Always false for `PUSH` items.
    pub fn selection(&self, display: &Display) -> Result<bool> {
        Ok(display.behavior_ref::<ToolItemState>(self.id)?.selected)
    }

    /// Sets the checked/pressed state. Ignored for `PUSH` items.
    pub fn set_selection(&self, display: &mut Display, selected: bool) -> Result<()> {
        let style = display.style(self.id)?;
        if !style.intersects(StyleFlags::TOGGLE | StyleFlags::CHECK) {
            return Ok(());
        }
        display.behavior_mut::<ToolItemState>(self.id)?.selected = selected;
        Ok(())
    }

    /// Activates the item as user input would: toggles `TOGGLE`/`CHECK`
    /// items and sends `Selection`.
    pub fn click(&self, display: &mut Display) -> Result<()> {
        let style = display.style(self.id)?;
        if style.intersects(StyleFlags::TOGGLE | StyleFlags::CHECK) {
            let state = display.behavior_mut::<ToolItemState>(self.id)?;
            state.selected = !state.selected;
        }
        let mut event = Event::new(EventKind::Selection);
        display.notify_listeners(self.id, EventKind::Selection, &mut event)
    }

    pub fn dispose(&self, display: &mut Display) -> Result<()> {
        display.dispose(self.id)
    }

    pub fn is_disposed(&self, display: &Display) -> bool {
        display.is_disposed(self.id)
    }
}

impl From<ToolItem> for WidgetId {
    fn from(item: ToolItem) -> WidgetId {
        item.id
    }
}
