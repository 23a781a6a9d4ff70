//! Push, toggle and check buttons.

use std::any::Any;

use crate::display::Display;
use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};

#[derive(Default)]
pub(crate) struct ButtonState {
    pub(crate) text: String,
    pub(crate) selected: bool,
}

impl Sealed for ButtonState {}

impl WidgetBehavior for ButtonState {
    fn class(&self) -> WidgetClass {
        WidgetClass::Button
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        style.check_bits(
            StyleFlags::PUSH | StyleFlags::TOGGLE | StyleFlags::CHECK,
            StyleFlags::PUSH,
        )
    }

    fn hooked_events(&self) -> &'static [EventKind] {
        &[EventKind::Selection, EventKind::MouseDown, EventKind::MouseUp]
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

/// Handle to a button widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    id: WidgetId,
}

impl Button {
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(ButtonState::default()),
            WidgetClass::Button,
        )?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn set_text(&self, display: &mut Display, text: &str) -> Result<()> {
        display.behavior_mut::<ButtonState>(self.id)?.text = text.to_string();
        Ok(())
    }

    pub fn text(&self, display: &Display) -> Result<String> {
        Ok(display.behavior_ref::<ButtonState>(self.id)?.text.clone())
    }

    /// The checked/pressed state. Always false for `PUSH` buttons.
    pub fn selection(&self, display: &Display) -> Result<bool> {
        Ok(display.behavior_ref::<ButtonState>(self.id)?.selected)
    }

    /// Sets the checked/pressed state. Ignored for `PUSH` buttons.
    pub fn set_selection(&self, display: &mut Display, selected: bool) -> Result<()> {
        let style = display.style(self.id)?;
        if !style.intersects(StyleFlags::TOGGLE | StyleFlags::CHECK) {
            return Ok(());
        }
        display.behavior_mut::<ButtonState>(self.id)?.selected = selected;
        Ok(())
    }

    /// Activates the button as user input would: toggles the state of
    /// `TOGGLE`/`CHECK` buttons and sends `Selection`.
    pub fn click(&self, display: &mut Display) -> Result<()> {
        let style = display.style(self.id)?;
        if style.intersects(StyleFlags::TOGGLE | StyleFlags::CHECK) {
            let state = display.behavior_mut::<ButtonState>(self.id)?;
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

impl From<Button> for WidgetId {
    fn from(button: Button) -> WidgetId {
        button.id
    }
}
