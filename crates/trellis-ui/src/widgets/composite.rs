//! Composite: a widget that owns an ordered collection of children.

use std::any::Any;

use crate::display::Display;
use crate::error::Result;
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};
use crate::widgets::scrollbar::{self, ScrollBar};

pub(crate) struct CompositeState;

impl Sealed for CompositeState {}

impl WidgetBehavior for CompositeState {
    fn class(&self) -> WidgetClass {
        WidgetClass::Composite
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Handle to a composite widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite {
    id: WidgetId,
}

impl Composite {
    /// Creates a root composite with no parent.
    pub fn root(display: &mut Display, style: StyleFlags) -> Result<Self> {
        let id = display.create_widget(
            None,
            style,
            Box::new(CompositeState),
            WidgetClass::Composite,
        )?;
        scrollbar::create_scroll_bars(display, id)?;
        Ok(Self { id })
    }

    /// Creates a composite under `parent`.
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(CompositeState),
            WidgetClass::Composite,
        )?;
        scrollbar::create_scroll_bars(display, id)?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The owned children, in creation order.
    pub fn children(&self, display: &Display) -> Result<Vec<WidgetId>> {
        display.children(self.id)
    }

    /// The horizontal scrollbar satellite, if the composite was created
    /// with `H_SCROLL`.
    pub fn horizontal_bar(&self, display: &Display) -> Result<Option<ScrollBar>> {
        scrollbar::find_bar(display, self.id, true)
    }

    /// The vertical scrollbar satellite, if the composite was created with
    /// `V_SCROLL`.
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

impl From<Composite> for WidgetId {
    fn from(composite: Composite) -> WidgetId {
        composite.id
    }
}
