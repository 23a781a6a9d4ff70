//! Scrollbar satellites for scrollable composites.
//!
//! Scrollbars are widgets, but they live outside their owner's child
//! collection: the owner creates them during construction when its style
//! asks for them, and they cascade and reskin with the owner.

use std::any::Any;

use crate::display::Display;
use crate::error::{Error, Result};
use crate::event::EventKind;
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};

pub(crate) struct ScrollBarState {
    pub(crate) minimum: i32,
    pub(crate) maximum: i32,
    pub(crate) thumb: i32,
    pub(crate) selection: i32,
    pub(crate) increment: i32,
    pub(crate) page_increment: i32,
}

impl Default for ScrollBarState {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            thumb: 10,
            selection: 0,
            increment: 1,
            page_increment: 10,
        }
    }
}

impl Sealed for ScrollBarState {}

impl WidgetBehavior for ScrollBarState {
    fn class(&self) -> WidgetClass {
        WidgetClass::ScrollBar
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        style.check_bits(
            StyleFlags::HORIZONTAL | StyleFlags::VERTICAL,
            StyleFlags::VERTICAL,
        )
    }

    fn hooked_events(&self) -> &'static [EventKind] {
        &[EventKind::Selection]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Handle to a scrollbar satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBar {
    id: WidgetId,
}

/// Creates the scrollbar satellites the owner's style asks for.
pub(crate) fn create_scroll_bars(display: &mut Display, owner: WidgetId) -> Result<()> {
    let style = display.style(owner)?;
    if style.contains(StyleFlags::H_SCROLL) {
        ScrollBar::create(display, owner, StyleFlags::HORIZONTAL)?;
    }
    if style.contains(StyleFlags::V_SCROLL) {
        ScrollBar::create(display, owner, StyleFlags::VERTICAL)?;
    }
    Ok(())
}

/// Finds the owner's scrollbar satellite for the given direction.
pub(crate) fn find_bar(
    display: &Display,
    owner: WidgetId,
    horizontal: bool,
) -> Result<Option<ScrollBar>> {
    for satellite in display.satellites(owner)? {
        if display.widget_class(satellite)? != WidgetClass::ScrollBar {
            continue;
        }
        if display.style(satellite)?.contains(StyleFlags::HORIZONTAL) == horizontal {
            return Ok(Some(ScrollBar { id: satellite }));
        }
    }
    Ok(None)
}

impl ScrollBar {
    pub(crate) fn create(
        display: &mut Display,
        owner: WidgetId,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_satellite(
            owner,
            style,
            Box::new(ScrollBarState::default()),
            WidgetClass::ScrollBar,
        )?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn is_horizontal(&self, display: &Display) -> Result<bool> {
        Ok(display.style(self.id)?.contains(StyleFlags::HORIZONTAL))
    }

    pub fn selection(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.selection)
    }

    /// Sets the selection, clamped into `[minimum, maximum - thumb]`.
    pub fn set_selection(&self, display: &mut Display, value: i32) -> Result<()> {
        let state = display.behavior_mut::<ScrollBarState>(self.id)?;
        let upper = state.maximum - state.thumb;
        state.selection = value.clamp(state.minimum, upper);
        Ok(())
    }

    /// Sets all range values at once.
    ///
    /// `maximum` must exceed `minimum`; `thumb`, `increment` and
    /// `page_increment` must be at least 1. The thumb is clamped to the
    /// range size and the selection to the resulting bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn set_values(
        &self,
        display: &mut Display,
        selection: i32,
        minimum: i32,
        maximum: i32,
        thumb: i32,
        increment: i32,
        page_increment: i32,
    ) -> Result<()> {
        if maximum <= minimum {
            return Err(Error::InvalidRange {
                value: maximum,
                min: minimum + 1,
                max: i32::MAX,
            });
        }
        let span = maximum - minimum;
        if thumb < 1 {
            return Err(Error::InvalidRange {
                value: thumb,
                min: 1,
                max: span,
            });
        }
        if increment < 1 {
            return Err(Error::InvalidRange {
                value: increment,
                min: 1,
                max: i32::MAX,
            });
        }
        if page_increment < 1 {
            return Err(Error::InvalidRange {
                value: page_increment,
                min: 1,
                max: i32::MAX,
            });
        }
        let state = display.behavior_mut::<ScrollBarState>(self.id)?;
        state.minimum = minimum;
        state.maximum = maximum;
        state.thumb = thumb.min(span);
        state.increment = increment;
        state.page_increment = page_increment;
        state.selection = selection.clamp(minimum, maximum - state.thumb);
        Ok(())
    }

    pub fn minimum(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.minimum)
    }

    pub fn maximum(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.maximum)
    }

    pub fn thumb(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.thumb)
    }

    pub fn increment(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.increment)
    }

    pub fn page_increment(&self, display: &Display) -> Result<i32> {
        Ok(display.behavior_ref::<ScrollBarState>(self.id)?.page_increment)
    }

    pub fn is_disposed(&self, display: &Display) -> bool {
        display.is_disposed(self.id)
    }
}

impl From<ScrollBar> for WidgetId {
    fn from(bar: ScrollBar) -> WidgetId {
        bar.id
    }
}
