//! Single- and multi-line text fields.

use std::any::Any;

use crate::display::Display;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetId, sealed::Sealed};
use crate::widgets::scrollbar::{self, ScrollBar};

#[derive(Default)]
pub(crate) struct TextState {
    pub(crate) content: String,
    pub(crate) text_limit: Option<usize>,
}

impl Sealed for TextState {}

impl WidgetBehavior for TextState {
    fn class(&self) -> WidgetClass {
        WidgetClass::Text
    }

    fn normalize_style(&self, style: StyleFlags) -> StyleFlags {
        let style = style.check_bits(
            StyleFlags::SINGLE | StyleFlags::MULTI,
            StyleFlags::SINGLE,
        );
        if style.contains(StyleFlags::SINGLE) {
            // A single-line field never wraps or scrolls.
            style - (StyleFlags::WRAP | StyleFlags::H_SCROLL | StyleFlags::V_SCROLL)
        } else {
            style
        }
    }

    fn hooked_events(&self) -> &'static [EventKind] {
        &[EventKind::Modify, EventKind::KeyDown, EventKind::KeyUp]
    }

    fn release_widget(&mut self) {
        self.content.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Handle to a text field widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    id: WidgetId,
}

impl Text {
    pub fn new(
        display: &mut Display,
        parent: impl Into<WidgetId>,
        style: StyleFlags,
    ) -> Result<Self> {
        let id = display.create_widget(
            Some(parent.into()),
            style,
            Box::new(TextState::default()),
            WidgetClass::Text,
        )?;
        scrollbar::create_scroll_bars(display, id)?;
        Ok(Self { id })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Replaces the content, truncating at the text limit, and sends
    /// `Modify` when the content actually changed.
    pub fn set_text(&self, display: &mut Display, text: &str) -> Result<()> {
        let state = display.behavior_mut::<TextState>(self.id)?;
        let mut new_content = text.to_string();
        if let Some(limit) = state.text_limit {
            if new_content.chars().count() > limit {
                new_content = new_content.chars().take(limit).collect();
            }
        }
        if state.content == new_content {
            return Ok(());
        }
        state.content = new_content;
        let mut event = Event::new(EventKind::Modify);
        display.notify_listeners(self.id, EventKind::Modify, &mut event)
    }

    /// Appends to the content, truncating at the text limit, and sends
    /// `Modify` when something was appended.
    pub fn append(&self, display: &mut Display, text: &str) -> Result<()> {
        let state = display.behavior_ref::<TextState>(self.id)?;
        let mut combined = state.content.clone();
        combined.push_str(text);
        self.set_text(display, &combined)
    }

    pub fn text(&self, display: &Display) -> Result<String> {
        Ok(display.behavior_ref::<TextState>(self.id)?.content.clone())
    }

    pub fn char_count(&self, display: &Display) -> Result<usize> {
        Ok(display
            .behavior_ref::<TextState>(self.id)?
            .content
            .chars()
            .count())
    }

    /// Limits future content length, in characters. Existing content is
    /// left untouched. Zero is rejected.
    pub fn set_text_limit(&self, display: &mut Display, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(Error::InvalidRange {
                value: 0,
                min: 1,
                max: i32::MAX,
            });
        }
        display.behavior_mut::<TextState>(self.id)?.text_limit = Some(limit);
        Ok(())
    }

    pub fn text_limit(&self, display: &Display) -> Result<Option<usize>> {
        Ok(display.behavior_ref::<TextState>(self.id)?.text_limit)
    }

    /// Whether the field rejects user edits. Programmatic `set_text` is
    /// still allowed.
    pub fn is_read_only(&self, display: &Display) -> Result<bool> {
        Ok(display.style(self.id)?.contains(StyleFlags::READ_ONLY))
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

impl From<Text> for WidgetId {
    fn from(text: Text) -> WidgetId {
        text.id
    }
}
