//! Event types, listener bookkeeping and the per-widget event table.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use trellis_core::alloc::HashMap;

use crate::display::Display;
use crate::widget::WidgetId;

/// Event type tags dispatched through the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Reserved: fired exactly once per widget, before any teardown.
    Dispose,
    /// Batched presentation-refresh request reached the widget.
    Skin,
    /// Primary selection (button press, item pick).
    Selection,
    /// Default selection (double click, enter).
    DefaultSelection,
    /// Content changed.
    Modify,
    /// Widget was resized.
    Resize,
    /// Widget was moved.
    Move,
    /// Widget became visible.
    Show,
    /// Widget became hidden.
    Hide,
    /// Focus gained.
    FocusIn,
    /// Focus lost.
    FocusOut,
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
    /// Mouse button pressed.
    MouseDown,
    /// Mouse button released.
    MouseUp,
    /// Tree item expanded.
    Expand,
    /// Tree item collapsed.
    Collapse,
}

/// A single dispatched event.
///
/// Events are `Send` so they can be posted from foreign threads; the
/// optional payload is boxed as `dyn Any + Send` for the same reason.
pub struct Event {
    /// The event type tag.
    pub kind: EventKind,
    /// The widget the event is addressed to; set during dispatch.
    pub widget: Option<WidgetId>,
    /// Event-specific detail code.
    pub detail: i32,
    /// Listener veto bit for cancellable operations.
    pub doit: bool,
    /// Optional payload attached by the sender.
    pub payload: Option<Box<dyn Any + Send>>,
    consumed: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            widget: None,
            detail: 0,
            doit: true,
            payload: None,
            consumed: false,
        }
    }

    pub fn with_widget(kind: EventKind, widget: WidgetId) -> Self {
        let mut event = Self::new(kind);
        event.widget = Some(widget);
        event
    }

    pub fn with_payload(kind: EventKind, payload: Box<dyn Any + Send>) -> Self {
        let mut event = Self::new(kind);
        event.payload = Some(payload);
        event
    }

    /// Marks the event as consumed. A filter that consumes an event
    /// suppresses delivery to the target widget's listeners.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("widget", &self.widget)
            .field("detail", &self.detail)
            .field("doit", &self.doit)
            .field("consumed", &self.consumed)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

/// Listener callback signature.
///
/// Listeners receive the display so they can still query widget state during
/// dispatch (including during `Dispose` notification, which runs before any
/// teardown).
pub type ListenerFn = dyn Fn(&mut Display, &mut Event);

/// Identifies one hooked listener within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone)]
pub(crate) struct ListenerEntry {
    pub(crate) id: ListenerId,
    pub(crate) callback: Rc<ListenerFn>,
}

/// Mapping from event-type tag to an ordered list of listener entries.
///
/// Registration order is dispatch order. Dispatch iterates a cloned snapshot
/// of the entry list, so hooking or unhooking listeners while dispatch for
/// the same kind is in progress cannot corrupt the in-flight iteration.
pub struct EventTable {
    entries: HashMap<EventKind, Vec<ListenerEntry>>,
    next_id: u64,
}

impl EventTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 0,
        }
    }

    /// Appends a listener for `kind` and returns its id.
    pub fn hook(&mut self, kind: EventKind, callback: Rc<ListenerFn>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries
            .entry(kind)
            .or_default()
            .push(ListenerEntry { id, callback });
        id
    }

    /// Removes the matching `(kind, id)` pair, leaving other registrations
    /// of the same callback intact. Returns whether a pair was removed.
    pub fn unhook(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(list) = self.entries.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|entry| entry.id != id);
        if list.is_empty() {
            self.entries.remove(&kind);
        }
        before != self.entries.get(&kind).map_or(0, |l| l.len())
    }

    /// Returns true if any listener is hooked for `kind`.
    pub fn hooks(&self, kind: EventKind) -> bool {
        self.entries.get(&kind).is_some_and(|l| !l.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable snapshot of the entries hooked for `kind`, in registration
    /// order.
    pub(crate) fn snapshot(&self, kind: EventKind) -> Vec<ListenerEntry> {
        self.entries.get(&kind).cloned().unwrap_or_default()
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Rc<ListenerFn> {
        Rc::new(|_, _| {})
    }

    #[test]
    fn test_hook_order_is_snapshot_order() {
        let mut table = EventTable::new();
        let a = table.hook(EventKind::Selection, noop());
        let b = table.hook(EventKind::Selection, noop());
        let c = table.hook(EventKind::Selection, noop());
        let ids: Vec<ListenerId> = table
            .snapshot(EventKind::Selection)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_unhook_removes_only_matching_pair() {
        let mut table = EventTable::new();
        let a = table.hook(EventKind::Selection, noop());
        let b = table.hook(EventKind::Selection, noop());
        let m = table.hook(EventKind::Modify, noop());
        assert!(table.unhook(EventKind::Selection, a));
        assert!(!table.unhook(EventKind::Selection, a));
        let ids: Vec<ListenerId> = table
            .snapshot(EventKind::Selection)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![b]);
        assert!(table.hooks(EventKind::Modify));
        assert!(table.unhook(EventKind::Modify, m));
        assert!(!table.hooks(EventKind::Modify));
    }

    #[test]
    fn test_listener_registered_for_multiple_kinds() {
        let mut table = EventTable::new();
        let callback = noop();
        let a = table.hook(EventKind::Selection, Rc::clone(&callback));
        let b = table.hook(EventKind::Modify, Rc::clone(&callback));
        assert_ne!(a, b);
        assert!(table.unhook(EventKind::Selection, a));
        assert!(table.hooks(EventKind::Modify));
    }

    #[test]
    fn test_snapshot_isolated_from_later_mutation() {
        let mut table = EventTable::new();
        let a = table.hook(EventKind::Selection, noop());
        let snapshot = table.snapshot(EventKind::Selection);
        table.unhook(EventKind::Selection, a);
        assert_eq!(snapshot.len(), 1);
        assert!(table.snapshot(EventKind::Selection).is_empty());
    }

    #[test]
    fn test_event_consume() {
        let mut event = Event::new(EventKind::KeyDown);
        assert!(!event.is_consumed());
        event.consume();
        assert!(event.is_consumed());
    }
}
