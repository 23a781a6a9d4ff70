//! The display: owning-thread context, widget arena and lifecycle
//! orchestration.
//!
//! One `Display` exists per UI thread. It owns every widget created against
//! it, the deferred-event queue, the global event filters and the reskin
//! worklist. All widget operations are methods here, keyed by [`WidgetId`];
//! the id is a generational reference, so operations on a disposed widget
//! fail with [`Error::WidgetDisposed`] instead of reaching freed state.

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use indexmap::IndexSet;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use trellis_core::alloc::{HashMap, SlotArena};

use crate::backend::{HeadlessBackend, NativeHandle, Orientation, PlatformBackend};
use crate::data::DataValue;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind, EventTable, ListenerFn, ListenerId};
use crate::style::StyleFlags;
use crate::widget::{WidgetBehavior, WidgetClass, WidgetFlags, WidgetId, WidgetNode};

/// How far a reskin request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReskinScope {
    /// Only the widget itself.
    Widget,
    /// The widget, its children and its satellites, recursively.
    All,
}

/// Thread-safe handle for posting events from foreign threads.
///
/// Posting is the only sanctioned cross-thread entry point; everything else
/// on the display enforces owning-thread affinity.
#[derive(Clone)]
pub struct EventPoster {
    queue: Arc<Mutex<VecDeque<Event>>>,
}

impl EventPoster {
    pub fn post(&self, event: Event) {
        self.queue.lock().push_back(event);
    }
}

/// Per-thread toolkit context owning the widget tree.
pub struct Display {
    thread: ThreadId,
    widgets: SlotArena<WidgetNode>,
    backend: Box<dyn PlatformBackend>,
    handle_registry: HashMap<NativeHandle, WidgetId>,
    filters: EventTable,
    posted: Arc<Mutex<VecDeque<Event>>>,
    skin_list: IndexSet<WidgetId>,
}

impl Display {
    /// Creates a display bound to the calling thread, with no presentation.
    pub fn new() -> Self {
        Self::with_backend(Box::new(HeadlessBackend::new()))
    }

    /// Creates a display bound to the calling thread over the given
    /// platform backend.
    pub fn with_backend(backend: Box<dyn PlatformBackend>) -> Self {
        Self {
            thread: thread::current().id(),
            widgets: SlotArena::new(),
            backend,
            handle_registry: HashMap::new(),
            filters: EventTable::new(),
            posted: Arc::new(Mutex::new(VecDeque::new())),
            skin_list: IndexSet::new(),
        }
    }

    /// The thread this display (and every widget it owns) is bound to.
    pub fn thread(&self) -> ThreadId {
        self.thread
    }

    /// Returns whether the calling thread is the owning thread.
    pub fn is_owning_thread(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Asserts the liveness and thread-affinity contract for `id`.
    ///
    /// The thread check dominates: a foreign thread is rejected with
    /// `ThreadInvalidAccess` regardless of the widget's disposed state.
    pub fn check_widget(&self, id: WidgetId) -> Result<()> {
        self.check_thread()?;
        if self.is_disposed(id) {
            return Err(Error::WidgetDisposed);
        }
        Ok(())
    }

    fn check_thread(&self) -> Result<()> {
        if !self.is_owning_thread() {
            return Err(Error::ThreadInvalidAccess {
                expected: self.thread,
                actual: thread::current().id(),
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn override_thread_for_test(&mut self, thread: ThreadId) {
        self.thread = thread;
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    pub(crate) fn create_widget(
        &mut self,
        parent: Option<WidgetId>,
        style: StyleFlags,
        behavior: Box<dyn WidgetBehavior>,
        expected: WidgetClass,
    ) -> Result<WidgetId> {
        self.create_internal(parent, style, behavior, expected, false)
    }

    /// Creates a widget owned by `owner` outside its child collection
    /// (scrollbars and similar companions).
    pub(crate) fn create_satellite(
        &mut self,
        owner: WidgetId,
        style: StyleFlags,
        behavior: Box<dyn WidgetBehavior>,
        expected: WidgetClass,
    ) -> Result<WidgetId> {
        self.create_internal(Some(owner), style, behavior, expected, true)
    }

    fn create_internal(
        &mut self,
        parent: Option<WidgetId>,
        style: StyleFlags,
        mut behavior: Box<dyn WidgetBehavior>,
        expected: WidgetClass,
        satellite: bool,
    ) -> Result<WidgetId> {
        let class = behavior.class();
        if class != expected || behavior.as_any().type_id() != class.behavior_type_id() {
            return Err(Error::InvalidSubclass { class: expected });
        }
        self.check_thread()?;

        let parent_handle = match parent {
            Some(parent_id) => {
                self.check_widget(parent_id)?;
                let parent_node = self
                    .widgets
                    .get(parent_id.slot())
                    .ok_or(Error::WidgetDisposed)?;
                if satellite {
                    if !parent_node.class.is_scrollable() {
                        return Err(Error::InvalidArgument {
                            reason: format!("{:?} cannot own scrollbars", parent_node.class),
                        });
                    }
                } else if !parent_node.class.accepts_child(class) {
                    return Err(Error::InvalidArgument {
                        reason: format!("{:?} cannot contain {:?}", parent_node.class, class),
                    });
                }
                parent_node.handle
            }
            None => {
                if class != WidgetClass::Composite {
                    return Err(Error::InvalidArgument {
                        reason: "only a composite may be a root widget".to_string(),
                    });
                }
                None
            }
        };

        let mut style = behavior.normalize_style(style);
        if !style.has_direction() {
            let inherited = parent
                .and_then(|p| self.widgets.get(p.slot()))
                .map(|n| n.style & (StyleFlags::LEFT_TO_RIGHT | StyleFlags::RIGHT_TO_LEFT))
                .unwrap_or(StyleFlags::NONE);
            style |= if inherited.is_empty() {
                StyleFlags::LEFT_TO_RIGHT
            } else {
                inherited
            };
        }
        style = style.check_bits(
            StyleFlags::LEFT_TO_RIGHT | StyleFlags::RIGHT_TO_LEFT,
            StyleFlags::LEFT_TO_RIGHT,
        );

        // Hook sequence: handle creation, orientation setup, event hooking,
        // display registration. The id is not handed out until the whole
        // sequence has completed.
        let handle = behavior.create_handle(self.backend.as_mut(), parent_handle, style)?;
        let orientation = if style.contains(StyleFlags::RIGHT_TO_LEFT) {
            Orientation::RightToLeft
        } else {
            Orientation::LeftToRight
        };
        self.backend.set_orientation(handle, orientation);
        self.backend.hook_events(handle, behavior.hooked_events());

        let node = WidgetNode::new(class, style, parent, handle, behavior);
        let id = WidgetId::new(self.widgets.insert(node));
        self.handle_registry.insert(handle, id);

        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.widgets.get_mut(parent_id.slot()) {
                if satellite {
                    parent_node.satellites.push(id);
                } else {
                    parent_node.children.push(id);
                }
            }
        }

        self.enqueue_reskin(id);
        debug!(?class, ?id, "created widget");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Disposal
    // ------------------------------------------------------------------

    /// Disposes the widget and its whole subtree.
    ///
    /// Idempotent: disposing an already-disposed widget is a no-op.
    pub fn dispose(&mut self, id: WidgetId) -> Result<()> {
        self.check_thread()?;
        if self.is_disposed(id) {
            return Ok(());
        }
        self.release(id, true);
        Ok(())
    }

    /// Liveness query; the one operation valid on a disposed widget.
    pub fn is_disposed(&self, id: WidgetId) -> bool {
        match self.widgets.get(id.slot()) {
            Some(node) => node.flags.contains(WidgetFlags::DISPOSED),
            None => true,
        }
    }

    /// Disposal orchestrator. Not overridable by widget kinds; the hook
    /// methods on [`WidgetBehavior`] run at fixed points inside it.
    fn release(&mut self, id: WidgetId, destroy: bool) {
        if !self.widgets.contains(id.slot()) {
            return;
        }
        // Dispose notification precedes every teardown step, so listeners
        // can still query children, data and style of this widget and of
        // its not-yet-cascaded descendants. The flag is set before the
        // listeners run; a failing listener cannot unset it.
        if !self.flags_of(id).contains(WidgetFlags::DISPOSE_NOTIFIED) {
            self.set_flags(id, WidgetFlags::DISPOSE_NOTIFIED);
            let mut event = Event::new(EventKind::Dispose);
            self.send_event(id, &mut event);
        }
        if !self.flags_of(id).contains(WidgetFlags::DISPOSED) {
            self.release_children(id);
        }
        if !self.flags_of(id).contains(WidgetFlags::RELEASED) {
            self.set_flags(id, WidgetFlags::RELEASED);
            if destroy {
                self.release_parent(id);
                if let Some(node) = self.widgets.get_mut(id.slot()) {
                    node.behavior.release_widget();
                }
                self.destroy_widget(id);
            } else {
                if let Some(node) = self.widgets.get_mut(id.slot()) {
                    node.behavior.release_widget();
                    node.behavior.release_handle();
                }
                self.release_handle(id);
            }
        }
        self.set_flags(id, WidgetFlags::DISPOSED);
        // The node entry is dropped with the widget: listener table and
        // data slot die here, and the slot generation bump makes every
        // outstanding id stale.
        if self.widgets.remove(id.slot()).is_some() {
            trace!(?id, "widget disposed");
        }
    }

    /// Depth-first cascade over children and satellites.
    ///
    /// A snapshot is taken before iterating: Dispose listeners invoked
    /// during the cascade may mutate the collection, but every child is
    /// still visited exactly once.
    fn release_children(&mut self, id: WidgetId) {
        let snapshot: Vec<WidgetId> = match self.widgets.get(id.slot()) {
            Some(node) => node
                .children
                .iter()
                .chain(node.satellites.iter())
                .copied()
                .collect(),
            None => return,
        };
        for child in snapshot {
            if !self.is_disposed(child) {
                // Children never destroy their native resource during a
                // parent-driven cascade; the cascade root's single destroy
                // frees the subtree natively.
                self.release(child, false);
            }
        }
        if let Some(node) = self.widgets.get_mut(id.slot()) {
            node.children.clear();
            node.satellites.clear();
        }
    }

    fn release_parent(&mut self, id: WidgetId) {
        let parent = self.widgets.get(id.slot()).and_then(|n| n.parent);
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.widgets.get_mut(parent_id.slot()) {
                parent_node.children.retain(|c| *c != id);
                parent_node.satellites.retain(|c| *c != id);
            }
        }
    }

    fn destroy_widget(&mut self, id: WidgetId) {
        let handle = self.widgets.get_mut(id.slot()).and_then(|n| n.handle.take());
        if let Some(handle) = handle {
            self.handle_registry.remove(&handle);
            self.backend.destroy_handle(handle);
        }
    }

    fn release_handle(&mut self, id: WidgetId) {
        let handle = self.widgets.get_mut(id.slot()).and_then(|n| n.handle.take());
        if let Some(handle) = handle {
            self.handle_registry.remove(&handle);
        }
    }

    /// Disposes every root widget and clears display-global state.
    pub fn shutdown(&mut self) -> Result<()> {
        self.check_thread()?;
        let roots: Vec<WidgetId> = self
            .widgets
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(slot, _)| WidgetId::new(slot))
            .collect();
        for root in roots {
            self.dispose(root)?;
        }
        self.filters = EventTable::new();
        self.posted.lock().clear();
        self.skin_list.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Listeners and dispatch
    // ------------------------------------------------------------------

    /// Hooks a listener for `kind`; the widget's event table is allocated
    /// on first use.
    pub fn add_listener(
        &mut self,
        id: WidgetId,
        kind: EventKind,
        callback: Rc<ListenerFn>,
    ) -> Result<ListenerId> {
        self.check_widget(id)?;
        let node = self.widgets.get_mut(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node
            .listeners
            .get_or_insert_with(EventTable::new)
            .hook(kind, callback))
    }

    /// Removes the matching `(kind, listener)` pair. Returns whether a pair
    /// was removed.
    pub fn remove_listener(
        &mut self,
        id: WidgetId,
        kind: EventKind,
        listener: ListenerId,
    ) -> Result<bool> {
        self.check_widget(id)?;
        Ok(self
            .widgets
            .get_mut(id.slot())
            .and_then(|n| n.listeners.as_mut())
            .is_some_and(|table| table.unhook(kind, listener)))
    }

    /// Returns whether any listener is hooked for `kind`.
    pub fn is_listening(&self, id: WidgetId, kind: EventKind) -> Result<bool> {
        self.check_widget(id)?;
        Ok(self
            .widgets
            .get(id.slot())
            .and_then(|n| n.listeners.as_ref())
            .is_some_and(|table| table.hooks(kind)))
    }

    /// Synchronously delivers `event` as `kind` to the widget's listeners,
    /// after the display filters have run.
    pub fn notify_listeners(
        &mut self,
        id: WidgetId,
        kind: EventKind,
        event: &mut Event,
    ) -> Result<()> {
        self.check_widget(id)?;
        event.kind = kind;
        self.send_event(id, event);
        Ok(())
    }

    /// Internal synchronous dispatch: filters first, then the widget's
    /// listeners in registration order, over a stable snapshot.
    pub(crate) fn send_event(&mut self, id: WidgetId, event: &mut Event) {
        event.widget = Some(id);
        if self.filter_event(event) {
            return;
        }
        let snapshot = match self.widgets.get(id.slot()).and_then(|n| n.listeners.as_ref()) {
            Some(table) => table.snapshot(event.kind),
            None => return,
        };
        if snapshot.is_empty() {
            return;
        }
        trace!(kind = ?event.kind, ?id, listeners = snapshot.len(), "dispatching");
        for entry in snapshot {
            (entry.callback)(&mut *self, event);
        }
    }

    /// Runs the display-global filters for the event's kind. Returns true
    /// when a filter consumed the event, which suppresses widget delivery.
    pub(crate) fn filter_event(&mut self, event: &mut Event) -> bool {
        let snapshot = self.filters.snapshot(event.kind);
        for entry in snapshot {
            (entry.callback)(&mut *self, event);
            if event.is_consumed() {
                return true;
            }
        }
        false
    }

    /// Hooks a display-global filter, consulted before any widget's own
    /// listeners.
    pub fn add_filter(&mut self, kind: EventKind, callback: Rc<ListenerFn>) -> Result<ListenerId> {
        self.check_thread()?;
        Ok(self.filters.hook(kind, callback))
    }

    pub fn remove_filter(&mut self, kind: EventKind, listener: ListenerId) -> Result<bool> {
        self.check_thread()?;
        Ok(self.filters.unhook(kind, listener))
    }

    // ------------------------------------------------------------------
    // Deferred events
    // ------------------------------------------------------------------

    /// Enqueues an event for later delivery on the owning thread. May be
    /// called from any thread holding a reference; see [`Display::poster`]
    /// for the shareable handle.
    pub fn post_event(&self, event: Event) {
        self.posted.lock().push_back(event);
    }

    /// A cloneable, `Send + Sync` posting handle for foreign threads.
    pub fn poster(&self) -> EventPoster {
        EventPoster {
            queue: Arc::clone(&self.posted),
        }
    }

    /// Drains the posted-event queue in FIFO order, delivering each event
    /// through the filter and dispatch path, then flushes the reskin
    /// worklist. Must run on the owning thread.
    pub fn process_posted_events(&mut self) -> Result<()> {
        self.check_thread()?;
        loop {
            let next = { self.posted.lock().pop_front() };
            let Some(mut event) = next else { break };
            match event.widget {
                Some(id) if !self.is_disposed(id) => self.send_event(id, &mut event),
                Some(id) => {
                    warn!(?id, kind = ?event.kind, "dropping posted event for disposed widget");
                }
                None => {
                    self.filter_event(&mut event);
                }
            }
        }
        self.flush_reskin();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reskin batching
    // ------------------------------------------------------------------

    /// Marks the widget (and, for [`ReskinScope::All`], its subtree) as
    /// needing a presentation refresh. Queueing is idempotent per flush
    /// cycle.
    pub fn reskin(&mut self, id: WidgetId, scope: ReskinScope) -> Result<()> {
        self.check_widget(id)?;
        self.enqueue_reskin(id);
        if scope == ReskinScope::All {
            self.reskin_children(id);
        }
        Ok(())
    }

    fn enqueue_reskin(&mut self, id: WidgetId) {
        if self.flags_of(id).contains(WidgetFlags::SKIN_QUEUED) {
            return;
        }
        self.set_flags(id, WidgetFlags::SKIN_QUEUED);
        self.skin_list.insert(id);
        trace!(?id, "queued for reskin");
    }

    fn reskin_children(&mut self, id: WidgetId) {
        let targets: Vec<WidgetId> = match self.widgets.get(id.slot()) {
            Some(node) => node
                .children
                .iter()
                .chain(node.satellites.iter())
                .copied()
                .chain(node.behavior.reskin_targets())
                .collect(),
            None => return,
        };
        for target in targets {
            if self.is_disposed(target) {
                continue;
            }
            self.enqueue_reskin(target);
            self.reskin_children(target);
        }
    }

    /// Drains the reskin worklist in queue order, sending each live widget
    /// a `Skin` event. Widgets disposed since queueing are skipped.
    pub fn flush_reskin(&mut self) {
        let ids: Vec<WidgetId> = self.skin_list.drain(..).collect();
        for id in ids {
            if self.is_disposed(id) {
                continue;
            }
            self.clear_flags(id, WidgetFlags::SKIN_QUEUED);
            let mut event = Event::new(EventKind::Skin);
            self.send_event(id, &mut event);
        }
    }

    /// Number of widgets currently queued for reskin.
    pub fn pending_reskins(&self) -> usize {
        self.skin_list.len()
    }

    // ------------------------------------------------------------------
    // User data
    // ------------------------------------------------------------------

    /// Sets the anonymous data value.
    pub fn set_data(&mut self, id: WidgetId, value: Option<DataValue>) -> Result<()> {
        self.check_widget(id)?;
        let node = self.widgets.get_mut(id.slot()).ok_or(Error::WidgetDisposed)?;
        node.data.set(value);
        Ok(())
    }

    pub fn get_data(&self, id: WidgetId) -> Result<Option<DataValue>> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.data.get())
    }

    /// Sets or removes (`value == None`) a named property.
    pub fn set_data_keyed(
        &mut self,
        id: WidgetId,
        key: &str,
        value: Option<DataValue>,
    ) -> Result<()> {
        self.check_widget(id)?;
        if key.is_empty() {
            return Err(Error::NullArgument { name: "key" });
        }
        let node = self.widgets.get_mut(id.slot()).ok_or(Error::WidgetDisposed)?;
        node.data.set_keyed(key, value);
        if node.data.is_keyed() {
            node.flags |= WidgetFlags::KEYED_DATA;
        } else {
            node.flags -= WidgetFlags::KEYED_DATA;
        }
        Ok(())
    }

    pub fn get_data_keyed(&self, id: WidgetId, key: &str) -> Result<Option<DataValue>> {
        self.check_widget(id)?;
        if key.is_empty() {
            return Err(Error::NullArgument { name: "key" });
        }
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.data.get_keyed(key))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The immutable style bits fixed at construction.
    pub fn style(&self, id: WidgetId) -> Result<StyleFlags> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.style)
    }

    pub fn widget_class(&self, id: WidgetId) -> Result<WidgetClass> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.class)
    }

    pub fn parent(&self, id: WidgetId) -> Result<Option<WidgetId>> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.parent)
    }

    /// The widget's owned children, in creation order. Satellites are not
    /// listed here.
    pub fn children(&self, id: WidgetId) -> Result<Vec<WidgetId>> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.children.clone())
    }

    pub(crate) fn satellites(&self, id: WidgetId) -> Result<Vec<WidgetId>> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        Ok(node.satellites.clone())
    }

    /// The native handle wrapped by the widget.
    pub fn native_handle(&self, id: WidgetId) -> Result<NativeHandle> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        node.handle.ok_or(Error::WidgetDisposed)
    }

    /// Reverse lookup from a native handle to the owning widget.
    pub fn find_widget(&self, handle: NativeHandle) -> Option<WidgetId> {
        self.handle_registry.get(&handle).copied()
    }

    /// Number of live widgets owned by this display.
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    // ------------------------------------------------------------------
    // Visibility and enablement hints
    // ------------------------------------------------------------------

    /// Shows or hides the widget, sending `Show`/`Hide` on transitions.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> Result<()> {
        self.check_widget(id)?;
        let hidden = self.flags_of(id).contains(WidgetFlags::HIDDEN);
        if hidden != visible {
            return Ok(());
        }
        if visible {
            self.clear_flags(id, WidgetFlags::HIDDEN);
            let mut event = Event::new(EventKind::Show);
            self.send_event(id, &mut event);
        } else {
            self.set_flags(id, WidgetFlags::HIDDEN);
            let mut event = Event::new(EventKind::Hide);
            self.send_event(id, &mut event);
        }
        Ok(())
    }

    pub fn is_visible(&self, id: WidgetId) -> Result<bool> {
        self.check_widget(id)?;
        Ok(!self.flags_of(id).contains(WidgetFlags::HIDDEN))
    }

    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> Result<()> {
        self.check_widget(id)?;
        if enabled {
            self.clear_flags(id, WidgetFlags::DISABLED);
        } else {
            self.set_flags(id, WidgetFlags::DISABLED);
        }
        Ok(())
    }

    pub fn is_enabled(&self, id: WidgetId) -> Result<bool> {
        self.check_widget(id)?;
        Ok(!self.flags_of(id).contains(WidgetFlags::DISABLED))
    }

    // ------------------------------------------------------------------
    // Flag and behavior plumbing
    // ------------------------------------------------------------------

    /// A missing arena entry reads as fully disposed.
    fn flags_of(&self, id: WidgetId) -> WidgetFlags {
        match self.widgets.get(id.slot()) {
            Some(node) => node.flags,
            None => {
                WidgetFlags::DISPOSE_NOTIFIED | WidgetFlags::RELEASED | WidgetFlags::DISPOSED
            }
        }
    }

    fn set_flags(&mut self, id: WidgetId, flags: WidgetFlags) {
        if let Some(node) = self.widgets.get_mut(id.slot()) {
            node.flags |= flags;
        }
    }

    fn clear_flags(&mut self, id: WidgetId, flags: WidgetFlags) {
        if let Some(node) = self.widgets.get_mut(id.slot()) {
            node.flags -= flags;
        }
    }

    pub(crate) fn behavior_ref<T: WidgetBehavior>(&self, id: WidgetId) -> Result<&T> {
        self.check_widget(id)?;
        let node = self.widgets.get(id.slot()).ok_or(Error::WidgetDisposed)?;
        node.behavior
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| Error::InvalidArgument {
                reason: "widget class mismatch".to_string(),
            })
    }

    pub(crate) fn behavior_mut<T: WidgetBehavior>(&mut self, id: WidgetId) -> Result<&mut T> {
        self.check_widget(id)?;
        let node = self.widgets.get_mut(id.slot()).ok_or(Error::WidgetDisposed)?;
        node.behavior
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| Error::InvalidArgument {
                reason: "widget class mismatch".to_string(),
            })
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
