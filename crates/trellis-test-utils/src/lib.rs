//! Test utilities for the Trellis widget toolkit.
//!
//! The main component is [`MockBackend`], a [`PlatformBackend`] that records
//! every native operation without owning any presentation resources, so
//! tests can verify exactly which native calls the lifecycle core issued.
//!
//! # Example
//!
//! ```rust
//! use trellis_test_utils::MockBackend;
//! use trellis_ui::{Composite, Display, StyleFlags};
//!
//! let (backend, calls) = MockBackend::new();
//! let mut display = Display::with_backend(Box::new(backend));
//!
//! let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
//! display.dispose(root.id()).unwrap();
//!
//! assert_eq!(calls.count_creates(), 1);
//! assert_eq!(calls.count_destroys(), 1);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use trellis_ui::{
    Error, EventKind, NativeHandle, Orientation, PlatformBackend, Result, StyleFlags, WidgetClass,
};

/// Records one native operation for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    CreateHandle {
        class: WidgetClass,
        parent: Option<NativeHandle>,
        style: StyleFlags,
    },
    DestroyHandle {
        handle: NativeHandle,
    },
    SetOrientation {
        handle: NativeHandle,
        orientation: Orientation,
    },
    HookEvents {
        handle: NativeHandle,
        kinds: Vec<EventKind>,
    },
}

/// Shared view over the calls a [`MockBackend`] has recorded.
///
/// Methods take `&self`; the record lives behind a `Mutex` so the backend
/// can log from `&mut self` trait methods while tests hold this handle.
#[derive(Clone, Default)]
pub struct CallRecord {
    calls: Arc<Mutex<Vec<BackendCall>>>,
    fail_creates: Arc<AtomicBool>,
}

impl CallRecord {
    /// Makes every subsequent `create_handle` call on the observed backend
    /// fail, for testing construction unwinding.
    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    pub fn count_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, BackendCall::CreateHandle { .. }))
            .count()
    }

    pub fn count_destroys(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, BackendCall::DestroyHandle { .. }))
            .count()
    }

    pub fn count_hook_events(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, BackendCall::HookEvents { .. }))
            .count()
    }

    /// The handles passed to `destroy_handle`, in call order.
    pub fn destroyed_handles(&self) -> Vec<NativeHandle> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                BackendCall::DestroyHandle { handle } => Some(*handle),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, call: BackendCall) {
        self.calls.lock().push(call);
    }
}

/// A [`PlatformBackend`] that records operations instead of performing
/// them.
///
/// Destroying a handle implicitly frees its descendants, like a real
/// windowing system; the mock tracks parentage so `is_live` reflects that.
pub struct MockBackend {
    record: CallRecord,
    next: u64,
    live: Vec<(NativeHandle, Option<NativeHandle>)>,
}

impl MockBackend {
    /// Creates a mock backend and the call record observing it.
    pub fn new() -> (Self, CallRecord) {
        let record = CallRecord::default();
        let backend = Self {
            record: record.clone(),
            next: 1,
            live: Vec::new(),
        };
        (backend, record)
    }

    pub fn is_live(&self, handle: NativeHandle) -> bool {
        self.live.iter().any(|(h, _)| *h == handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn remove_subtree(&mut self, handle: NativeHandle) {
        let children: Vec<NativeHandle> = self
            .live
            .iter()
            .filter(|(_, parent)| *parent == Some(handle))
            .map(|(h, _)| *h)
            .collect();
        self.live.retain(|(h, _)| *h != handle);
        for child in children {
            self.remove_subtree(child);
        }
    }
}

impl PlatformBackend for MockBackend {
    fn create_handle(
        &mut self,
        class: WidgetClass,
        parent: Option<NativeHandle>,
        style: StyleFlags,
    ) -> Result<NativeHandle> {
        if self.record.fail_creates.load(Ordering::SeqCst) {
            return Err(Error::BackendFailure {
                reason: "mock backend configured to fail".to_string(),
            });
        }
        self.record.push(BackendCall::CreateHandle {
            class,
            parent,
            style,
        });
        let handle = NativeHandle(self.next);
        self.next += 1;
        self.live.push((handle, parent));
        Ok(handle)
    }

    fn destroy_handle(&mut self, handle: NativeHandle) {
        self.record.push(BackendCall::DestroyHandle { handle });
        self.remove_subtree(handle);
    }

    fn set_orientation(&mut self, handle: NativeHandle, orientation: Orientation) {
        self.record.push(BackendCall::SetOrientation {
            handle,
            orientation,
        });
    }

    fn hook_events(&mut self, handle: NativeHandle, kinds: &[EventKind]) {
        self.record.push(BackendCall::HookEvents {
            handle,
            kinds: kinds.to_vec(),
        });
    }
}
