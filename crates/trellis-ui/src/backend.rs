//! Platform seam for native presentation resources.
//!
//! The toolkit core never renders; each widget wraps exactly one native
//! handle obtained through [`PlatformBackend`]. The trait is object-safe so
//! real platform implementations and the recording mock used in tests are
//! interchangeable.

use trellis_core::alloc::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::event::EventKind;
use crate::style::StyleFlags;
use crate::widget::WidgetClass;

/// Identifier of one native presentation resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub u64);

/// Widget direction applied to a native handle after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    LeftToRight,
    RightToLeft,
}

/// Operations the lifecycle core consumes from a platform.
pub trait PlatformBackend {
    /// Creates the native resource for a widget of `class`.
    fn create_handle(
        &mut self,
        class: WidgetClass,
        parent: Option<NativeHandle>,
        style: StyleFlags,
    ) -> Result<NativeHandle>;

    /// Destroys `handle` and every descendant handle in one native
    /// operation. During a destroying cascade this is called exactly once,
    /// at the cascade root.
    fn destroy_handle(&mut self, handle: NativeHandle);

    /// Applies the widget direction to the handle.
    fn set_orientation(&mut self, handle: NativeHandle, orientation: Orientation);

    /// Wires the native notifications a widget kind wants forwarded into
    /// the toolkit's dispatch path.
    fn hook_events(&mut self, handle: NativeHandle, kinds: &[EventKind]);
}

/// In-process backend with no presentation at all.
///
/// Tracks handle parentage so that destroying a handle frees its whole
/// subtree, matching what a real windowing system does.
pub struct HeadlessBackend {
    next: u64,
    live: HashSet<NativeHandle>,
    children: HashMap<NativeHandle, Vec<NativeHandle>>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            next: 1,
            live: HashSet::new(),
            children: HashMap::new(),
        }
    }

    /// Returns whether the backend still considers `handle` allocated.
    pub fn is_live(&self, handle: NativeHandle) -> bool {
        self.live.contains(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn destroy_subtree(&mut self, handle: NativeHandle) {
        self.live.remove(&handle);
        if let Some(children) = self.children.remove(&handle) {
            for child in children {
                self.destroy_subtree(child);
            }
        }
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBackend for HeadlessBackend {
    fn create_handle(
        &mut self,
        _class: WidgetClass,
        parent: Option<NativeHandle>,
        _style: StyleFlags,
    ) -> Result<NativeHandle> {
        if let Some(parent) = parent {
            if !self.live.contains(&parent) {
                return Err(Error::BackendFailure {
                    reason: format!("parent handle {:?} is not allocated", parent),
                });
            }
        }
        let handle = NativeHandle(self.next);
        self.next += 1;
        self.live.insert(handle);
        if let Some(parent) = parent {
            self.children.entry(parent).or_default().push(handle);
        }
        Ok(handle)
    }

    fn destroy_handle(&mut self, handle: NativeHandle) {
        self.destroy_subtree(handle);
    }

    fn set_orientation(&mut self, _handle: NativeHandle, _orientation: Orientation) {}

    fn hook_events(&mut self, _handle: NativeHandle, _kinds: &[EventKind]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_destroy() {
        let mut backend = HeadlessBackend::new();
        let handle = backend
            .create_handle(WidgetClass::Composite, None, StyleFlags::NONE)
            .unwrap();
        assert!(backend.is_live(handle));
        backend.destroy_handle(handle);
        assert!(!backend.is_live(handle));
    }

    #[test]
    fn test_destroy_frees_subtree() {
        let mut backend = HeadlessBackend::new();
        let root = backend
            .create_handle(WidgetClass::Composite, None, StyleFlags::NONE)
            .unwrap();
        let child = backend
            .create_handle(WidgetClass::Composite, Some(root), StyleFlags::NONE)
            .unwrap();
        let leaf = backend
            .create_handle(WidgetClass::Button, Some(child), StyleFlags::NONE)
            .unwrap();
        backend.destroy_handle(root);
        assert!(!backend.is_live(root));
        assert!(!backend.is_live(child));
        assert!(!backend.is_live(leaf));
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn test_create_under_dead_parent_fails() {
        let mut backend = HeadlessBackend::new();
        let root = backend
            .create_handle(WidgetClass::Composite, None, StyleFlags::NONE)
            .unwrap();
        backend.destroy_handle(root);
        let result = backend.create_handle(WidgetClass::Button, Some(root), StyleFlags::NONE);
        assert!(matches!(result, Err(Error::BackendFailure { .. })));
    }
}
