//! End-to-end lifecycle tests over a recording platform backend.

use trellis_test_utils::{BackendCall, MockBackend};
use trellis_ui::{
    Button, Composite, Display, Error, EventKind, StyleFlags, Text,
};

fn mock_display() -> (Display, trellis_test_utils::CallRecord) {
    let (backend, calls) = MockBackend::new();
    (Display::with_backend(Box::new(backend)), calls)
}

#[test]
fn cascade_issues_a_single_native_destroy_at_the_root() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
    let composite = Composite::new(&mut display, root, StyleFlags::NONE).unwrap();
    let a = Button::new(&mut display, composite, StyleFlags::NONE).unwrap();
    let b = Button::new(&mut display, composite, StyleFlags::NONE).unwrap();
    let root_handle = display.native_handle(root.id()).unwrap();

    display.dispose(root.id()).unwrap();

    assert_eq!(calls.count_destroys(), 1);
    assert_eq!(calls.destroyed_handles(), vec![root_handle]);
    for id in [root.id(), composite.id(), a.id(), b.id()] {
        assert!(display.is_disposed(id));
    }
}

#[test]
fn disposing_a_leaf_destroys_only_its_own_handle() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
    let a = Button::new(&mut display, root, StyleFlags::NONE).unwrap();
    let b = Button::new(&mut display, root, StyleFlags::NONE).unwrap();
    let a_handle = display.native_handle(a.id()).unwrap();

    display.dispose(a.id()).unwrap();

    assert_eq!(calls.destroyed_handles(), vec![a_handle]);
    assert!(display.is_disposed(a.id()));
    assert!(!display.is_disposed(b.id()));
    assert_eq!(display.children(root.id()).unwrap(), vec![b.id()]);
}

#[test]
fn construction_runs_create_orient_hook_in_order() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
    calls.clear();

    let text = Text::new(&mut display, root, StyleFlags::SINGLE).unwrap();
    let handle = display.native_handle(text.id()).unwrap();

    let recorded = calls.calls();
    assert!(matches!(
        recorded[0],
        BackendCall::CreateHandle {
            class: trellis_ui::WidgetClass::Text,
            ..
        }
    ));
    assert!(matches!(
        recorded[1],
        BackendCall::SetOrientation { handle: h, .. } if h == handle
    ));
    match &recorded[2] {
        BackendCall::HookEvents { handle: h, kinds } => {
            assert_eq!(*h, handle);
            assert!(kinds.contains(&EventKind::Modify));
        }
        other => panic!("expected HookEvents, got {:?}", other),
    }
}

#[test]
fn failed_handle_creation_leaves_no_widget_behind() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
    assert_eq!(display.widget_count(), 1);

    calls.fail_creates(true);
    let result = Button::new(&mut display, root, StyleFlags::NONE);
    assert!(matches!(result, Err(Error::BackendFailure { .. })));
    assert_eq!(display.widget_count(), 1);
    assert!(display.children(root.id()).unwrap().is_empty());

    calls.fail_creates(false);
    let button = Button::new(&mut display, root, StyleFlags::NONE).unwrap();
    assert!(!display.is_disposed(button.id()));
}

#[test]
fn orientation_is_applied_to_the_native_handle() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::RIGHT_TO_LEFT).unwrap();
    let handle = display.native_handle(root.id()).unwrap();
    assert!(calls.calls().contains(&BackendCall::SetOrientation {
        handle,
        orientation: trellis_ui::Orientation::RightToLeft,
    }));
}

#[test]
fn scrollable_composite_creates_satellite_handles_under_owner() {
    let (mut display, calls) = mock_display();
    let root = Composite::root(&mut display, StyleFlags::H_SCROLL).unwrap();
    let owner_handle = display.native_handle(root.id()).unwrap();
    let bar = root.horizontal_bar(&display).unwrap().unwrap();
    let bar_handle = display.native_handle(bar.id()).unwrap();

    assert!(calls.calls().iter().any(|c| matches!(
        c,
        BackendCall::CreateHandle {
            class: trellis_ui::WidgetClass::ScrollBar,
            parent: Some(p),
            ..
        } if *p == owner_handle
    )));

    // The owner's single destroy covers the satellite's native handle.
    display.dispose(root.id()).unwrap();
    assert_eq!(calls.count_destroys(), 1);
    assert!(display.is_disposed(bar.id()));
    assert_eq!(display.find_widget(bar_handle), None);
}
