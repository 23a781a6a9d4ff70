use std::rc::Rc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trellis_ui::{Button, Composite, Display, Event, EventKind, StyleFlags};

fn bench_dispatch(c: &mut Criterion) {
    let mut display = Display::new();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();
    let button = Button::new(&mut display, root, StyleFlags::NONE).unwrap();
    for _ in 0..8 {
        display
            .add_listener(
                button.id(),
                EventKind::Selection,
                Rc::new(|_, event| {
                    black_box(event.detail);
                }),
            )
            .unwrap();
    }

    c.bench_function("notify_8_listeners", |b| {
        b.iter(|| {
            let mut event = Event::new(EventKind::Selection);
            display
                .notify_listeners(button.id(), EventKind::Selection, &mut event)
                .unwrap();
        })
    });
}

fn bench_create_dispose(c: &mut Criterion) {
    let mut display = Display::new();
    let root = Composite::root(&mut display, StyleFlags::NONE).unwrap();

    c.bench_function("create_dispose_button", |b| {
        b.iter(|| {
            let button = Button::new(&mut display, root, StyleFlags::NONE).unwrap();
            display.dispose(black_box(button.id())).unwrap();
        })
    });

    c.bench_function("create_dispose_subtree", |b| {
        b.iter(|| {
            let composite = Composite::new(&mut display, root, StyleFlags::NONE).unwrap();
            for _ in 0..4 {
                Button::new(&mut display, composite, StyleFlags::NONE).unwrap();
            }
            display.dispose(composite.id()).unwrap();
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_create_dispose);
criterion_main!(benches);
