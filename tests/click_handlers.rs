use std::cell::RefCell;
use std::rc::Rc;

use plotselect::*;

const PLAIN: PointerFlags = PointerFlags {
    shift_key: false,
    ctrl_key: false,
    meta_key: false,
};
const SHIFT: PointerFlags = PointerFlags {
    shift_key: true,
    ctrl_key: false,
    meta_key: false,
};
const CMD: PointerFlags = PointerFlags {
    shift_key: false,
    ctrl_key: false,
    meta_key: true,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shared(initial: &[usize]) -> SharedStore<SampleSelection> {
    Rc::new(RefCell::new(SampleSelection::with_selected(initial.iter().copied())))
}

#[test]
fn scatter_clicks_build_and_release_a_selection() {
    init_logging();
    let store = shared(&[]);
    let on_click = create_click_handler::<_, PointerFlags>(Rc::clone(&store));

    on_click(&[1], &PLAIN);
    on_click(&[4], &SHIFT);
    on_click(&[6], &SHIFT);
    assert_eq!(store.borrow().sorted(), vec![1, 4, 6]);

    on_click(&[4], &CMD);
    assert_eq!(store.borrow().sorted(), vec![1, 6]);

    // Member of a larger selection: focus it.
    on_click(&[6], &PLAIN);
    assert_eq!(store.borrow().sorted(), vec![6]);

    // Now it is the whole selection: release it.
    on_click(&[6], &PLAIN);
    assert!(store.borrow().is_empty());
}

#[test]
fn stacked_bar_handler_walks_the_drill_down() {
    init_logging();
    let store = shared(&[]);
    let on_segment = create_stacked_bar_click_handler::<_, PointerFlags>(Rc::clone(&store));
    let bar: [usize; 4] = [10, 11, 12, 13];
    let segment: [usize; 2] = [12, 13];

    on_segment(&bar, &segment, &PLAIN);
    assert_eq!(store.borrow().sorted(), vec![10, 11, 12, 13]);
    on_segment(&bar, &segment, &PLAIN);
    assert_eq!(store.borrow().sorted(), vec![12, 13]);
    on_segment(&bar, &segment, &PLAIN);
    assert!(store.borrow().is_empty());
}

#[test]
fn stacked_bar_modifiers_touch_only_the_segment() {
    let store = shared(&[1]);
    let on_segment = create_stacked_bar_click_handler::<_, PointerFlags>(Rc::clone(&store));

    on_segment(&[10, 11, 12], &[11], &SHIFT);
    assert_eq!(store.borrow().sorted(), vec![1, 11]);
    on_segment(&[10, 11, 12], &[11], &CMD);
    assert_eq!(store.borrow().sorted(), vec![1]);
}

// Targets without duplicate indices only. With `[5, 5]` against `{5}` the
// resolver sees no exact match and replaces, while the store's set-based
// `replace_if_not_sole` clears.
#[test]
fn simple_handler_matches_resolver_for_plain_clicks() {
    let cases: [(&[usize], &[usize]); 4] = [
        (&[], &[5]),
        (&[5], &[5]),
        (&[3, 5, 7], &[5]),
        (&[1, 2], &[1, 2]),
    ];
    for (initial, target) in cases {
        let full = shared(initial);
        let simple = shared(initial);
        create_click_handler::<_, PointerFlags>(Rc::clone(&full))(target, &PLAIN);
        create_simple_click_handler::<_, PointerFlags>(Rc::clone(&simple))(target, &PLAIN);
        assert_eq!(full.borrow().sorted(), simple.borrow().sorted(), "initial {:?}", initial);
    }
}

#[test]
fn duplicate_indices_split_simple_and_full_handlers() {
    let full = shared(&[5]);
    let simple = shared(&[5]);
    create_click_handler::<_, PointerFlags>(Rc::clone(&full))(&[5, 5], &PLAIN);
    create_simple_click_handler::<_, PointerFlags>(Rc::clone(&simple))(&[5, 5], &PLAIN);
    assert_eq!(full.borrow().sorted(), vec![5]);
    assert!(simple.borrow().is_empty());
}

#[test]
fn handlers_publish_selection_events() {
    let events = SelectionEventController::new();
    let rx = events.subscribe_all();
    let store = shared(&[]);
    store.borrow_mut().attach_events(events.clone());
    let on_click = create_click_handler::<_, PointerFlags>(Rc::clone(&store));

    on_click(&[2, 3], &PLAIN);
    on_click(&[2, 3], &PLAIN);

    let selected = rx.try_recv().unwrap();
    assert_eq!(selected.kinds, SelectionEventKind::SELECTED);
    assert_eq!(selected.selected, vec![2, 3]);

    let cleared = rx.try_recv().unwrap();
    assert_eq!(cleared.kinds, SelectionEventKind::CLEARED);
    assert_eq!(cleared.revision, 2);
}

#[cfg(feature = "egui")]
#[test]
fn egui_modifiers_drive_handlers() {
    let store = shared(&[1]);
    let on_click = create_click_handler::<_, egui::Modifiers>(Rc::clone(&store));
    on_click(&[2], &egui::Modifiers::SHIFT);
    assert_eq!(store.borrow().sorted(), vec![1, 2]);
    on_click(&[1], &egui::Modifiers::COMMAND);
    assert_eq!(store.borrow().sorted(), vec![2]);
}
