use crate::Colors;

#[test]
fn off_paints_nothing() {
    let c = Colors::new(false);

    assert!(!c.is_enabled());
    assert_eq!(c, Colors::default());
    assert_eq!(c.paint_label("ab$"), "ab$");
}

#[test]
fn on_wraps_and_resets() {
    let c = Colors::new(true);

    assert!(c.is_enabled());
    assert_eq!(c.paint_leaf("7"), "\x1b[32m7\x1b[0m");
    assert_eq!(c.paint_link("~> b"), "\x1b[2m~> b\x1b[0m");
}
