#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.origin(), Point::new(10.0, 20.0));
}

#[test]
fn moved_to_keeps_size() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0).moved_to(Point::new(1.0, 2.0));
    assert_eq!(r, Rect::new(1.0, 2.0, 30.0, 40.0));
}

#[test]
fn contains_with_margin_inside() {
    let vp = Viewport::new(800.0, 600.0);
    assert!(vp.contains_with_margin(&Rect::new(12.0, 12.0, 100.0, 40.0), 12.0));
    assert!(vp.contains_with_margin(&Rect::new(688.0, 548.0, 100.0, 40.0), 12.0));
}

#[test]
fn contains_with_margin_rejects_each_edge() {
    let vp = Viewport::new(800.0, 600.0);
    assert!(!vp.contains_with_margin(&Rect::new(11.0, 100.0, 100.0, 40.0), 12.0));
    assert!(!vp.contains_with_margin(&Rect::new(100.0, 11.0, 100.0, 40.0), 12.0));
    assert!(!vp.contains_with_margin(&Rect::new(689.0, 100.0, 100.0, 40.0), 12.0));
    assert!(!vp.contains_with_margin(&Rect::new(100.0, 549.0, 100.0, 40.0), 12.0));
}
