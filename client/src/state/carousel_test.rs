use super::*;

// =============================================================
// Carousel
// =============================================================

#[test]
fn advance_wraps_from_last_to_first() {
    let mut c = Carousel::new(3);
    c.advance();
    c.advance();
    assert_eq!(c.index(), 2);
    c.advance();
    assert_eq!(c.index(), 0);
}

#[test]
fn retreat_wraps_from_first_to_last() {
    let mut c = Carousel::new(4);
    c.retreat();
    assert_eq!(c.index(), 3);
    c.retreat();
    assert_eq!(c.index(), 2);
}

#[test]
fn index_stays_in_range_over_long_walks() {
    for len in 1..=6 {
        let mut c = Carousel::new(len);
        for step in 0..50 {
            if step % 3 == 0 {
                c.retreat();
            } else {
                c.advance();
            }
            assert!(c.index() < len, "index {} out of range for len {len}", c.index());
        }
    }
}

#[test]
fn single_image_carousel_never_moves() {
    let mut c = Carousel::new(1);
    c.advance();
    c.retreat();
    assert_eq!(c.index(), 0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    c.advance();
    c.retreat();
    c.go_to(0);
    assert!(c.is_empty());
    assert_eq!(c.index(), 0);
    assert_eq!(c.position_label(), None);
}

#[test]
fn go_to_ignores_out_of_range() {
    let mut c = Carousel::new(5);
    c.go_to(3);
    assert_eq!(c.index(), 3);
    c.go_to(5);
    assert_eq!(c.index(), 3);
}

#[test]
fn position_label_is_one_based() {
    let mut c = Carousel::new(20);
    assert_eq!(c.position_label().as_deref(), Some("1 / 20"));
    c.retreat();
    assert_eq!(c.position_label().as_deref(), Some("20 / 20"));
}

// =============================================================
// SwipeTracker
// =============================================================

#[test]
fn drag_left_past_threshold_advances() {
    let mut s = SwipeTracker::default();
    s.begin(300.0);
    assert_eq!(s.end(300.0 - SWIPE_THRESHOLD_PX - 1.0), Some(SwipeDirection::Next));
    assert!(!s.is_tracking());
}

#[test]
fn drag_right_past_threshold_retreats() {
    let mut s = SwipeTracker::default();
    s.begin(100.0);
    assert_eq!(s.end(100.0 + SWIPE_THRESHOLD_PX + 1.0), Some(SwipeDirection::Prev));
}

#[test]
fn short_drag_is_ignored() {
    let mut s = SwipeTracker::default();
    s.begin(100.0);
    assert_eq!(s.end(100.0 + SWIPE_THRESHOLD_PX), None);
}

#[test]
fn end_without_begin_is_ignored() {
    let mut s = SwipeTracker::default();
    assert_eq!(s.end(0.0), None);
    s.begin(10.0);
    s.cancel();
    assert_eq!(s.end(500.0), None);
}

#[test]
fn swipe_drives_carousel_with_wraparound() {
    let mut c = Carousel::new(3);
    let mut s = SwipeTracker::default();
    s.begin(200.0);
    if let Some(dir) = s.end(400.0) {
        c.apply(dir);
    }
    assert_eq!(c.index(), 2);
}
