use super::*;

fn sample(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, viewport_height, document_height }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(UiState::default().theme, Theme::Dark);
}

#[test]
fn theme_toggle_is_an_involution() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn theme_class_names() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn theme_toggle_icon_shows_target_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
    assert_eq!(Theme::Light.toggle_icon(), "☾");
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_starts_closed_and_toggles() {
    let mut ui = UiState::default();
    assert!(!ui.menu_open);
    ui.toggle_menu();
    assert!(ui.menu_open);
    ui.toggle_menu();
    assert!(!ui.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut ui = UiState::default();
    ui.toggle_menu();
    ui.close_menu();
    ui.close_menu();
    assert!(!ui.menu_open);
}

// =============================================================
// Scroll chrome
// =============================================================

#[test]
fn record_scroll_tracks_peak_viewport() {
    let mut ui = UiState::default();
    ui.record_scroll(sample(0.0, 800.0, 4_000.0));
    ui.record_scroll(sample(0.0, 500.0, 4_000.0));
    assert_eq!(ui.peak_viewport_height, 800.0);
    assert_eq!(ui.scroll.viewport_height, 500.0);
}

#[test]
fn back_to_top_follows_latest_sample() {
    let mut ui = UiState::default();
    assert!(!ui.back_to_top_visible());
    ui.record_scroll(sample(450.0, 800.0, 4_000.0));
    assert!(ui.back_to_top_visible());
    ui.record_scroll(sample(10.0, 800.0, 4_000.0));
    assert!(!ui.back_to_top_visible());
}

#[test]
fn footer_starts_hidden_until_scroll_is_sampled() {
    let mut ui = UiState::default();
    assert_eq!(ui.footer_offset_percent(), 100.0);

    ui.record_scroll(sample(3_200.0, 800.0, 4_000.0));
    assert_eq!(ui.footer_offset_percent(), 0.0);
}

#[test]
fn footer_hidden_while_keyboard_open_even_at_bottom() {
    let mut ui = UiState::default();
    ui.record_scroll(sample(3_200.0, 800.0, 4_000.0));
    assert_eq!(ui.footer_offset_percent(), 0.0);

    ui.record_scroll(sample(3_600.0, 400.0, 4_000.0));
    assert!(ui.keyboard_likely_open());
    assert_eq!(ui.footer_offset_percent(), 100.0);
}
