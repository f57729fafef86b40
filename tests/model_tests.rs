//! Tests for the model layer (zone geometry, action tables, configuration).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use hotcorners::events::{classify, wheel_delta, RawEvent, RawEventKind};
use hotcorners::model::constants::*;
use hotcorners::model::{
    compute_zones, Action, ActionTable, HotCornersConfig, Point, Rect, Zone, ZoneBindings,
};
use hotcorners::{ConfigError, PointerEvent};

const FULL_HD: Rect = Rect::new(0, 0, 1920, 1080);

// === Rect Tests ===

#[test]
fn rect_right_edge_is_inclusive() {
    let r = Rect::new(0, 0, 10, 10);
    assert!(r.contains(Point::new(10, 5)));
    assert!(!r.contains(Point::new(11, 5)));
}

#[test]
fn rect_bottom_edge_is_exclusive() {
    let r = Rect::new(0, 0, 10, 10);
    assert!(r.contains(Point::new(5, 9)));
    assert!(!r.contains(Point::new(5, 10)));
}

#[test]
fn rect_left_and_top_edges_are_inclusive() {
    let r = Rect::new(-5, -5, 10, 10);
    assert!(r.contains(Point::new(-5, -5)));
    assert!(!r.contains(Point::new(-6, 0)));
    assert!(!r.contains(Point::new(0, -6)));
}

#[test]
fn degenerate_rect_contains_only_its_column() {
    // Zero height: bottom is exclusive, so nothing is inside.
    let flat = Rect::new(0, 5, 10, 5);
    assert!(!flat.contains(Point::new(5, 5)));

    // Zero width: the single column is still inside.
    let thin = Rect::new(5, 0, 5, 10);
    assert!(thin.contains(Point::new(5, 3)));
}

// === Zone Layout Tests ===

#[test]
fn zones_for_full_hd_match_layout() {
    let z = compute_zones(20, FULL_HD);
    assert_eq!(z.top_left, Rect::new(-100, -100, 20, 20));
    assert_eq!(z.top_right, Rect::new(1900, -1, 1921, 20));
    assert_eq!(z.top_band, Rect::new(640, -1, 1280, 1));
    assert_eq!(z.right_band, Rect::new(1919, 360, 1921, 720));
    assert_eq!(z.left_band, Rect::new(-1, 360, 1, 720));
}

#[test]
fn zones_follow_display_origin() {
    let display = Rect::new(-1920, 0, 0, 1080);
    let z = compute_zones(10, display);
    assert_eq!(z.top_left, Rect::new(-2020, -100, -1910, 10));
    assert_eq!(z.top_right, Rect::new(-10, -1, 1, 10));
    assert_eq!(z.top_band, Rect::new(-1280, -1, -640, 1));
}

#[test]
fn top_left_reaches_past_the_screen() {
    let z = compute_zones(DEFAULT_CORNER_SIZE, FULL_HD);
    assert!(z.top_left.contains(Point::new(-50, -50)));
    assert!(z.top_left.contains(Point::new(0, 0)));
}

#[test]
fn band_is_one_row_tall_at_the_screen_edge() {
    let z = compute_zones(DEFAULT_CORNER_SIZE, FULL_HD);
    assert!(z.top_band.contains(Point::new(960, 0)));
    assert!(z.top_band.contains(Point::new(960, -1)));
    assert!(!z.top_band.contains(Point::new(960, 1)));
}

#[test]
fn click_zone_lookup_skips_top_left() {
    let z = compute_zones(DEFAULT_CORNER_SIZE, FULL_HD);
    assert_eq!(z.click_zone_at(Point::new(0, 0)), None);
    assert_eq!(z.click_zone_at(Point::new(1915, 5)), Some(Zone::TopRight));
    assert_eq!(z.click_zone_at(Point::new(960, 0)), Some(Zone::TopBand));
    assert_eq!(z.click_zone_at(Point::new(0, 500)), Some(Zone::LeftBand));
    assert_eq!(z.click_zone_at(Point::new(1920, 500)), Some(Zone::RightBand));
    assert_eq!(z.click_zone_at(Point::new(960, 540)), None);
}

// === Event Classification Tests ===

#[test]
fn wheel_delta_sign_boundaries() {
    let cases: [(i16, PointerEvent); 5] = [
        (i16::MIN, PointerEvent::WheelDown),
        (-1, PointerEvent::WheelDown),
        (0, PointerEvent::WheelDown),
        (1, PointerEvent::WheelUp),
        (i16::MAX, PointerEvent::WheelUp),
    ];
    for (delta, expected) in cases {
        let event = RawEvent::wheel(delta, Point::new(0, 0));
        assert_eq!(wheel_delta(event.mouse_data), delta);
        assert_eq!(classify(event.kind, event.mouse_data), expected, "delta {}", delta);
    }
}

#[test]
fn buttons_classify_regardless_of_mouse_data() {
    for data in [0, 1, 0xFFFF_FFFF] {
        assert_eq!(classify(RawEventKind::LeftDown, data), PointerEvent::LeftButton);
        assert_eq!(classify(RawEventKind::RightDown, data), PointerEvent::RightButton);
        assert_eq!(classify(RawEventKind::MiddleDown, data), PointerEvent::MiddleButton);
        assert_eq!(
            classify(RawEventKind::ExtendedDown, data),
            PointerEvent::ExtendedButton
        );
    }
}

#[test]
fn unrecognised_kinds_are_unknown() {
    assert_eq!(classify(RawEventKind::Other(0x0202), 0), PointerEvent::Unknown);
    assert_eq!(classify(RawEventKind::Move, 0), PointerEvent::Move);
}

// === Config Default Tests ===

#[test]
fn config_default_values() {
    let config = HotCornersConfig::default();
    assert_eq!(config.corner_size, DEFAULT_CORNER_SIZE);
    assert_eq!(config.dwell_time_ms, DEFAULT_DWELL_TIME_MS);
    assert_eq!(config.dwell_action, Action::TaskView);
}

#[test]
fn config_default_bindings() {
    let b = HotCornersConfig::default().bindings;
    assert!(b.lookup(Zone::TopRight, PointerEvent::WheelUp).is_some());
    assert!(b.lookup(Zone::TopRight, PointerEvent::WheelDown).is_some());
    assert!(b.lookup(Zone::TopBand, PointerEvent::LeftButton).is_some());
    assert!(b.lookup(Zone::LeftBand, PointerEvent::LeftButton).is_some());
    assert!(b.right_band.is_empty());
    assert_eq!(b.binding_count(), 5);
}

// === Config Validation Tests ===

#[test]
fn validate_clamps_corner_size() {
    let mut config = HotCornersConfig::default();
    config.corner_size = 0;
    config.validate();
    assert_eq!(config.corner_size, MIN_CORNER_SIZE);

    config.corner_size = 10_000;
    config.validate();
    assert_eq!(config.corner_size, MAX_CORNER_SIZE);
}

#[test]
fn validate_clamps_dwell_time() {
    let mut config = HotCornersConfig::default();
    config.dwell_time_ms = 1;
    config.validate();
    assert_eq!(config.dwell_time_ms, MIN_DWELL_TIME_MS);

    config.dwell_time_ms = u64::MAX;
    config.validate();
    assert_eq!(config.dwell_time_ms, MAX_DWELL_TIME_MS);
}

#[test]
fn validate_keeps_values_in_range() {
    let mut config = HotCornersConfig::default();
    config.corner_size = 42;
    config.dwell_time_ms = 750;
    config.validate();
    assert_eq!(config.corner_size, 42);
    assert_eq!(config.dwell_time_ms, 750);
}

// === Config JSON Tests ===

#[test]
fn json_with_partial_fields_keeps_other_defaults() {
    let config = HotCornersConfig::from_json(r#"{"corner_size": 8}"#).unwrap();
    assert_eq!(config.corner_size, 8);
    assert_eq!(config.dwell_time_ms, DEFAULT_DWELL_TIME_MS);
    assert_eq!(config.bindings, HotCornersConfig::default().bindings);
}

#[test]
fn json_out_of_range_values_are_clamped() {
    let config =
        HotCornersConfig::from_json(r#"{"corner_size": -3, "dwell_time_ms": 99999}"#).unwrap();
    assert_eq!(config.corner_size, MIN_CORNER_SIZE);
    assert_eq!(config.dwell_time_ms, MAX_DWELL_TIME_MS);
}

#[test]
fn json_bindings_replace_defaults() {
    let json = r#"{
        "dwell_action": {"launch": "taskmgr.exe"},
        "bindings": {
            "right_band": {"middle_button": {"launch": "calc.exe"}}
        }
    }"#;
    let config = HotCornersConfig::from_json(json).unwrap();

    assert_eq!(config.dwell_action, Action::launch("taskmgr.exe"));
    assert_eq!(
        config.bindings.lookup(Zone::RightBand, PointerEvent::MiddleButton),
        Some(&Action::launch("calc.exe"))
    );
    assert!(config.bindings.top_right.is_empty());
    assert_eq!(config.bindings.binding_count(), 1);
}

#[test]
fn json_task_view_action_is_a_plain_string() {
    let json = r#"{"bindings": {"top_band": {"wheel_up": "task_view"}}}"#;
    let config = HotCornersConfig::from_json(json).unwrap();
    assert_eq!(
        config.bindings.lookup(Zone::TopBand, PointerEvent::WheelUp),
        Some(&Action::TaskView)
    );
}

#[test]
fn json_rejects_move_binding() {
    let json = r#"{"bindings": {"top_band": {"move": "task_view"}}}"#;
    assert!(matches!(
        HotCornersConfig::from_json(json),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn json_rejects_blank_launch_target() {
    let json = r#"{"bindings": {"left_band": {"left_button": {"launch": "  "}}}}"#;
    assert!(HotCornersConfig::from_json(json).is_err());
}

#[test]
fn json_rejects_unknown_zone_event_name() {
    let json = r#"{"bindings": {"top_band": {"triple_click": "task_view"}}}"#;
    assert!(HotCornersConfig::from_json(json).is_err());
}

#[test]
fn written_json_reads_back_identically() {
    let mut config = HotCornersConfig::default();
    config.corner_size = 33;
    config.bindings = ZoneBindings {
        right_band: ActionTable::new()
            .bind(PointerEvent::ExtendedButton, Action::TaskView)
            .unwrap(),
        ..Default::default()
    };

    let json = config.to_json().unwrap();
    assert_eq!(HotCornersConfig::from_json(&json).unwrap(), config);
}
