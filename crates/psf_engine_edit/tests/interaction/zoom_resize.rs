//! Wheel zoom and widget resize tests

use psf_engine_edit::{EditorSettings, GlyphSet, InteractionController, MAX_DOT_HEIGHT, MAX_DOT_WIDTH, MIN_DOT_HEIGHT, MIN_DOT_WIDTH, PointerButton, Position, RepaintCounter, Size};

use super::helpers::Fixture;

#[test]
fn test_wheel_up_grows_cells() {
    let mut fx = Fixture::new();

    fx.controller.wheel(120, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(11, 11));
    assert_eq!(fx.geometry().dot_size(), Size::new(11, 11));
    assert_eq!(fx.geometry().origin(), Position::new(6, 6));
    assert_eq!(fx.repaint.count(), 1);
}

#[test]
fn test_wheel_steps_by_one_regardless_of_delta() {
    let mut fx = Fixture::new();

    fx.controller.wheel(1, &fx.font, &mut fx.repaint);
    fx.controller.wheel(480, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(12, 12));
}

#[test]
fn test_zoom_beyond_widget_is_fitted() {
    let mut fx = Fixture::new();

    for _ in 0..5 {
        fx.controller.wheel(1, &fx.font, &mut fx.repaint);
    }

    // 15 requested, but only 100 / 8 = 12 fit
    assert_eq!(fx.controller.requested_dot_size(), Size::new(15, 15));
    assert_eq!(fx.geometry().dot_size(), Size::new(12, 12));
    assert_eq!(fx.geometry().origin(), Position::new(2, 2));
}

#[test]
fn test_wheel_down_is_pinned_at_minimum() {
    let mut fx = Fixture::new();

    for _ in 0..50 {
        fx.controller.wheel(-120, &fx.font, &mut fx.repaint);
        let requested = fx.controller.requested_dot_size();
        assert!(requested.width >= MIN_DOT_WIDTH && requested.height >= MIN_DOT_HEIGHT);
    }

    assert_eq!(fx.controller.requested_dot_size(), Size::new(MIN_DOT_WIDTH, MIN_DOT_HEIGHT));
    assert_eq!(fx.geometry().dot_size(), Size::new(MIN_DOT_WIDTH, MIN_DOT_HEIGHT));
    assert_eq!(fx.repaint.count(), 50);

    fx.controller.wheel(1, &fx.font, &mut fx.repaint);
    assert_eq!(fx.controller.requested_dot_size(), Size::new(MIN_DOT_WIDTH + 1, MIN_DOT_HEIGHT + 1));
}

#[test]
fn test_zero_wheel_delta_is_ignored() {
    let mut fx = Fixture::new();

    fx.controller.wheel(0, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(10, 10));
    assert_eq!(fx.repaint.count(), 0);
}

#[test]
fn test_wheel_without_glyph_is_ignored() {
    let mut fx = Fixture::new();
    fx.font.deselect();

    fx.controller.wheel(1, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(10, 10));
    assert_eq!(fx.repaint.count(), 0);
}

#[test]
fn test_wheel_keeps_drag_and_bitmap() {
    let mut fx = Fixture::new();

    fx.press(PointerButton::Primary, 0, 0);
    fx.controller.wheel(1, &fx.font, &mut fx.repaint);

    assert!(fx.controller.is_dragging());
    assert_eq!(fx.controller.last_cell(), Some((0, 0)));
    assert_eq!(fx.set_count(), 1);

    // Hit-test follows the new geometry
    fx.move_to(7, 7);
    assert!(fx.pixel(7, 7));
}

#[test]
fn test_wheel_works_while_editing_disabled() {
    let mut fx = Fixture::new();
    fx.controller.set_editing_enabled(false);

    fx.controller.wheel(1, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(11, 11));
}

#[test]
fn test_resize_shrinks_and_recenters() {
    let mut fx = Fixture::new();

    fx.controller.resize(Size::new(50, 50), &fx.font, &mut fx.repaint);

    assert_eq!(fx.geometry().dot_size(), Size::new(6, 6));
    assert_eq!(fx.geometry().origin(), Position::new(1, 1));
    assert_eq!(fx.controller.requested_dot_size(), Size::new(10, 10));
    assert_eq!(fx.repaint.count(), 1);
}

#[test]
fn test_resize_back_restores_requested_size() {
    let mut fx = Fixture::new();

    fx.controller.resize(Size::new(50, 50), &fx.font, &mut fx.repaint);
    fx.controller.resize(Size::new(100, 100), &fx.font, &mut fx.repaint);

    assert_eq!(fx.geometry().dot_size(), Size::new(10, 10));
    assert_eq!(fx.geometry().origin(), Position::new(10, 10));
}

#[test]
fn test_resize_keeps_drag_state() {
    let mut fx = Fixture::new();

    fx.press(PointerButton::Secondary, 3, 3);
    fx.controller.resize(Size::new(300, 200), &fx.font, &mut fx.repaint);

    assert!(fx.controller.is_dragging());
    assert_eq!(fx.controller.last_cell(), Some((3, 3)));
}

#[test]
fn test_resize_without_glyph_is_remembered() {
    let mut font = GlyphSet::new(8, 16, 1).unwrap();
    let mut controller = InteractionController::new();
    let mut repaint = RepaintCounter::new();

    controller.resize(Size::new(200, 400), &font, &mut repaint);
    assert!(controller.geometry().is_none());
    assert_eq!(controller.widget_size(), Size::new(200, 400));

    font.select(0).unwrap();
    controller.glyph_changed(&font, &mut repaint);

    let geometry = controller.geometry().unwrap();
    assert_eq!(geometry.dot_size(), Size::new(20, 20));
    assert_eq!(geometry.origin(), Position::new(20, 40));
    assert_eq!(repaint.count(), 2);
}

#[test]
fn test_set_requested_dot_size_is_clamped() {
    let mut fx = Fixture::new();

    fx.controller.set_requested_dot_size(Size::new(0, -5), &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(MIN_DOT_WIDTH, MIN_DOT_HEIGHT));
    assert_eq!(fx.geometry().dot_size(), Size::new(MIN_DOT_WIDTH, MIN_DOT_HEIGHT));
}

#[test]
fn test_huge_requested_size_is_capped_and_fitted() {
    let mut fx = Fixture::new();

    fx.controller.set_requested_dot_size(Size::new(i32::MAX, 2_000_000_000), &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(MAX_DOT_WIDTH, MAX_DOT_HEIGHT));
    assert_eq!(fx.geometry().dot_size(), Size::new(12, 12));
    assert_eq!(fx.geometry().origin(), Position::new(2, 2));
}

#[test]
fn test_huge_settings_size_is_capped() {
    let settings = EditorSettings {
        dot_width: 2_000_000_000,
        dot_height: 2_000_000_000,
        ..Default::default()
    };
    let mut font = GlyphSet::new(8, 8, 256).unwrap();
    font.select(b'A' as usize).unwrap();
    let mut repaint = RepaintCounter::new();
    let mut controller = InteractionController::from_settings(&settings);

    controller.resize(Size::new(100, 100), &font, &mut repaint);

    assert_eq!(controller.requested_dot_size(), Size::new(MAX_DOT_WIDTH, MAX_DOT_HEIGHT));
    let geometry = controller.geometry().unwrap();
    assert_eq!(geometry.dot_size(), Size::new(12, 12));
    assert_eq!(geometry.origin(), Position::new(2, 2));
    assert_eq!(controller.hit_test(Position::new(3, 3)), Some((0, 0)));
}

#[test]
fn test_wheel_up_is_pinned_at_maximum() {
    let mut fx = Fixture::with_sizes(Size::new(8, 8), Size::new(4000, 4000), Size::new(MAX_DOT_WIDTH, MAX_DOT_HEIGHT));

    fx.controller.wheel(120, &fx.font, &mut fx.repaint);
    fx.controller.wheel(120, &fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.requested_dot_size(), Size::new(MAX_DOT_WIDTH, MAX_DOT_HEIGHT));
    assert_eq!(fx.geometry().dot_size(), Size::new(MAX_DOT_WIDTH, MAX_DOT_HEIGHT));
    // 4000 - 8 * 256 = 1952
    assert_eq!(fx.geometry().origin(), Position::new(976, 976));
}
