//! Editing gate, missing glyph and glyph switching tests

use psf_engine_edit::{DragState, EditorSettings, GlyphProvider, GlyphSet, InteractionController, PointerButton, Position, RepaintCounter, Size};

use super::helpers::Fixture;

#[test]
fn test_editing_disabled_ignores_press() {
    let mut fx = Fixture::new();
    fx.controller.set_editing_enabled(false);

    fx.press(PointerButton::Primary, 1, 1);

    assert_eq!(fx.set_count(), 0);
    assert_eq!(fx.controller.drag_state(), DragState::Idle);
    assert_eq!(fx.repaint.count(), 0);
}

#[test]
fn test_disabling_editing_ends_drag() {
    let mut fx = Fixture::new();

    fx.press(PointerButton::Primary, 1, 1);
    fx.controller.set_editing_enabled(false);
    fx.move_to(1, 2);

    assert!(!fx.controller.is_dragging());
    assert!(!fx.pixel(1, 2));

    fx.controller.set_editing_enabled(true);
    fx.move_to(1, 3);
    assert!(!fx.pixel(1, 3));
}

#[test]
fn test_no_glyph_ignores_pointer() {
    let mut fx = Fixture::new();
    let pt = fx.cell_center(0, 0);
    fx.font.deselect();

    fx.controller.pointer_down(PointerButton::Primary, pt, &mut fx.font, &mut fx.repaint);

    assert!(!fx.controller.is_dragging());
    assert_eq!(fx.repaint.count(), 0);
}

#[test]
fn test_glyph_changed_ends_drag_and_relayouts() {
    let mut fx = Fixture::new();

    fx.press(PointerButton::Primary, 0, 0);
    fx.font.select(b'B' as usize).unwrap();
    fx.controller.glyph_changed(&fx.font, &mut fx.repaint);

    assert_eq!(fx.controller.drag_state(), DragState::Idle);
    assert!(fx.controller.geometry().is_some());
    assert_eq!(fx.set_count(), 0);

    // The drag painted into 'A', not into 'B'
    assert!(fx.font.glyph(b'A' as usize).unwrap().get_pixel(0, 0));
}

#[test]
fn test_glyph_changed_to_none_drops_geometry() {
    let mut fx = Fixture::new();

    fx.font.deselect();
    fx.controller.glyph_changed(&fx.font, &mut fx.repaint);

    assert!(fx.controller.geometry().is_none());
    assert_eq!(fx.controller.hit_test(Position::new(15, 15)), None);
}

#[test]
fn test_press_computes_missing_geometry() {
    let mut font = GlyphSet::new(8, 8, 1).unwrap();
    let mut controller = InteractionController::new();
    let mut repaint = RepaintCounter::new();
    controller.resize(Size::new(100, 100), &font, &mut repaint);

    // Host selects a glyph without notifying the controller
    font.select(0).unwrap();
    controller.set_requested_dot_size(Size::new(10, 10), &font, &mut repaint);
    font.deselect();
    controller.glyph_changed(&font, &mut repaint);
    font.select(0).unwrap();
    controller.pointer_down(PointerButton::Primary, Position::new(15, 15), &mut font, &mut repaint);

    assert!(font.current_glyph().get_pixel(0, 0));
}

#[test]
fn test_settings_disable_editing() {
    let settings = EditorSettings {
        editing_enabled: false,
        dot_width: 12,
        dot_height: 14,
        ..Default::default()
    };
    let controller = InteractionController::from_settings(&settings);

    assert!(!controller.editing_enabled());
    assert_eq!(controller.requested_dot_size(), Size::new(12, 14));
}

#[test]
fn test_font_marked_dirty_by_edit() {
    let mut fx = Fixture::new();
    assert!(!fx.font.is_dirty());

    fx.press(PointerButton::Primary, 0, 0);

    assert!(fx.font.is_dirty());
    fx.font.mark_clean();
    assert!(!fx.font.is_dirty());
}
