mod common;

use approx::assert_relative_eq;
use reframe_core::config::{WidgetConfig, ZoomConfig};
use reframe_core::interaction::{DragState, PointerEvent};
use reframe_core::view::state::fit_scale;
use reframe_core::view::{ViewState, ZoomDirection};
use reframe_core::widget::Effect;
use reframe_core::WidgetEvent;

use common::{counting_widget, png_file, widget_with_image, RED};

// ---------------------------------------------------------------------------
// Fit on load
// ---------------------------------------------------------------------------

#[test]
fn test_fit_scale_is_min_of_axis_ratios() {
    for &(w, h) in &[(100u32, 60u32), (1000, 1000), (50, 400), (4000, 300), (1, 1)] {
        let expected = (500.0 / w as f64).min(300.0 / h as f64);
        assert_eq!(fit_scale(500, 300, w, h), expected, "image {w}x{h}");
    }
}

#[test]
fn test_fit_image_zeroes_offsets() {
    let mut view = ViewState {
        scale: 7.0,
        offset_x: 123.0,
        offset_y: -45.0,
        image_loaded: false,
    };
    view.fit_image(500, 300, 1000, 200);

    assert_eq!(view.scale, 0.5);
    assert_eq!(view.offset_x, 0.0);
    assert_eq!(view.offset_y, 0.0);
    assert!(view.image_loaded);
}

#[test]
fn test_loading_new_image_resets_pan_and_zoom() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 10.0, y: 10.0 }))
        .unwrap();
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Move { x: 40.0, y: 5.0 }))
        .unwrap();
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: -1.0 }))
        .unwrap();

    widget.load_file(png_file("second.png", 250, 1000, RED)).unwrap();

    let view = widget.view();
    assert_eq!(view.scale, fit_scale(500, 300, 250, 1000));
    assert_eq!(view.offset_x, 0.0);
    assert_eq!(view.offset_y, 0.0);
}

// ---------------------------------------------------------------------------
// Drag accumulation
// ---------------------------------------------------------------------------

#[test]
fn test_drag_deltas_accumulate() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    let path = [(20.0, 30.0), (25.0, 28.0), (60.0, 90.0), (10.0, 10.0), (300.0, 299.0)];

    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 0.0, y: 0.0 }))
        .unwrap();
    let mut rendered = 0;
    for &(x, y) in &path {
        let effect = widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Move { x, y }))
            .unwrap();
        if matches!(effect, Effect::Rendered) {
            rendered += 1;
        }
    }

    assert_eq!(rendered, path.len());
    // Sum of deltas telescopes to last position minus the press position.
    assert_eq!(widget.view().offset_x, 300.0);
    assert_eq!(widget.view().offset_y, 299.0);
}

#[test]
fn test_drag_sum_matches_direct_deltas() {
    let deltas = [(3.5, -2.0), (-10.0, 4.25), (0.0, 0.0), (120.0, -300.0)];
    let mut view = ViewState::default();
    for &(dx, dy) in &deltas {
        view.apply_drag(dx, dy);
    }
    let sum_x: f64 = deltas.iter().map(|d| d.0).sum();
    let sum_y: f64 = deltas.iter().map(|d| d.1).sum();
    assert_relative_eq!(view.offset_x, sum_x);
    assert_relative_eq!(view.offset_y, sum_y);
}

#[test]
fn test_move_without_press_is_ignored() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    let effect = widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Move { x: 50.0, y: 50.0 }))
        .unwrap();
    assert!(matches!(effect, Effect::Ignored));
    assert_eq!(widget.view().offset_x, 0.0);
}

#[test]
fn test_leave_ends_drag() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 5.0, y: 5.0 }))
        .unwrap();
    assert!(widget.drag_state().is_dragging());

    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Leave))
        .unwrap();
    assert_eq!(widget.drag_state(), DragState::Idle);

    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Move { x: 80.0, y: 80.0 }))
        .unwrap();
    assert_eq!(widget.view().offset_x, 0.0);
    assert_eq!(widget.view().offset_y, 0.0);
}

#[test]
fn test_up_ends_drag() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 5.0, y: 5.0 }))
        .unwrap();
    let effect = widget.dispatch(WidgetEvent::Pointer(PointerEvent::Up)).unwrap();
    assert!(matches!(effect, Effect::Updated));
    assert!(!widget.drag_state().is_dragging());
}

#[test]
fn test_press_outside_preview_does_not_start_drag() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    let effect = widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 501.0, y: 10.0 }))
        .unwrap();
    assert!(matches!(effect, Effect::Ignored));
    assert!(!widget.drag_state().is_dragging());
}

#[test]
fn test_pan_is_unbounded() {
    let (mut widget, _) = widget_with_image(100, 60, RED);
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 0.0, y: 0.0 }))
        .unwrap();
    for _ in 0..20 {
        widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Move { x: 500.0, y: 300.0 }))
            .unwrap();
        widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Down { x: 0.0, y: 0.0 }))
            .unwrap();
    }
    assert_eq!(widget.view().offset_x, 10_000.0);
    assert_eq!(widget.view().offset_y, 6_000.0);
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_in_then_out_is_approximately_identity() {
    let zoom = ZoomConfig::default();
    for k in [1, 5, 20] {
        let mut view = ViewState {
            scale: 0.8,
            ..ViewState::default()
        };
        for _ in 0..k {
            view.apply_zoom(ZoomDirection::In, &zoom);
        }
        for _ in 0..k {
            view.apply_zoom(ZoomDirection::Out, &zoom);
        }
        // 1.05^k * 0.95^k = 0.9975^k, so the round trip is only approximate.
        let expected = 0.8 * (1.05f64 * 0.95).powi(k);
        assert_relative_eq!(view.scale, expected, max_relative = 1e-12);
        assert_relative_eq!(view.scale, 0.8, max_relative = 0.06);
    }
}

#[test]
fn test_wheel_direction_selects_factor() {
    let (mut widget, _) = widget_with_image(500, 300, RED);
    assert_eq!(widget.view().scale, 1.0);

    let up = WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: -100.0 });
    assert!(up.suppresses_default());
    widget.dispatch(up).unwrap();
    assert_relative_eq!(widget.view().scale, 1.05);

    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: 100.0 }))
        .unwrap();
    assert_relative_eq!(widget.view().scale, 1.05 * 0.95);
}

#[test]
fn test_zoom_is_unclamped_by_default() {
    let (mut widget, _) = widget_with_image(500, 300, RED);
    for _ in 0..400 {
        widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: 1.0 }))
            .unwrap();
    }
    let scale = widget.view().scale;
    assert!(scale > 0.0);
    assert!(scale < 1e-8);
}

#[test]
fn test_zoom_limits_clamp_scale() {
    let config = WidgetConfig {
        zoom: ZoomConfig {
            min_scale: Some(0.5),
            max_scale: Some(2.0),
            ..ZoomConfig::default()
        },
        ..WidgetConfig::default()
    };
    let (mut widget, _) = counting_widget(config);
    widget.load_file(png_file("a.png", 500, 300, RED)).unwrap();

    for _ in 0..100 {
        widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: -1.0 }))
            .unwrap();
    }
    assert_eq!(widget.view().scale, 2.0);

    for _ in 0..100 {
        widget
            .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: 1.0 }))
            .unwrap();
    }
    assert_eq!(widget.view().scale, 0.5);
}

#[test]
fn test_interaction_without_image_mutates_state() {
    let (mut widget, _) = counting_widget(WidgetConfig::default());
    widget
        .dispatch(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: -1.0 }))
        .unwrap();
    assert_relative_eq!(widget.view().scale, 1.05);
    assert!(widget.preview().is_blank());
}
