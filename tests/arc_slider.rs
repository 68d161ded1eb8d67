use eframe_slider::{
    DragState, EventBus, SliderConfig, SliderEvent, SliderInput, SliderPath, SliderWidget,
    TouchTolerance,
};
use egui::{Pos2, Vec2};
use futures::StreamExt;
use futures::executor::block_on;

fn create_arc_widget() -> SliderWidget {
    // 1000x1000 available at 50% gives a 500x500 quarter ellipse with origin (100, 600)
    let mut widget = SliderWidget::new(SliderConfig::arc(3, 100.0, 200.0, 50, 50)).unwrap();
    widget.handle(SliderInput::Resize { width: 1000.0, height: 1000.0 });
    widget.setup();
    widget
}

#[test]
fn test_layout_spaces_thumbs_by_thirds() {
    let widget = create_arc_widget();
    let angles: Vec<f32> = widget.state().registry().thumbs().iter().map(|t| t.parameter()).collect();
    assert_eq!(angles, vec![30.0, 60.0, 90.0]);

    let values = widget.values();
    assert!((values[0] - 133.333).abs() < 1e-3);
    assert!((values[1] - 166.667).abs() < 1e-3);
    assert_eq!(values[2], 200.0);
}

#[test]
fn test_desired_size_includes_padding() {
    let widget = create_arc_widget();
    assert_eq!(widget.state().desired_size(), Vec2::new(700.0, 700.0));
    let SliderPath::Arc(arc) = widget.state().path() else {
        panic!("expected an arc path");
    };
    assert_eq!(arc.origin, Pos2::new(100.0, 600.0));
}

#[test]
fn test_dragging_thumb_reports_radius_vector_angle() {
    let mut widget = create_arc_widget();
    let top = widget.state().thumb_position(2).unwrap();

    widget.handle(SliderInput::Press(top + Vec2::new(5.0, 5.0)));
    assert_eq!(widget.controller().drag_state(), DragState::Dragging { thumb: 2 });

    // 45 degrees from the origin, well outside the ellipse
    widget.handle(SliderInput::Release(Pos2::new(900.0, -200.0)));
    let thumb = &widget.state().registry().thumbs()[2];
    assert!((thumb.parameter() - 45.0).abs() < 1e-3);
    assert!((thumb.value() - 150.0).abs() < 1e-3);

    // The rendered thumb sits on the ellipse along that same ray
    let position = widget.state().thumb_position(2).unwrap();
    let observed = (600.0 - position.y).atan2(position.x - 100.0).to_degrees();
    assert!((observed - 45.0).abs() < 1e-3);
}

#[test]
fn test_press_away_from_thumbs_is_ignored() {
    let mut widget = create_arc_widget();
    let before = widget.values();

    // Near the arc at 5 degrees, but no thumb is there
    widget.handle(SliderInput::Press(Pos2::new(598.0, 556.0)));
    assert_eq!(widget.controller().drag_state(), DragState::Idle);
    assert_eq!(widget.values(), before);
}

// Point `offset` px outside a flattened arc, along the ellipse normal at eccentric angle `t`
fn touch_beside_arc(widget: &SliderWidget, t: f32, offset: f32) -> Pos2 {
    let SliderPath::Arc(arc) = widget.state().path() else {
        panic!("expected an arc path");
    };
    let (sin, cos) = t.to_radians().sin_cos();
    let on_arc = Pos2::new(
        arc.origin.x + arc.semi_width * cos,
        arc.origin.y - arc.semi_height * sin,
    );
    let normal = Vec2::new(cos / arc.semi_width, -sin / arc.semi_height).normalized();
    on_arc + normal * offset
}

#[test]
fn test_near_path_accepts_presses_beside_a_flat_arc() {
    // 500x100 quarter ellipse, single thumb parked at the top end
    let config = SliderConfig::arc(1, 0.0, 100.0, 50, 10).with_touch_tolerance(TouchTolerance::NearPath);
    let mut widget = SliderWidget::new(config).unwrap();
    widget.handle(SliderInput::Resize { width: 1000.0, height: 1000.0 });
    widget.setup();

    let far = touch_beside_arc(&widget, 20.0, 120.0);
    widget.handle(SliderInput::Press(far));
    assert_eq!(widget.controller().drag_state(), DragState::Idle);

    // 45px from the arc, well inside the 60px band
    let near = touch_beside_arc(&widget, 20.0, 45.0);
    assert!(widget.state().path().distance_to(near) < 46.0);
    widget.handle(SliderInput::Press(near));
    assert_eq!(widget.controller().drag_state(), DragState::Dragging { thumb: 0 });
}

#[test]
fn test_active_range_spans_first_to_last_thumb() {
    let widget = create_arc_widget();
    let range = widget.state().active_range();
    assert_eq!((range.start, range.end), (30.0, 90.0));

    let scene = widget.scene();
    assert_eq!(scene.segments.len(), 2);
    let active = &scene.segments[1];
    let first = widget.state().thumb_position(0).unwrap();
    let last = widget.state().thumb_position(2).unwrap();
    assert!(active.points.first().unwrap().distance(first) < 1e-3);
    assert!(active.points.last().unwrap().distance(last) < 1e-3);
}

#[test]
fn test_events_reach_a_channel_consumer() {
    let mut widget = create_arc_widget();
    let mut bus = EventBus::new();
    let receiver = bus.channel();
    widget.set_listener(Box::new(bus));

    let middle = widget.state().thumb_position(1).unwrap();
    widget.handle(SliderInput::Press(middle));
    widget.handle(SliderInput::Release(middle));
    drop(widget.remove_listener());

    let events: Vec<SliderEvent> = block_on(receiver.collect());
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], SliderEvent::StartedObserving { .. }));
    assert!(matches!(events[1], SliderEvent::ValueChanged { .. }));
    assert!(matches!(events[3], SliderEvent::StoppedObserving { .. }));
    assert!((events[3].values()[1] - 166.667).abs() < 1e-2);
}
