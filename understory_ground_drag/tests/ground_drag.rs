// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end swipes through [`GroundDrag`] with a real gesture and camera.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use understory_ground_drag::{
    DragEvent, GroundDrag, PerspectiveCamera, SwipeGesture, SwipeSource, Vec3, screen_diagonal,
};

const SCREEN: Size = Size::new(1920.0, 1080.0);

fn overhead() -> PerspectiveCamera {
    PerspectiveCamera::looking_down(Vec3::new(3.0, 25.0, -4.0), 1.1, SCREEN).unwrap()
}

type Log = Rc<RefCell<Vec<(Vec2, f64)>>>;

fn recording_drag() -> (GroundDrag<SwipeGesture, PerspectiveCamera>, Log, Rc<RefCell<u32>>) {
    let mut drag = GroundDrag::new(SwipeGesture::new(), Some(overhead()), SCREEN);
    let log: Log = Rc::default();
    let ends = Rc::new(RefCell::new(0));
    let sink = log.clone();
    drag.set_on_direction(Some(Box::new(move |direction, power| {
        sink.borrow_mut().push((direction, power));
    })));
    let end_sink = ends.clone();
    drag.set_on_end(Some(Box::new(move || *end_sink.borrow_mut() += 1)));
    (drag, log, ends)
}

#[test]
fn right_swipe_reports_positive_x_with_scaled_power() {
    let (mut drag, log, _) = recording_drag();
    drag.source_mut().on_down(None, Point::new(900.0, 540.0));
    drag.source_mut().on_move(None, Point::new(1000.0, 540.0));
    assert!(drag.update().is_some(), "an active swipe should produce an event");

    let (direction, power) = log.borrow()[0];
    assert!((direction - Vec2::new(1.0, 0.0)).hypot() < 1e-9, "got {direction:?}");
    let expected = 100.0 / screen_diagonal(SCREEN);
    assert!((power - expected).abs() < 1e-12, "power {power} != {expected}");
}

#[test]
fn stationary_start_accumulates_the_whole_swipe() {
    let (mut drag, log, _) = recording_drag();
    let source = drag.source_mut();
    source.on_down(None, Point::new(500.0, 500.0));
    source.on_move(None, Point::new(520.0, 500.0));
    source.on_move(None, Point::new(540.0, 500.0));
    source.on_move(None, Point::new(560.0, 500.0));
    drag.update();

    let (_, power) = log.borrow()[0];
    let expected = 60.0 / screen_diagonal(SCREEN);
    assert!((power - expected).abs() < 1e-12, "power {power} != {expected}");
}

#[test]
fn release_reports_end_once_then_goes_quiet() {
    let (mut drag, log, ends) = recording_drag();
    drag.source_mut().on_down(None, Point::new(100.0, 100.0));
    drag.source_mut().on_move(None, Point::new(100.0, 300.0));
    drag.update();
    drag.source_mut().on_up(None, Point::new(100.0, 300.0));

    assert_eq!(drag.update(), Some(DragEvent::End), "first poll after release reports the end");
    assert_eq!(drag.update(), None, "the end is reported once");
    assert_eq!(*ends.borrow(), 1, "one end callback");
    assert_eq!(log.borrow().len(), 1, "no direction after the end");
}

#[test]
fn taps_never_fire() {
    let (mut drag, log, ends) = recording_drag();
    drag.source_mut().on_down(None, Point::new(100.0, 100.0));
    drag.source_mut().on_move(None, Point::new(102.0, 101.0));
    assert_eq!(drag.update(), None, "movement under the threshold is not a swipe");
    drag.source_mut().on_up(None, Point::new(102.0, 101.0));
    assert_eq!(drag.update(), None, "a tap ends without an end event");
    assert!(log.borrow().is_empty(), "no directions for a tap");
    assert_eq!(*ends.borrow(), 0, "no end for a tap");
}

#[test]
fn dropping_the_drag_releases_the_gesture() {
    let gesture = Rc::new(RefCell::new(SwipeGesture::new()));
    {
        let handle = SharedGesture(gesture.clone());
        let _drag = GroundDrag::new(handle, Some(overhead()), SCREEN);
        assert!(gesture.borrow().is_stationary(), "construction enables stationary mode");
    }
    assert!(gesture.borrow().is_released(), "drop releases the source");
}

struct SharedGesture(Rc<RefCell<SwipeGesture>>);

impl SwipeSource for SharedGesture {
    fn start_position(&self) -> Point {
        self.0.borrow().start_position()
    }

    fn position(&self) -> Point {
        self.0.borrow().position()
    }

    fn is_swiping(&self) -> bool {
        self.0.borrow().is_swiping()
    }

    fn is_ended(&self) -> bool {
        self.0.borrow().is_ended()
    }

    fn swipe_id(&self) -> u64 {
        self.0.borrow().swipe_id()
    }

    fn set_stationary(&mut self, stationary: bool) {
        self.0.borrow_mut().set_stationary(stationary);
    }

    fn release(&mut self) {
        self.0.borrow_mut().release();
    }
}

proptest! {
    #[test]
    fn directions_are_unit_or_zero_and_power_is_scaled(
        x0 in 0.0..1920.0f64, y0 in 0.0..1080.0f64,
        x1 in 0.0..1920.0f64, y1 in 0.0..1080.0f64,
    ) {
        let camera = overhead();
        let start = Point::new(x0, y0);
        let current = Point::new(x1, y1);
        let sample = understory_ground_drag::ground_direction(
            &camera, start, current, screen_diagonal(SCREEN),
        ).unwrap();
        let length = sample.direction.hypot();
        prop_assert!(length == 0.0 || (length - 1.0).abs() < 1e-9, "length {}", length);
        let expected = (current - start).hypot() / screen_diagonal(SCREEN);
        prop_assert!((sample.power - expected).abs() < 1e-12);
        prop_assert!(sample.power <= 1.0 + 1e-12);
    }
}
