// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted swipe through a top-down camera and prints the
//! ground-plane direction and power for every frame.
//!
//! Run:
//! - `cargo run -p understory_demos --example ground_drag_console`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use understory_ground_drag::{GroundDrag, PerspectiveCamera, SwipeGesture, Vec3};

fn main() {
    understory_demos::init_logging();

    let screen = Size::new(1280.0, 720.0);
    let Some(camera) = PerspectiveCamera::looking_down(Vec3::new(0.0, 30.0, 0.0), 0.9, screen)
    else {
        eprintln!("camera rejected");
        return;
    };

    let mut drag = GroundDrag::new(SwipeGesture::new(), Some(camera), screen);

    let heading: Rc<RefCell<Option<(Vec2, f64)>>> = Rc::default();
    let sink = heading.clone();
    drag.set_on_direction(Some(Box::new(move |direction, power| {
        *sink.borrow_mut() = Some((direction, power));
    })));
    drag.set_on_end(Some(Box::new(|| println!("swipe ended"))));

    // A press, a small wobble under the threshold, then a curving swipe.
    drag.source_mut().on_down(None, Point::new(640.0, 360.0));
    let path = [
        Point::new(642.0, 361.0),
        Point::new(700.0, 360.0),
        Point::new(760.0, 400.0),
        Point::new(800.0, 480.0),
        Point::new(810.0, 560.0),
    ];
    for (frame, point) in path.into_iter().enumerate() {
        drag.source_mut().on_move(None, point);
        match drag.update() {
            Some(_) => {
                if let Some((direction, power)) = heading.borrow_mut().take() {
                    println!(
                        "frame {frame}: direction ({:+.3}, {:+.3}) power {power:.3}",
                        direction.x, direction.y,
                    );
                }
            }
            None => println!("frame {frame}: no swipe yet"),
        }
    }
    drag.source_mut().on_up(None, Point::new(810.0, 560.0));
    drag.update();
    drag.update();

    // Dropping the component releases the gesture.
    drop(drag);
    tracing::info!("ground drag demo finished");
}
