// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame component tying a swipe source and a camera to callbacks.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Size, Vec2};

use crate::{Camera, DragSample, SwipeSource, ground_direction, screen_diagonal};

/// Receives `(direction, power)` for every swipe sample that hits the ground.
pub type DirectionCallback = Box<dyn FnMut(Vec2, f64)>;

/// Receives the end of a swipe.
pub type EndCallback = Box<dyn FnMut()>;

/// What a call to [`GroundDrag::update`] reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A swipe sample was projected onto the ground.
    Direction(DragSample),
    /// The swipe ended.
    End,
}

/// Turns swipes from a [`SwipeSource`] into ground-plane directions.
///
/// Call [`update`](Self::update) once per frame. While the source is swiping
/// each update projects its start and current positions through the camera
/// and hands the result to the direction callback. The frame a swipe ends,
/// the end callback fires once instead.
///
/// The component owns its source. Dropping it clears both callbacks and
/// calls [`SwipeSource::release`].
pub struct GroundDrag<G: SwipeSource, C: Camera> {
    source: G,
    camera: Option<C>,
    screen_diagonal: f64,
    on_direction: Option<DirectionCallback>,
    on_end: Option<EndCallback>,
    reported_end: Option<u64>,
}

impl<G: SwipeSource, C: Camera> GroundDrag<G, C> {
    /// Takes ownership of `source` and switches it to stationary mode.
    ///
    /// `screen` is used for the power normalization; `camera` may be bound later
    /// with [`set_camera`](Self::set_camera).
    pub fn new(mut source: G, camera: Option<C>, screen: Size) -> Self {
        source.set_stationary(true);
        Self {
            source,
            camera,
            screen_diagonal: screen_diagonal(screen),
            on_direction: None,
            on_end: None,
            reported_end: None,
        }
    }

    /// Replaces the direction callback. `None` unregisters it.
    pub fn set_on_direction(&mut self, callback: Option<DirectionCallback>) {
        self.on_direction = callback;
    }

    /// Replaces the end callback. `None` unregisters it.
    pub fn set_on_end(&mut self, callback: Option<EndCallback>) {
        self.on_end = callback;
    }

    /// Binds or unbinds the camera.
    pub fn set_camera(&mut self, camera: Option<C>) {
        self.camera = camera;
    }

    /// The bound camera.
    pub fn camera(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    /// The swipe source.
    pub fn source(&self) -> &G {
        &self.source
    }

    /// Mutable access to the swipe source, for feeding it input.
    pub fn source_mut(&mut self) -> &mut G {
        &mut self.source
    }

    /// Diagonal length of the screen used to normalize power.
    pub fn screen_diagonal(&self) -> f64 {
        self.screen_diagonal
    }

    /// Projects the source's current swipe without firing callbacks.
    ///
    /// Returns `None` without a camera or when a ray misses the ground.
    pub fn sample(&self) -> Option<DragSample> {
        let camera = self.camera.as_ref()?;
        ground_direction(
            camera,
            self.source.start_position(),
            self.source.position(),
            self.screen_diagonal,
        )
    }

    /// Polls the source and fires the matching callback.
    pub fn update(&mut self) -> Option<DragEvent> {
        if !self.source.is_swiping() {
            return None;
        }
        if self.source.is_ended() {
            let swipe = self.source.swipe_id();
            if self.reported_end == Some(swipe) {
                return None;
            }
            self.reported_end = Some(swipe);
            if let Some(on_end) = self.on_end.as_mut() {
                on_end();
            }
            return Some(DragEvent::End);
        }
        // Misses are expected while the camera looks away; try again next frame.
        let sample = self.sample()?;
        if let Some(on_direction) = self.on_direction.as_mut() {
            on_direction(sample.direction, sample.power);
        }
        Some(DragEvent::Direction(sample))
    }
}

impl<G: SwipeSource, C: Camera> Drop for GroundDrag<G, C> {
    fn drop(&mut self) {
        self.on_direction = None;
        self.on_end = None;
        self.source.release();
        tracing::trace!("ground drag released its swipe source");
    }
}

impl<G: SwipeSource + fmt::Debug, C: Camera + fmt::Debug> fmt::Debug for GroundDrag<G, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroundDrag")
            .field("source", &self.source)
            .field("camera", &self.camera)
            .field("screen_diagonal", &self.screen_diagonal)
            .field("on_direction", &self.on_direction.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("reported_end", &self.reported_end)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use kurbo::{Point, Size, Vec2};

    use super::{DragEvent, GroundDrag};
    use crate::{PerspectiveCamera, SwipeGesture, SwipeSource, Vec3};

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    fn overhead() -> PerspectiveCamera {
        PerspectiveCamera::looking_down(Vec3::new(0.0, 50.0, 0.0), 1.0, SCREEN).unwrap()
    }

    #[derive(Debug, Default)]
    struct ScriptedSource {
        start: Point,
        position: Point,
        swiping: bool,
        ended: bool,
        swipe: u64,
        stationary: bool,
        releases: Rc<Cell<usize>>,
    }

    impl SwipeSource for ScriptedSource {
        fn start_position(&self) -> Point {
            self.start
        }

        fn position(&self) -> Point {
            self.position
        }

        fn is_swiping(&self) -> bool {
            self.swiping
        }

        fn is_ended(&self) -> bool {
            self.ended
        }

        fn swipe_id(&self) -> u64 {
            self.swipe
        }

        fn set_stationary(&mut self, stationary: bool) {
            self.stationary = stationary;
        }

        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    #[test]
    fn construction_turns_on_stationary_mode() {
        let drag = GroundDrag::new(SwipeGesture::new(), Some(overhead()), SCREEN);
        assert!(drag.source().is_stationary());
    }

    #[test]
    fn swipe_fires_direction_then_end_once() {
        let directions = Rc::new(RefCell::new(Vec::new()));
        let ends = Rc::new(Cell::new(0));
        let mut drag = GroundDrag::new(SwipeGesture::new(), Some(overhead()), SCREEN);
        {
            let directions = directions.clone();
            drag.set_on_direction(Some(Box::new(move |direction, power| {
                directions.borrow_mut().push((direction, power));
            })));
            let ends = ends.clone();
            drag.set_on_end(Some(Box::new(move || ends.set(ends.get() + 1))));
        }

        assert_eq!(drag.update(), None);
        drag.source_mut().on_down(None, Point::new(960.0, 540.0));
        assert_eq!(drag.update(), None);

        drag.source_mut().on_move(None, Point::new(1160.0, 540.0));
        let Some(DragEvent::Direction(sample)) = drag.update() else {
            panic!("expected a direction sample");
        };
        assert!((sample.direction - Vec2::new(1.0, 0.0)).hypot() < 1e-9);
        // Stationary mode keeps measuring from the press.
        drag.source_mut().on_move(None, Point::new(1160.0, 740.0));
        drag.update();
        assert_eq!(directions.borrow().len(), 2);
        let (diagonal_dir, power) = directions.borrow()[1];
        assert!((diagonal_dir.x - diagonal_dir.y).abs() < 1e-9);
        assert!((power - 200.0 * core::f64::consts::SQRT_2 / drag.screen_diagonal()).abs() < 1e-9);

        drag.source_mut().on_up(None, Point::new(1160.0, 740.0));
        assert_eq!(drag.update(), Some(DragEvent::End));
        assert_eq!(drag.update(), None);
        assert_eq!(ends.get(), 1);
        assert_eq!(directions.borrow().len(), 2);
    }

    #[test]
    fn missing_camera_skips_samples_silently() {
        let fired = Rc::new(Cell::new(false));
        let mut drag: GroundDrag<_, PerspectiveCamera> =
            GroundDrag::new(SwipeGesture::new(), None, SCREEN);
        let flag = fired.clone();
        drag.set_on_direction(Some(Box::new(move |_, _| flag.set(true))));

        drag.source_mut().on_down(None, Point::new(0.0, 0.0));
        drag.source_mut().on_move(None, Point::new(100.0, 0.0));
        assert_eq!(drag.update(), None);
        assert!(!fired.get());

        drag.set_camera(Some(overhead()));
        assert!(matches!(drag.update(), Some(DragEvent::Direction(_))));
        assert!(fired.get());
    }

    #[test]
    fn unregistered_callbacks_still_report_events() {
        let called = Rc::new(Cell::new(false));
        let mut drag = GroundDrag::new(SwipeGesture::new(), Some(overhead()), SCREEN);
        let flag = called.clone();
        drag.set_on_end(Some(Box::new(move || flag.set(true))));
        drag.set_on_end(None);

        drag.source_mut().on_down(None, Point::new(0.0, 0.0));
        drag.source_mut().on_move(None, Point::new(0.0, 100.0));
        drag.source_mut().on_up(None, Point::new(0.0, 100.0));
        assert_eq!(drag.update(), Some(DragEvent::End));
        assert!(!called.get());
    }

    #[test]
    fn a_new_swipe_can_end_again() {
        let mut source = ScriptedSource {
            swiping: true,
            ended: true,
            ..ScriptedSource::default()
        };
        source.position = Point::new(10.0, 0.0);
        let mut drag = GroundDrag::new(source, Some(overhead()), SCREEN);
        assert_eq!(drag.update(), Some(DragEvent::End));
        assert_eq!(drag.update(), None);

        drag.source_mut().swiping = false;
        drag.source_mut().ended = false;
        assert_eq!(drag.update(), None);
        drag.source_mut().swiping = true;
        drag.source_mut().ended = true;
        drag.source_mut().swipe = 1;
        assert_eq!(drag.update(), Some(DragEvent::End));
    }

    #[test]
    fn swipe_started_and_ended_between_updates_still_reports_end() {
        let ends = Rc::new(Cell::new(0));
        let mut drag = GroundDrag::new(SwipeGesture::new(), Some(overhead()), SCREEN);
        let counter = ends.clone();
        drag.set_on_end(Some(Box::new(move || counter.set(counter.get() + 1))));

        drag.source_mut().on_down(None, Point::new(100.0, 100.0));
        drag.source_mut().on_move(None, Point::new(200.0, 100.0));
        drag.source_mut().on_up(None, Point::new(200.0, 100.0));
        assert_eq!(drag.update(), Some(DragEvent::End));

        // A quick flick lands entirely between two frames.
        drag.source_mut().on_down(None, Point::new(300.0, 100.0));
        drag.source_mut().on_move(None, Point::new(400.0, 100.0));
        drag.source_mut().on_up(None, Point::new(400.0, 100.0));
        assert_eq!(drag.update(), Some(DragEvent::End));
        assert_eq!(drag.update(), None);
        assert_eq!(ends.get(), 2);
    }

    #[test]
    fn drop_releases_the_source_once() {
        let releases = Rc::new(Cell::new(0));
        let source = ScriptedSource {
            releases: releases.clone(),
            ..ScriptedSource::default()
        };
        let drag = GroundDrag::new(source, Some(overhead()), SCREEN);
        assert!(drag.source().stationary);
        assert_eq!(releases.get(), 0);
        drop(drag);
        assert_eq!(releases.get(), 1);
    }
}
