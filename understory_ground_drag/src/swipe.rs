// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition: the gesture source seam and a pointer-driven recognizer.
//!
//! [`SwipeSource`] is what [`GroundDrag`](crate::GroundDrag) polls each frame.
//! Toolkits with their own gesture layer implement it directly; everyone else
//! can feed raw pointer events into [`SwipeGesture`].
//!
//! ## Swipe rules
//!
//! 1. **Press**: `on_down` records the start position. Nothing is reported yet.
//! 2. **Swipe**: once the pointer has moved further than
//!    [`SwipeGesture::swipe_threshold`] from where it went down, the press
//!    becomes a swipe and [`SwipeSource::is_swiping`] turns `true`.
//! 3. **End**: `on_up` after a swipe leaves the gesture swiping *and* ended
//!    until the next press. `on_up` before the threshold was crossed is a tap
//!    and resets the gesture silently.
//! 4. **Other pointers**: only the pointer that pressed first is tracked.
//!
//! ## Stationary mode
//!
//! In stationary mode the start position stays where the pointer went down
//! for the whole swipe, so samples describe the total drag like a virtual
//! joystick. Otherwise the start position trails one move behind, so samples
//! describe the most recent movement.
//!
//! ```
//! use kurbo::Point;
//! use understory_ground_drag::{SwipeGesture, SwipeSource};
//!
//! let mut swipe = SwipeGesture::new();
//! swipe.set_stationary(true);
//!
//! swipe.on_down(None, Point::new(100.0, 100.0));
//! swipe.on_move(None, Point::new(102.0, 100.0));
//! assert!(!swipe.is_swiping()); // Still within the 5px threshold.
//!
//! swipe.on_move(None, Point::new(140.0, 100.0));
//! swipe.on_move(None, Point::new(160.0, 100.0));
//! assert!(swipe.is_swiping());
//! assert_eq!(swipe.start_position(), Point::new(100.0, 100.0));
//!
//! swipe.on_up(None, Point::new(160.0, 100.0));
//! assert!(swipe.is_swiping() && swipe.is_ended());
//! ```

use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for telling concurrent pointers apart.
pub type PointerId = NonZeroU64;

const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// A gesture recognizer that reports swipes in screen space.
///
/// Positions use the screen convention of the [`Camera`](crate::Camera) they
/// are projected through.
pub trait SwipeSource {
    /// Where the current sample starts.
    fn start_position(&self) -> Point;

    /// Where the pointer is now.
    fn position(&self) -> Point;

    /// Whether a swipe is in progress or has just ended.
    fn is_swiping(&self) -> bool;

    /// Whether the current swipe has ended.
    fn is_ended(&self) -> bool;

    /// Identifies the current swipe.
    ///
    /// Must change each time a new swipe begins, so an owner polling once per
    /// frame can tell two ended swipes apart.
    fn swipe_id(&self) -> u64;

    /// Selects whether the start position stays fixed for the whole swipe.
    fn set_stationary(&mut self, stationary: bool);

    /// Stops recognizing and drops any held platform resources.
    ///
    /// Called exactly once by the owner on teardown.
    fn release(&mut self);
}

/// Phase of a [`SwipeGesture`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down but has not moved past the swipe threshold.
    Pressed,
    /// A swipe is in progress.
    Swiping,
    /// The swipe finished; cleared by the next press.
    Ended,
}

/// Pointer-driven swipe recognizer.
#[derive(Clone, Debug)]
pub struct SwipeGesture {
    /// Distance the pointer must travel from its down position before a press becomes a swipe.
    pub swipe_threshold: f64,
    phase: SwipePhase,
    pointer: Option<PointerId>,
    down_position: Point,
    start: Point,
    position: Point,
    stationary: bool,
    released: bool,
    swipes: u64,
}

impl SwipeGesture {
    /// Creates a recognizer with a 5-pixel swipe threshold.
    pub fn new() -> Self {
        Self::with_threshold(5.0)
    }

    /// Creates a recognizer with a custom swipe threshold.
    pub fn with_threshold(swipe_threshold: f64) -> Self {
        Self {
            swipe_threshold,
            phase: SwipePhase::Idle,
            pointer: None,
            down_position: Point::ZERO,
            start: Point::ZERO,
            position: Point::ZERO,
            stationary: false,
            released: false,
            swipes: 0,
        }
    }

    /// Record a pointer down event.
    ///
    /// Ignored while another pointer is being tracked, or after [`SwipeSource::release`].
    ///
    /// # Arguments
    /// * `pointer_id` - Unique pointer identifier, defaults to 1 if None
    /// * `position` - Pointer position at press time
    pub fn on_down(&mut self, pointer_id: Option<PointerId>, position: Point) {
        if self.released || matches!(self.phase, SwipePhase::Pressed | SwipePhase::Swiping) {
            return;
        }
        self.pointer = Some(pointer_id.unwrap_or(PRIMARY_POINTER));
        self.phase = SwipePhase::Pressed;
        self.down_position = position;
        self.start = position;
        self.position = position;
    }

    /// Record a pointer move event.
    ///
    /// # Returns
    /// `true` if this move turned the press into a swipe
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> bool {
        if !self.tracks(pointer_id) {
            return false;
        }
        match self.phase {
            SwipePhase::Pressed => {
                self.position = position;
                if self.down_position.distance(position) > self.swipe_threshold {
                    self.phase = SwipePhase::Swiping;
                    self.swipes = self.swipes.wrapping_add(1);
                    return true;
                }
                false
            }
            SwipePhase::Swiping => {
                if !self.stationary {
                    self.start = self.position;
                }
                self.position = position;
                false
            }
            SwipePhase::Idle | SwipePhase::Ended => false,
        }
    }

    /// Record a pointer up event.
    ///
    /// # Returns
    /// `true` if this ended a swipe, `false` for taps and untracked pointers
    pub fn on_up(&mut self, pointer_id: Option<PointerId>, position: Point) -> bool {
        if !self.tracks(pointer_id) {
            return false;
        }
        match self.phase {
            SwipePhase::Swiping => {
                if !self.stationary && position != self.position {
                    self.start = self.position;
                }
                self.position = position;
                self.phase = SwipePhase::Ended;
                true
            }
            SwipePhase::Pressed => {
                self.reset();
                false
            }
            SwipePhase::Idle | SwipePhase::Ended => false,
        }
    }

    /// Abandons any press or swipe without reporting an end.
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.pointer = None;
    }

    /// The current phase.
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Whether the start position stays fixed for the whole swipe.
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    /// Returns `true` once [`SwipeSource::release`] has been called.
    pub fn is_released(&self) -> bool {
        self.released
    }

    fn tracks(&self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        !self.released && self.pointer == Some(pointer_id)
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeSource for SwipeGesture {
    fn start_position(&self) -> Point {
        self.start
    }

    fn position(&self) -> Point {
        self.position
    }

    fn is_swiping(&self) -> bool {
        matches!(self.phase, SwipePhase::Swiping | SwipePhase::Ended)
    }

    fn is_ended(&self) -> bool {
        self.phase == SwipePhase::Ended
    }

    fn swipe_id(&self) -> u64 {
        self.swipes
    }

    fn set_stationary(&mut self, stationary: bool) {
        self.stationary = stationary;
    }

    fn release(&mut self) {
        self.reset();
        self.released = true;
    }
}
