// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll container seam and a start/update lifecycle around [`Recycler`].

use kurbo::Point;

use crate::{Axis, RecycleCell, RecycleConfig, Recycler, ScrollAxes, SetupError, TickOutcome};

/// The scrollable container a recycle list lives in.
///
/// The host owns layout and rendering. The recycler only reads the scroll
/// position, and tells the host how long the content is.
pub trait ScrollHost {
    /// Which directions the container scrolls in. Read once, at setup.
    fn axes(&self) -> ScrollAxes;

    /// Current anchored position of the scroll content. Read every tick.
    ///
    /// Vertical content scrolls forward with increasing `y`; horizontal
    /// content scrolls forward with decreasing `x`.
    fn scroll_position(&self) -> Point;

    /// Sets the content extent along `axis`. Called once, at setup.
    fn set_content_extent(&mut self, axis: Axis, extent: f64);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn axes(&self) -> ScrollAxes {
        (**self).axes()
    }

    fn scroll_position(&self) -> Point {
        (**self).scroll_position()
    }

    fn set_content_extent(&mut self, axis: Axis, extent: f64) {
        (**self).set_content_extent(axis, extent);
    }
}

#[derive(Debug)]
enum Phase<C> {
    Pending {
        template: Option<C>,
        config: RecycleConfig,
    },
    Active(Recycler<C>),
    Inert(SetupError),
}

/// A recycle list bound to its host, driven by `start` once and `update` per frame.
///
/// Setup is deferred to [`RecycleList::start`] so hosts can finish building
/// their container first. A failed setup is logged once and leaves the list
/// permanently inert: later `start` calls return the same error and
/// [`RecycleList::update`] does nothing.
#[derive(Debug)]
pub struct RecycleList<H, C> {
    host: H,
    phase: Phase<C>,
}

impl<H: ScrollHost, C: RecycleCell + Clone> RecycleList<H, C> {
    /// Creates a list that will clone `template` into its pool on [`start`](Self::start).
    #[must_use]
    pub fn new(host: H, template: Option<C>, config: RecycleConfig) -> Self {
        Self {
            host,
            phase: Phase::Pending { template, config },
        }
    }

    /// Builds the pool. Runs setup at most once.
    pub fn start(&mut self) -> Result<(), SetupError> {
        let (template, config) = match &mut self.phase {
            Phase::Pending { template, config } => (template.take(), *config),
            Phase::Active(_) => return Ok(()),
            Phase::Inert(error) => return Err(*error),
        };
        match Recycler::new(&mut self.host, template, config) {
            Ok(recycler) => {
                self.phase = Phase::Active(recycler);
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "recycle list setup failed; list stays inert");
                self.phase = Phase::Inert(error);
                Err(error)
            }
        }
    }

    /// Reads the host's scroll position and recycles cells to match.
    ///
    /// Returns `None` unless [`start`](Self::start) has succeeded.
    pub fn update(&mut self) -> Option<TickOutcome> {
        let Phase::Active(recycler) = &mut self.phase else {
            return None;
        };
        Some(recycler.tick(self.host.scroll_position()))
    }
}

impl<H, C> RecycleList<H, C> {
    /// The scroll host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the scroll host, for example to move its scroll position.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The recycler, once setup has succeeded.
    #[must_use]
    pub fn recycler(&self) -> Option<&Recycler<C>> {
        match &self.phase {
            Phase::Active(recycler) => Some(recycler),
            _ => None,
        }
    }

    /// Mutable access to the recycler, once setup has succeeded.
    pub fn recycler_mut(&mut self) -> Option<&mut Recycler<C>> {
        match &mut self.phase {
            Phase::Active(recycler) => Some(recycler),
            _ => None,
        }
    }

    /// The error that made this list inert, if setup failed.
    #[must_use]
    pub fn setup_error(&self) -> Option<SetupError> {
        match &self.phase {
            Phase::Inert(error) => Some(*error),
            _ => None,
        }
    }

    /// Returns `true` once setup has succeeded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// Tears the list down and hands the host back.
    ///
    /// The pool (and the template, if setup never ran) is dropped.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
