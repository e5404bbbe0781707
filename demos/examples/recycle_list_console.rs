// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolls a 1000-row list through a 7-cell pool and prints each frame.
//!
//! Shows:
//! - setup through `RecycleList::start`, including a rejected configuration,
//! - per-frame `update` with small steps, a rest frame, and a jump to the end,
//! - how few `update` calls each frame costs.
//!
//! Run:
//! - `cargo run -p understory_demos --example recycle_list_console`

use kurbo::Point;
use understory_recycle_list::{
    Axis, JumpPolicy, RecycleCell, RecycleConfig, RecycleList, ScrollAxes, ScrollHost,
};

/// A row that remembers the label it would render.
#[derive(Clone, Debug, Default)]
struct Row {
    label: String,
    rebinds: u32,
}

impl RecycleCell for Row {
    fn init(&mut self, index: usize) {
        self.label = format!("row #{index}");
    }

    fn update(&mut self, index: usize) {
        self.label = format!("row #{index}");
        self.rebinds += 1;
    }
}

/// A scroll container that is moved around by the demo script.
#[derive(Debug)]
struct ScrollView {
    axes: ScrollAxes,
    offset: Point,
    content: f64,
}

impl ScrollView {
    fn vertical() -> Self {
        Self {
            axes: ScrollAxes::VERTICAL,
            offset: Point::ZERO,
            content: 0.0,
        }
    }
}

impl ScrollHost for ScrollView {
    fn axes(&self) -> ScrollAxes {
        self.axes
    }

    fn scroll_position(&self) -> Point {
        self.offset
    }

    fn set_content_extent(&mut self, axis: Axis, extent: f64) {
        tracing::info!(?axis, extent, "content resized");
        self.content = extent;
    }
}

fn print_frame(label: &str, list: &RecycleList<ScrollView, Row>) {
    let Some(recycler) = list.recycler() else {
        return;
    };
    println!("== {label} (front {})", recycler.front_index());
    for slot in recycler.slots() {
        if slot.is_visible() {
            println!(
                "  y={:>8.1}  {:<10} rebinds={}",
                slot.position().y,
                slot.cell().label,
                slot.cell().rebinds,
            );
        } else {
            println!("  (hidden)");
        }
    }
}

fn main() {
    understory_demos::init_logging();

    // Both axes enabled: setup is refused and the list stays inert.
    let mut ambiguous = ScrollView::vertical();
    ambiguous.axes = ScrollAxes {
        vertical: true,
        horizontal: true,
    };
    let mut broken = RecycleList::new(
        ambiguous,
        Some(Row::default()),
        RecycleConfig::new(1000, 40.0, 200.0),
    );
    if let Err(error) = broken.start() {
        println!("ambiguous host rejected: {error}");
    }
    assert!(broken.update().is_none(), "inert lists never tick");

    // 1000 rows, 40px tall with 4px gaps, in a 200px viewport.
    let config = RecycleConfig::new(1000, 40.0, 200.0)
        .with_spacing(4.0)
        .with_jump_policy(JumpPolicy::Rebind);
    let mut list = RecycleList::new(ScrollView::vertical(), Some(Row::default()), config);
    if let Err(error) = list.start() {
        println!("setup failed: {error}");
        return;
    }
    print_frame("initial", &list);

    let script = [
        ("half a row", 22.0),
        ("two rows", 88.0),
        ("rest", 88.0),
        ("back to the top", 0.0),
        ("jump to the end", 1000.0 * 44.0),
    ];
    for (label, y) in script {
        list.host_mut().offset = Point::new(0.0, y);
        if let Some(outcome) = list.update() {
            println!(
                "tick: front {} -> {}, recycled {}, updated {}, hidden {}",
                outcome.previous_front,
                outcome.front_index,
                outcome.recycled,
                outcome.updated,
                outcome.hidden,
            );
        }
        print_frame(label, &list);
    }
}
