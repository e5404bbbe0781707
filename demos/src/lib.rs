// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console demos for the Understory recycle list and ground drag crates.
//!
//! Run:
//! - `cargo run -p understory_demos --example recycle_list_console`
//! - `cargo run -p understory_demos --example ground_drag_console`
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the crates' own logging.

use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
