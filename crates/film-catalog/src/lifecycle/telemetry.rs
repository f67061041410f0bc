//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber for the binary.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup with row counts and backend, shutdown with final counts
//! - **Record operations**: Create, Get, List, Update, Delete, Link, Clear, with ids
//! - **Client calls**: one span per [`RecordClient`](crate::clients::RecordClient) operation
//! - **HTTP**: one span per request
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! Without `RUST_LOG` the filter defaults to `info`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
