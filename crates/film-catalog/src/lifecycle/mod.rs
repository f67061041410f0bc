//! # System Lifecycle
//!
//! Starting and stopping the catalog.
//!
//! [`CatalogSystem::start`] connects to the configured SQLite database (creating missing
//! tables), spawns the store task and hands out one client per record kind.
//! [`CatalogSystem::shutdown`] follows the usual channel-closing pattern:
//!
//! 1. **Drop all clients** - closes the sending side of the store channel
//! 2. **Store detects closure** - `receiver.recv()` returns `None`
//! 3. **Store cleans up** - logs its final row counts and closes the pool
//! 4. **Await completion** - the task handle is awaited and a panic is reported
//!
//! No request that was already queued is lost.

pub mod catalog_system;
pub mod telemetry;

pub use catalog_system::CatalogSystem;
pub use telemetry::setup_tracing;
