//! Global Async Runtime
//!
//! Provides a shared Tokio runtime for the command boundary. Commands are
//! synchronous functions; the store is async.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Global shared Tokio runtime
///
/// Initialized lazily on first use. Must not be driven from inside a task
/// already running on it.
pub static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime")
});

/// Run a future to completion (blocking the current thread)
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
