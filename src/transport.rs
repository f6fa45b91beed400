//! The transport boundary.
//!
//! The core performs no network I/O of its own:
//! [execute](crate::BatchRequest::execute) hands the serialized batch to a
//! [Transport] and gets the raw reply text back. Connection handling,
//! retries, timeouts and cancellation all live behind this seam; a failure
//! here fails the whole round trip and is never retried by the core.

use std::io;

pub trait Transport {
    /// Delivers one serialized request and returns the raw response text.
    fn send(&self, request: &str) -> io::Result<String>;
}
