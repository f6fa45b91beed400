//! Client-side batching for JSON-RPC 2.0.
//!
//! A [BatchRequest](batch::BatchRequest) accumulates calls together with the
//! type each caller expects its result to decode as, serializes them as a
//! single wire-level batch array, pushes the text through a
//! [Transport](transport::Transport) in one blocking round trip, and
//! correlates the unordered reply array back into typed results keyed by
//! call id.
//!
//! ```
//! use jsonrpc_batch::{BatchRequest, Transport};
//!
//! struct Stub;
//!
//! impl Transport for Stub {
//!     fn send(&self, _request: &str) -> std::io::Result<String> {
//!         Ok(r#"[{"jsonrpc":"2.0","id":"two","result":"hi"},
//!                {"jsonrpc":"2.0","id":1,"result":5}]"#.to_owned())
//!     }
//! }
//!
//! # fn main() -> jsonrpc_batch::Result<()> {
//! let transport = Stub;
//! let results = BatchRequest::new(&transport)
//!     .add_typed::<i64>(1, "sum", vec![2.into(), 3.into()])
//!     .add_typed::<String>("two", "echo", vec!["hi".into()])
//!     .execute()?;
//!
//! assert_eq!(results.get::<i64>(1), Some(&5));
//! assert_eq!(results.get::<String>("two"), Some(&"hi".to_owned()));
//! # Ok(())
//! # }
//! ```

pub mod batch;
mod correlate;
pub mod error;
pub mod json_rpc;
pub mod transport;

pub use batch::{BatchRequest, BatchResults};
pub use error::{Error, ProtocolError};
pub use transport::Transport;

pub type Result<T> = std::result::Result<T, Error>;
