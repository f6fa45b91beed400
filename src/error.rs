//! What can go wrong during one `execute()` round trip.
//!
//! Every failure surfaces synchronously from
//! [execute](crate::BatchRequest::execute); nothing is swallowed and there
//! is no partial-success path. Either a complete result map comes back or
//! one of these does.

use {
    crate::json_rpc::{ErrorObject, Id},
    std::io,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The accumulated requests could not be encoded. A programmer error,
    /// raised before anything touches the wire.
    #[error("unable to encode the batch request")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed to complete the round trip.
    #[error("transport failure")]
    Transport(#[source] io::Error),

    /// The reply does not conform to the JSON-RPC 2.0 envelope rules.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The server reported an error for one of the calls. The whole batch
    /// fails; no results from sibling entries are returned.
    #[error("remote call failed: {0}")]
    RemoteCall(ErrorObject),
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("unable to parse the response")]
    Parse(#[source] serde_json::Error),

    #[error("expected a batch response array")]
    NotABatch,

    #[error("not a JSON-RPC response")]
    MissingVersion,

    #[error("bad protocol version: {0}")]
    BadVersion(String),

    #[error("neither result nor error is set")]
    MissingOutcome,

    #[error("response id is neither an integer nor a string: {0}")]
    InvalidId(String),

    #[error("no return type bound for id {0}")]
    Unbound(Id),

    #[error("unable to decode the result for id {id}")]
    BadResult {
        id: Id,
        #[source]
        source: serde_json::Error,
    },
}
