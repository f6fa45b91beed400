//! Correlates a raw batch reply with the return-type registry.
//!
//! One linear pass over the decoded reply tree, no state kept between
//! calls and no I/O. Correlation is id-driven: the server is free to
//! reorder the reply array.

use {
    crate::{
        batch::{BatchResults, ReturnTypes},
        error::{Error, ProtocolError},
        json_rpc::{self, ErrorObject, Id},
    },
    log::debug,
    serde::Deserialize,
    serde_json::Value,
    std::collections::HashMap,
};

pub(crate) fn correlate(reply: &str, return_types: &ReturnTypes) -> crate::Result<BatchResults> {
    let tree: Value = serde_json::from_str(reply).map_err(ProtocolError::Parse)?;
    let entries = tree.as_array().ok_or(ProtocolError::NotABatch)?;

    let mut results: HashMap<Id, _> = HashMap::new();
    for entry in entries {
        let version = entry.get("jsonrpc").ok_or(ProtocolError::MissingVersion)?;
        if version.as_str() != Some(json_rpc::VERSION) {
            return Err(ProtocolError::BadVersion(version.to_string()).into());
        }

        // The first error entry fails the whole batch, results from
        // sibling entries included.
        if let Some(raw) = entry.get("error") {
            let error = ErrorObject::deserialize(raw).map_err(ProtocolError::Parse)?;
            return Err(Error::RemoteCall(error));
        }

        let result = entry.get("result").ok_or(ProtocolError::MissingOutcome)?;

        let id = match entry.get("id") {
            None | Some(Value::Null) => {
                debug!("skipping a response entry without an id");
                continue;
            }
            Some(raw) => id_of(raw)?,
        };

        let decoder = return_types
            .decoder(&id)
            .ok_or_else(|| ProtocolError::Unbound(id.clone()))?;
        let decoded = decoder(result).map_err(|source| ProtocolError::BadResult {
            id: id.clone(),
            source,
        })?;
        results.insert(id, decoded);
    }

    Ok(BatchResults::new(results))
}

fn id_of(raw: &Value) -> Result<Id, ProtocolError> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .map(Id::Num)
            .ok_or_else(|| ProtocolError::InvalidId(raw.to_string())),
        Value::String(s) => Ok(Id::Str(s.clone())),
        _ => Err(ProtocolError::InvalidId(raw.to_string())),
    }
}
