//! The JSON-RPC 2.0 envelope types.

mod errors;
mod request;

pub use errors::*;
pub use request::*;

use serde::{Deserialize, Serialize};

/// The only protocol version this crate speaks.
pub const VERSION: &str = "2.0";

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Version {
    #[serde(rename = "2.0")]
    V2,
}

/// A call id. Integer ids are normalized to `i64` on every boundary so
/// that the same number always correlates, whatever width the caller or
/// the server picked. An integer and a string spelling of the same value
/// stay distinct, as the protocol requires.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Id {
    Str(String),
    Num(i64),
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Num(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Num(n.into())
    }
}

impl From<u32> for Id {
    fn from(n: u32) -> Self {
        Id::Num(n.into())
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_owned())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Str(s) => write!(f, "\"{}\"", s),
            Id::Num(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_collapse_to_one_id() {
        assert_eq!(Id::from(1i32), Id::from(1i64));
        assert_eq!(Id::from(7u32), Id::from(7i64));
    }

    #[test]
    fn numeric_and_textual_ids_stay_distinct() {
        assert_ne!(Id::from(1), Id::from("1"));
    }

    #[test]
    fn ids_serialize_to_their_native_json_value() {
        assert_eq!(serde_json::to_string(&Id::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Id::from("two")).unwrap(), "\"two\"");
    }
}
