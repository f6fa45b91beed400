use {
    super::{Id, Version},
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Positional or named call parameters. The two shapes are mutually
/// exclusive on the wire, so the enum makes mixing them unrepresentable.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    pub fn is_empty(&self) -> bool {
        match self {
            Params::Positional(values) => values.is_empty(),
            Params::Named(entries) => entries.is_empty(),
        }
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Params::Positional(values)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(entries: Map<String, Value>) -> Self {
        Params::Named(entries)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Request {
    pub jsonrpc: Version,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl Request {
    pub fn new_call(method: String, params: Params, id: Id) -> Self {
        Self {
            jsonrpc: Version::V2,
            method,
            params: none_if_empty(params),
            id: Some(id),
        }
    }

    pub fn new_notif(method: String, params: Params) -> Self {
        Self {
            jsonrpc: Version::V2,
            method,
            params: none_if_empty(params),
            id: None,
        }
    }
}

// Empty parameter lists are left out of the envelope entirely.
fn none_if_empty(params: Params) -> Option<Params> {
    if params.is_empty() {
        None
    } else {
        Some(params)
    }
}
