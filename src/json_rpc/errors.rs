use {
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

/// The `error` member of a response entry, exactly as the server sent it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl std::fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn decodes_with_and_without_data() {
        let bare: ErrorObject =
            serde_json::from_value(json!({"code": -32601, "message": "not found"})).unwrap();
        assert_eq!(bare.code, -32601);
        assert_eq!(bare.data, None);

        let full: ErrorObject = serde_json::from_value(
            json!({"code": -32000, "message": "boom", "data": {"detail": 7}}),
        )
        .unwrap();
        assert_eq!(full.data, Some(json!({"detail": 7})));
        assert_eq!(full.to_string(), "boom (code -32000)");
    }
}
