//! Response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// `{ "data": ..., "meta": {...}, "errors": [...] }`
///
/// Successful responses carry `data` and an empty `errors` list. Failures
/// carry an empty `data` object and one or more error messages.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Map::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

impl ApiResponse<Value> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: json!({}),
            meta: Map::new(),
            errors: vec![message.into()],
        }
    }
}
