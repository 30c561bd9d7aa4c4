//! Inbound image request record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An inbound image request as handed over by the HTTP adapter.
///
/// Only `path` is interpreted here. Every other field (headers, query
/// parameters, request context) is kept verbatim in `extra` and survives
/// verification untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// URL path, `/<digest><separator><payload>` or `/<payload>`.
    pub path: String,
    /// Remaining request fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageRequest {
    /// Create a request carrying only a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// Replace the path, keeping every other field.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}
