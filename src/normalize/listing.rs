//! List normalization.
//!
//! Upstream list endpoints answer with a bare array, with `{"data": [...]}`,
//! or with nothing at all. Clients always get `{"data": [...]}`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Normalized list body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub data: Vec<Value>,
}

impl Listing {
    pub fn from_upstream(value: Option<Value>) -> Self {
        Self {
            data: records(value),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Listing> for Value {
    fn from(listing: Listing) -> Self {
        let mut fields = Map::new();
        fields.insert("data".to_string(), Value::Array(listing.data));
        Value::Object(fields)
    }
}

/// Extract the record list from an upstream payload.
pub fn records(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        Some(Value::Object(mut fields)) => match fields.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
