//! Raw records and the client contract for the remote records API.
//!
//! The remote service stores flat tables. Every row comes back as a
//! [`RawRecord`]: a stable id plus a loosely typed `fields` object that the
//! repositories decode into domain entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A single row returned by the remote tabular-data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default = "empty_fields")]
    pub fields: Value,
}

fn empty_fields() -> Value {
    Value::Object(Map::new())
}

impl RawRecord {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Client for a hosted table API.
///
/// Implementations make exactly one attempt per call. Retrying is left to the
/// caller; the UI exposes it as a manual action.
#[async_trait::async_trait]
pub trait RecordClient: Send + Sync {
    /// Lists the records of `resource` (a table name).
    ///
    /// Only the first page is returned when the service paginates.
    async fn fetch(&self, resource: &str) -> Result<Vec<RawRecord>>;

    /// Updates the given fields of one record. Fields not present in `fields`
    /// stay unchanged on the server.
    async fn patch(&self, resource: &str, id: &str, fields: Map<String, Value>) -> Result<()>;
}
