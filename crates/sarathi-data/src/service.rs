//! The content-service seam and typed helpers over it.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::CrudError;

/// Field every record is keyed by.
pub const ID_FIELD: &str = "_id";

/// Generic create/read/update/delete access to named record collections.
///
/// Records are JSON objects keyed by [`ID_FIELD`]. Implementations own
/// transport and storage; callers only see records.
#[async_trait]
pub trait CrudService: Send + Sync {
    /// All records in a collection, in storage order.
    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, CrudError>;

    /// A single record, or `None` when the id is unknown.
    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, CrudError>;

    /// Store a new record and return it as stored.
    async fn create(&self, collection: &str, record: Value) -> Result<Value, CrudError>;

    /// Merge `patch` (which must carry `_id`) into an existing record.
    async fn update(&self, collection: &str, patch: Value) -> Result<Value, CrudError>;

    /// Remove a record.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), CrudError>;
}

/// Extract the `_id` of a record.
pub fn record_id(record: &Value) -> Result<&str, CrudError> {
    match record.get(ID_FIELD).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(CrudError::InvalidRecord(format!("missing {}", ID_FIELD))),
    }
}

/// Fetch and decode every record of a collection.
pub async fn fetch_all<T: DeserializeOwned>(
    service: &dyn CrudService,
    collection: &str,
) -> Result<Vec<T>, CrudError> {
    service
        .get_all(collection)
        .await?
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(CrudError::from))
        .collect()
}

/// Fetch and decode a single record.
pub async fn fetch_by_id<T: DeserializeOwned>(
    service: &dyn CrudService,
    collection: &str,
    id: &str,
) -> Result<Option<T>, CrudError> {
    match service.get_by_id(collection, id).await? {
        Some(record) => Ok(Some(serde_json::from_value(record)?)),
        None => Ok(None),
    }
}

/// Encode, create and decode a typed record.
pub async fn create_as<T: Serialize + DeserializeOwned>(
    service: &dyn CrudService,
    collection: &str,
    record: &T,
) -> Result<T, CrudError> {
    let value = serde_json::to_value(record)?;
    let created = service.create(collection, value).await?;
    Ok(serde_json::from_value(created)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id() {
        assert_eq!(record_id(&json!({"_id": "abc"})).unwrap(), "abc");
        assert!(record_id(&json!({"_id": ""})).is_err());
        assert!(record_id(&json!({"name": "x"})).is_err());
        assert!(record_id(&json!("scalar")).is_err());
    }
}
