//! In-memory content service for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::service::{record_id, CrudService};
use crate::CrudError;

const CREATED_FIELD: &str = "_createdDate";
const UPDATED_FIELD: &str = "_updatedDate";

/// Content service backed by insertion-ordered in-memory collections.
#[derive(Debug, Default)]
pub struct MemoryCrudService {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryCrudService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with records.
    ///
    /// Records are stored as given; no timestamps are added.
    pub fn with_records<I, K>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<Value>)>,
        K: Into<String>,
    {
        let collections = seed
            .into_iter()
            .map(|(name, records)| (name.into(), records))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Number of records in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Whether a collection has no records.
    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }
}

fn not_found(collection: &str, id: &str) -> CrudError {
    CrudError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

#[async_trait]
impl CrudService for MemoryCrudService {
    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, CrudError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, CrudError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|records| {
            records
                .iter()
                .find(|r| record_id(r).map(|rid| rid == id).unwrap_or(false))
                .cloned()
        }))
    }

    async fn create(&self, collection: &str, mut record: Value) -> Result<Value, CrudError> {
        let id = record_id(&record)?.to_string();
        let now = Value::String(Utc::now().to_rfc3339());
        match record.as_object_mut() {
            Some(fields) => {
                fields.insert(CREATED_FIELD.to_string(), now.clone());
                fields.insert(UPDATED_FIELD.to_string(), now);
            }
            None => return Err(CrudError::InvalidRecord("record is not an object".into())),
        }

        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        if records
            .iter()
            .any(|r| record_id(r).map(|rid| rid == id).unwrap_or(false))
        {
            return Err(CrudError::InvalidRecord(format!(
                "duplicate _id {} in {}",
                id, collection
            )));
        }
        records.push(record.clone());
        tracing::debug!(collection, id = %id, "created record");
        Ok(record)
    }

    async fn update(&self, collection: &str, patch: Value) -> Result<Value, CrudError> {
        let id = record_id(&patch)?.to_string();
        let patch_fields = patch
            .as_object()
            .ok_or_else(|| CrudError::InvalidRecord("patch is not an object".into()))?;

        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(collection)
            .and_then(|records| {
                records
                    .iter_mut()
                    .find(|r| record_id(r).map(|rid| rid == id).unwrap_or(false))
            })
            .ok_or_else(|| not_found(collection, &id))?;

        if let Some(fields) = record.as_object_mut() {
            for (key, value) in patch_fields {
                fields.insert(key.clone(), value.clone());
            }
            fields.insert(
                UPDATED_FIELD.to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        tracing::debug!(collection, id = %id, "updated record");
        Ok(record.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), CrudError> {
        let mut collections = self.collections.write().await;
        let records = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let len_before = records.len();
        records.retain(|r| record_id(r).map(|rid| rid != id).unwrap_or(true));
        if records.len() == len_before {
            return Err(not_found(collection, id));
        }
        tracing::debug!(collection, id, "deleted record");
        Ok(())
    }
}
