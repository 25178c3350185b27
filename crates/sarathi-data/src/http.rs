//! HTTP implementation of the content service.
//!
//! Maps the CRUD operations onto a REST layout rooted at the configured
//! base URL:
//!
//! | operation   | request                                   |
//! |-------------|-------------------------------------------|
//! | `get_all`   | `GET    /collections/{c}/items`           |
//! | `get_by_id` | `GET    /collections/{c}/items/{id}`      |
//! | `create`    | `POST   /collections/{c}/items`           |
//! | `update`    | `PATCH  /collections/{c}/items/{id}`      |
//! | `delete`    | `DELETE /collections/{c}/items/{id}`      |
//!
//! Lists come back as `{"items": [...]}`, single records as `{"item": {...}}`,
//! and write bodies are sent as `{"item": {...}}`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::CmsConfig;
use crate::service::{record_id, CrudService};
use crate::CrudError;

#[derive(Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    item: Value,
}

/// Content service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCrudService {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpCrudService {
    /// Build a service from configuration.
    pub fn from_config(config: &CmsConfig) -> Result<Self, CrudError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| CrudError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CrudError::InvalidUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| CrudError::Request(format!("invalid header name {}: {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| CrudError::Request(format!("invalid header value for {}: {}", key, e)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// URL of a collection, or of one record in it.
    fn items_url(&self, collection: &str, id: Option<&str>) -> Result<Url, CrudError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CrudError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().extend(["collections", collection, "items"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, CrudError> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), url = %url, "content service returned an error");
        Err(CrudError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CrudService for HttpCrudService {
    async fn get_all(&self, collection: &str) -> Result<Vec<Value>, CrudError> {
        let url = self.items_url(collection, None)?;
        tracing::debug!(url = %url, "fetching collection");
        let envelope: ItemsEnvelope = self.send(self.client.get(url)).await?.json().await?;
        Ok(envelope.items)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, CrudError> {
        let url = self.items_url(collection, Some(id))?;
        tracing::debug!(url = %url, "fetching record");
        match self.send(self.client.get(url)).await {
            Ok(response) => {
                let envelope: ItemEnvelope = response.json().await?;
                Ok(Some(envelope.item))
            }
            Err(CrudError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn create(&self, collection: &str, record: Value) -> Result<Value, CrudError> {
        record_id(&record)?;
        let url = self.items_url(collection, None)?;
        tracing::debug!(url = %url, "creating record");
        let body = json!({ "item": record });
        let envelope: ItemEnvelope = self
            .send(self.client.post(url).json(&body))
            .await?
            .json()
            .await?;
        Ok(envelope.item)
    }

    async fn update(&self, collection: &str, patch: Value) -> Result<Value, CrudError> {
        let id = record_id(&patch)?.to_string();
        let url = self.items_url(collection, Some(&id))?;
        tracing::debug!(url = %url, "updating record");
        let body = json!({ "item": patch });
        match self.send(self.client.patch(url).json(&body)).await {
            Ok(response) => {
                let envelope: ItemEnvelope = response.json().await?;
                Ok(envelope.item)
            }
            Err(CrudError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CrudError::NotFound {
                    collection: collection.to_string(),
                    id,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), CrudError> {
        let url = self.items_url(collection, Some(id))?;
        tracing::debug!(url = %url, "deleting record");
        match self.send(self.client.delete(url)).await {
            Ok(_) => Ok(()),
            Err(CrudError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CrudError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        let service =
            HttpCrudService::from_config(&CmsConfig::new("https://cms.example.com/api/")).unwrap();
        assert_eq!(
            service.items_url("products", None).unwrap().as_str(),
            "https://cms.example.com/api/collections/products/items"
        );
        assert_eq!(
            service.items_url("products", Some("a b")).unwrap().as_str(),
            "https://cms.example.com/api/collections/products/items/a%20b"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            HttpCrudService::from_config(&CmsConfig::new("not a url")),
            Err(CrudError::InvalidUrl(_))
        ));
    }
}
