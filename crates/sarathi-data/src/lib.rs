//! Content-service client for the Sarathi site.
//!
//! Every page of the site reads its records from, and writes quote requests
//! to, a hosted content service exposing generic create/read/update/delete
//! over named collections. This crate provides that seam:
//!
//! - [`CrudService`]: the async trait the rest of the site depends on
//! - [`HttpCrudService`]: the REST implementation
//! - [`MemoryCrudService`]: an in-memory implementation for tests and local runs
//! - [`CmsConfig`]: connection settings loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use sarathi_data::{fetch_all, CmsConfig, Collection, HttpCrudService};
//!
//! let config = CmsConfig::load("sarathi.toml")?.with_env_overrides();
//! config.validate()?;
//! let cms = HttpCrudService::from_config(&config)?;
//!
//! let products: Vec<serde_json::Value> =
//!     fetch_all(&cms, Collection::Products.as_str()).await?;
//! ```

mod collection;
mod config;
mod error;
mod http;
mod memory;
mod service;

pub use collection::Collection;
pub use config::{CmsConfig, ENV_API_KEY, ENV_BASE_URL};
pub use error::CrudError;
pub use http::HttpCrudService;
pub use memory::MemoryCrudService;
pub use service::{create_as, fetch_all, fetch_by_id, record_id, CrudService, ID_FIELD};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        create_as, fetch_all, fetch_by_id, CmsConfig, Collection, CrudError, CrudService,
        HttpCrudService, MemoryCrudService,
    };
}
