//! Staff operations over stored quote requests.

use std::sync::Arc;

use sarathi_data::{fetch_all, fetch_by_id, Collection, CrudError, CrudService, ID_FIELD};
use serde_json::json;

use crate::catalog::Product;
use crate::desk::{InquiryQuery, StatusSummary};
use crate::error::CommerceError;
use crate::ids::QuoteRequestId;
use crate::notify::{Notice, Notifier};
use crate::quote::{QuoteRequest, QuoteStatus};

/// Inquiry desk backed by the content service.
pub struct InquiryDesk {
    crud: Arc<dyn CrudService>,
    notifier: Arc<dyn Notifier>,
}

impl InquiryDesk {
    pub fn new(crud: Arc<dyn CrudService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { crud, notifier }
    }

    /// Every stored request, newest submission first.
    ///
    /// A record that does not decode fails the whole listing.
    pub async fn list(&self) -> Result<Vec<QuoteRequest>, CommerceError> {
        let mut requests: Vec<QuoteRequest> =
            fetch_all(self.crud.as_ref(), Collection::QuoteRequests.as_str()).await?;
        requests.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        Ok(requests)
    }

    pub async fn search(&self, query: &InquiryQuery) -> Result<Vec<QuoteRequest>, CommerceError> {
        let mut requests = self.list().await?;
        requests.retain(|r| query.matches(r));
        Ok(requests)
    }

    pub async fn summary(&self) -> Result<StatusSummary, CommerceError> {
        Ok(StatusSummary::from_requests(&self.list().await?))
    }

    /// Move a request to a new status and return it as stored.
    pub async fn update_status(
        &self,
        id: &QuoteRequestId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, CommerceError> {
        let patch = json!({ ID_FIELD: id.as_str(), "status": status.as_str() });
        let updated = self
            .crud
            .update(Collection::QuoteRequests.as_str(), patch)
            .await
            .map_err(|e| not_found_as_quote(e, id))?;
        let request: QuoteRequest = serde_json::from_value(updated)?;

        tracing::info!(quote_id = %id, status = status.as_str(), "inquiry status updated");
        self.notifier
            .notify(Notice::status_updated(status.display_name()));
        Ok(request)
    }

    pub async fn delete(&self, id: &QuoteRequestId) -> Result<(), CommerceError> {
        self.crud
            .delete(Collection::QuoteRequests.as_str(), id.as_str())
            .await
            .map_err(|e| not_found_as_quote(e, id))?;

        tracing::info!(quote_id = %id, "inquiry deleted");
        self.notifier.notify(Notice::inquiry_deleted());
        Ok(())
    }

    /// Resolve the products a request asks about.
    ///
    /// Ids whose product has since been removed are skipped.
    pub async fn products_for(&self, request: &QuoteRequest) -> Result<Vec<Product>, CommerceError> {
        let mut products = Vec::new();
        for id in request.product_id_list() {
            match fetch_by_id::<Product>(self.crud.as_ref(), Collection::Products.as_str(), id.as_str())
                .await?
            {
                Some(product) => products.push(product),
                None => tracing::debug!(product_id = %id, "inquiry references a missing product"),
            }
        }
        Ok(products)
    }
}

fn not_found_as_quote(error: CrudError, id: &QuoteRequestId) -> CommerceError {
    match error {
        CrudError::NotFound { .. } => CommerceError::QuoteNotFound(id.to_string()),
        other => CommerceError::Persistence(other),
    }
}
