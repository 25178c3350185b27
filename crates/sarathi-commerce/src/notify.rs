//! Outcome messages shown to the visitor.

use serde::{Deserialize, Serialize};

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message for the toast surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn quote_submitted() -> Self {
        Self::success(
            "Quote Request Submitted",
            "Thank you! We will get back to you within 24 hours.",
        )
    }

    pub fn quote_invalid(details: impl Into<String>) -> Self {
        Self::error("Please check the form", details)
    }

    pub fn quote_failed() -> Self {
        Self::error(
            "Submission Failed",
            "We could not send your request. Your details and selected products are kept, please try again.",
        )
    }

    pub fn status_updated(status: &str) -> Self {
        Self::success("Status Updated", format!("Inquiry status changed to {}", status))
    }

    pub fn inquiry_deleted() -> Self {
        Self::success("Inquiry Deleted", "The inquiry has been removed.")
    }
}

/// The "show message" surface of the host UI.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that only writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => {
                tracing::info!(title = %notice.title, "{}", notice.description)
            }
            NoticeKind::Error => {
                tracing::warn!(title = %notice.title, "{}", notice.description)
            }
        }
    }
}
