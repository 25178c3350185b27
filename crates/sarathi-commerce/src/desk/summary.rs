//! Per-status inquiry counts.

use crate::quote::{QuoteRequest, QuoteStatus};
use serde::{Deserialize, Serialize};

/// Counts shown in the desk header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusSummary {
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a QuoteRequest>) -> Self {
        requests
            .into_iter()
            .fold(Self::default(), |mut summary, request| {
                summary.record(request.status);
                summary
            })
    }

    pub fn record(&mut self, status: QuoteStatus) {
        match status {
            QuoteStatus::Pending => self.pending += 1,
            QuoteStatus::InProgress => self.in_progress += 1,
            QuoteStatus::Completed => self.completed += 1,
        }
    }

    pub fn count(&self, status: QuoteStatus) -> usize {
        match status {
            QuoteStatus::Pending => self.pending,
            QuoteStatus::InProgress => self.in_progress,
            QuoteStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut summary = StatusSummary::default();
        summary.record(QuoteStatus::Pending);
        summary.record(QuoteStatus::Pending);
        summary.record(QuoteStatus::Completed);

        assert_eq!(summary.count(QuoteStatus::Pending), 2);
        assert_eq!(summary.count(QuoteStatus::InProgress), 0);
        assert_eq!(summary.total(), 3);
    }
}
