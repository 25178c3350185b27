//! Industries served.

use crate::ids::IndustryId;
use serde::{Deserialize, Serialize};

/// An industry the company supplies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryServed {
    #[serde(rename = "_id")]
    pub id: IndustryId,
    #[serde(rename = "industryName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "industryDescription", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "industryImage", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "industryPageUrl", default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Position on the page; unordered entries go last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

/// Industries sorted by display order, unordered entries last.
///
/// The sort is stable, so ties keep their stored order.
pub fn in_display_order(industries: &[IndustryServed]) -> Vec<&IndustryServed> {
    let mut sorted: Vec<&IndustryServed> = industries.iter().collect();
    sorted.sort_by_key(|i| (i.display_order.is_none(), i.display_order.unwrap_or_default()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_order() {
        let industries: Vec<IndustryServed> = serde_json::from_value(json!([
            {"_id": "i-1", "industryName": "Textiles"},
            {"_id": "i-2", "industryName": "Pharma", "displayOrder": 2},
            {"_id": "i-3", "industryName": "Food", "displayOrder": 1},
            {"_id": "i-4", "industryName": "Dairy", "displayOrder": 2}
        ]))
        .unwrap();

        let ids: Vec<&str> = in_display_order(&industries)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["i-3", "i-2", "i-4", "i-1"]);
    }
}
