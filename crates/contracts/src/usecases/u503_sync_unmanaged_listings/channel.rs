use serde::{Deserialize, Serialize};

/// Позиция из снимка листингов аккаунта на канале.
///
/// Снимки складываются транспортным слоем в сырое хранилище как JSON-массив
/// таких записей; обязателен только SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelListingEntry {
    pub sku: String,
    pub title: Option<String>,
    #[serde(rename = "itemId")]
    pub item_id: Option<String>,
    pub price: Option<f64>,
    pub qty: Option<i32>,
    /// Статус позиции в обозначениях канала ("ACTIVE", "RETIRED", ...)
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_parsing_tolerates_sparse_entries() {
        let raw = r#"[
            {"sku": "SKU-1", "title": "Blue mug", "itemId": "W100", "price": 9.99, "qty": 5, "status": "ACTIVE"},
            {"sku": "SKU-2"}
        ]"#;
        let entries: Vec<ChannelListingEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].item_id.as_deref(), Some("W100"));
        assert!(entries[1].title.is_none());
        assert!(entries[1].qty.is_none());
    }
}
