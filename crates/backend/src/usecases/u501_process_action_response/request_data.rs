use serde_json::Value;

/// Payload запроса, с которым действие уходило на канал.
///
/// Нужен, чтобы при обработке ответа знать, что именно отправлялось:
/// какие поля были в запросе и какие значения считать намерением.
pub struct RequestData {
    data: Value,
}

impl RequestData {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_null() || self.data.as_object().map(|o| o.is_empty()).unwrap_or(false)
    }

    pub fn sku(&self) -> Option<String> {
        self.data
            .get("sku")
            .and_then(Value::as_str)
            .map(|s| s.to_string())
    }

    pub fn has_qty(&self) -> bool {
        self.data.get("qty").is_some()
    }

    pub fn qty(&self) -> Option<i32> {
        self.data.get("qty").and_then(Value::as_i64).map(|v| v as i32)
    }

    pub fn has_price(&self) -> bool {
        self.data.get("price").is_some()
    }

    pub fn price(&self) -> Option<f64> {
        self.data.get("price").and_then(Value::as_f64)
    }

    pub fn has_lag_time(&self) -> bool {
        self.data.get("lag_time").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let rd = RequestData::new(json!({
            "sku": "SKU-9", "qty": 12, "price": 49.5
        }));
        assert!(!rd.is_empty());
        assert_eq!(rd.sku().as_deref(), Some("SKU-9"));
        assert!(rd.has_qty());
        assert_eq!(rd.qty(), Some(12));
        assert!(rd.has_price());
        assert_eq!(rd.price(), Some(49.5));
        assert!(!rd.has_lag_time());
    }

    #[test]
    fn test_empty_payload() {
        assert!(RequestData::new(Value::Null).is_empty());
        assert!(RequestData::new(json!({})).is_empty());
        assert!(RequestData::new(json!({})).sku().is_none());
    }
}
