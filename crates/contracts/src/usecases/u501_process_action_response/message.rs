use crate::enums::message_kind::MessageKind;
use serde::{Deserialize, Serialize};

/// Диагностическое сообщение одного цикла обработки ответа канала.
///
/// Классификация задаётся при создании и дальше не меняется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMessage {
    text: String,
    kind: MessageKind,
}

impl ActionMessage {
    /// Создать сообщение из уже готовых данных (текст + классификация)
    pub fn from_prepared_data(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Создать сообщение из структурированной записи `errors` ответа канала.
    ///
    /// Каналы присылают записи разной полноты, поэтому все поля
    /// необязательны: отсутствие текста, кода или ссылки на поле
    /// не должно ронять разбор.
    pub fn from_response_data(data: &serde_json::Value) -> Self {
        let base_text = data
            .get("message")
            .and_then(|v| v.as_str())
            .or_else(|| data.get("description").and_then(|v| v.as_str()))
            .map(|s| s.to_string())
            .unwrap_or_else(|| match data.get("code") {
                Some(code) => format!("Channel returned failure code {}", code),
                None => "Channel returned an unrecognized failure".to_string(),
            });

        let text = match data.get("field").and_then(|v| v.as_str()) {
            Some(field) if !field.is_empty() => format!("{} (field: {})", base_text, field),
            _ => base_text,
        };

        let kind = data
            .get("severity")
            .and_then(|v| v.as_str())
            .or_else(|| data.get("type").and_then(|v| v.as_str()))
            .map(MessageKind::from_channel_code)
            .unwrap_or(MessageKind::Error);

        Self { text, kind }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    pub fn is_warning(&self) -> bool {
        self.kind == MessageKind::Warning
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_prepared_data() {
        let m = ActionMessage::from_prepared_data("all good", MessageKind::Success);
        assert_eq!(m.text(), "all good");
        assert!(m.is_success());
        assert!(!m.is_error());
    }

    #[test]
    fn test_from_response_data_full_entry() {
        let m = ActionMessage::from_response_data(&json!({
            "code": "ERR_PRICE",
            "field": "price",
            "message": "Price is below the allowed minimum",
            "severity": "ERROR"
        }));
        assert_eq!(m.text(), "Price is below the allowed minimum (field: price)");
        assert!(m.is_error());
    }

    #[test]
    fn test_from_response_data_missing_optional_fields() {
        // только текст — классификация по умолчанию Error
        let m = ActionMessage::from_response_data(&json!({"message": "boom"}));
        assert_eq!(m.text(), "boom");
        assert!(m.is_error());

        // вообще пустая запись не роняет разбор
        let m = ActionMessage::from_response_data(&json!({}));
        assert_eq!(m.text(), "Channel returned an unrecognized failure");
        assert!(m.is_error());

        // только код
        let m = ActionMessage::from_response_data(&json!({"code": "E123"}));
        assert!(m.text().contains("E123"));
    }

    #[test]
    fn test_from_response_data_severity_variants() {
        let m = ActionMessage::from_response_data(&json!({
            "message": "heads up",
            "severity": "WARNING"
        }));
        assert!(m.is_warning());

        let m = ActionMessage::from_response_data(&json!({
            "message": "fyi",
            "type": "INFO"
        }));
        assert_eq!(m.kind(), MessageKind::Notice);
    }
}
