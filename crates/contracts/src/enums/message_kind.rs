use serde::{Deserialize, Serialize};

/// Классификация диагностического сообщения из ответа канала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Notice,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Notice => "notice",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        }
    }

    /// Разбор обозначения серьёзности из ответа канала.
    /// Незнакомое или отсутствующее значение трактуется как ошибка.
    pub fn from_channel_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "INFO" | "NOTICE" => MessageKind::Notice,
            "SUCCESS" => MessageKind::Success,
            "WARNING" | "WARN" => MessageKind::Warning,
            _ => MessageKind::Error,
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
