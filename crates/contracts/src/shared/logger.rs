use serde::{Deserialize, Serialize};

/// Запись системного журнала сервера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}
