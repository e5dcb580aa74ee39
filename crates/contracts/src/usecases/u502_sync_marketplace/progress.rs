use serde::{Deserialize, Serialize};

/// Состояние прогресса задачи синхронизации.
///
/// Хранится в data-колонке записи блокировки: прогресс — побочный канал
/// «наилучших усилий», при падении процесса он может остаться устаревшим
/// до внешней очистки блокировки.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncProgressState {
    /// Человекочитаемый заголовок задачи
    pub title: String,
    /// Процент выполнения (0..=100)
    pub percentage: u8,
    /// Текущий этап
    pub details: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl SyncProgressState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            percentage: 0,
            details: None,
            updated_at: chrono::Utc::now(),
        }
    }
}
