use serde::{Deserialize, Serialize};

/// Семейство задач синхронизации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncTaskType {
    /// Общая синхронизация данных площадки
    General,
    /// Сверка листингов, которые магазин не ведёт сам
    UnmanagedListings,
}

impl SyncTaskType {
    pub fn code(&self) -> &'static str {
        match self {
            SyncTaskType::General => "general",
            SyncTaskType::UnmanagedListings => "unmanaged_listings",
        }
    }
}
