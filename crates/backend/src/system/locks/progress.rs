use contracts::usecases::u502_sync_marketplace::progress::SyncProgressState;

use super::repository;

/// Прогресс задачи, привязанный к её блокировке.
///
/// Состояние пишется в data-колонку записи блокировки по принципу
/// «наилучших усилий»: ошибка записи прогресса не должна ронять задачу.
pub struct LockItemProgress {
    nick: String,
    state: SyncProgressState,
}

impl LockItemProgress {
    pub fn new(nick: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            state: SyncProgressState::new(title),
        }
    }

    pub async fn set_percentage(&mut self, percentage: u8) {
        self.state.percentage = percentage.min(100);
        self.flush().await;
    }

    pub async fn set_details(&mut self, details: impl Into<String>) {
        self.state.details = Some(details.into());
        self.flush().await;
    }

    async fn flush(&mut self) {
        self.state.updated_at = chrono::Utc::now();
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize sync progress: {}", e);
                return;
            }
        };
        if let Err(e) = repository::set_data(&self.nick, &json).await {
            tracing::warn!("Failed to store sync progress for '{}': {}", self.nick, e);
        }
    }
}

/// Прочитать прогресс задачи по nick её блокировки
pub async fn read_progress(nick: &str) -> anyhow::Result<Option<SyncProgressState>> {
    let row = repository::get(nick).await?;
    Ok(row
        .and_then(|r| r.data)
        .and_then(|data| serde_json::from_str(&data).ok()))
}
