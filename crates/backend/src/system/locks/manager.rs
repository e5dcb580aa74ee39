use super::repository;

/// Управление одной именованной блокировкой.
///
/// Блокировка кооперативная: она ничего не принуждает сама по себе,
/// задачи синхронизации обязаны проверять её перед запуском.
pub struct LockItemManager {
    nick: String,
}

impl LockItemManager {
    pub fn new(nick: impl Into<String>) -> Self {
        Self { nick: nick.into() }
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub async fn is_exist(&self) -> anyhow::Result<bool> {
        repository::exists(&self.nick).await
    }

    /// Создать блокировку; false — nick уже занят
    pub async fn create(&self) -> anyhow::Result<bool> {
        repository::create(&self.nick).await
    }

    pub async fn remove(&self) -> anyhow::Result<()> {
        repository::remove(&self.nick).await
    }
}
