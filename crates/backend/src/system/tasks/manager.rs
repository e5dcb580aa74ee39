use anyhow::Result;
use async_trait::async_trait;

/// Трейт для менеджеров периодических задач синхронизации.
/// Каждый конкретный тип задачи должен иметь свою реализацию этого трейта.
#[async_trait]
pub trait TaskManager: Send + Sync {
    /// Возвращает тип задачи, который обрабатывает этот менеджер.
    fn task_type(&self) -> &'static str;

    /// Запускает один проход задачи.
    ///
    /// Защита от параллельного запуска лежит не здесь: каждая задача
    /// сама берёт свою именованную блокировку и молча выходит, если
    /// блокировка уже занята.
    async fn run(&self) -> Result<()>;
}
