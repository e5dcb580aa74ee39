use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use super::registry::TaskManagerRegistry;

/// Одна строка расписания: тип задачи + cron-выражение
struct ScheduleEntry {
    task_type: String,
    schedule: Schedule,
    next_run: Option<DateTime<Utc>>,
}

/// Фоновый воркер для выполнения периодических задач синхронизации.
pub struct ScheduledTaskWorker {
    registry: Arc<TaskManagerRegistry>,
    entries: Vec<ScheduleEntry>,
    interval_seconds: u64,
}

impl ScheduledTaskWorker {
    pub fn new(registry: Arc<TaskManagerRegistry>, interval_seconds: u64) -> Self {
        Self {
            registry,
            entries: Vec::new(),
            interval_seconds,
        }
    }

    /// Добавить задачу в расписание (cron-выражение с секундами)
    pub fn add_schedule(&mut self, task_type: &str, cron_expr: &str) -> anyhow::Result<()> {
        let schedule = Schedule::from_str(cron_expr)
            .map_err(|e| anyhow::anyhow!("Invalid cron expression '{}': {}", cron_expr, e))?;
        self.entries.push(ScheduleEntry {
            task_type: task_type.to_string(),
            schedule,
            next_run: None,
        });
        Ok(())
    }

    /// Запускает цикл выполнения задач.
    pub async fn run_loop(mut self) {
        info!(
            "Scheduled task worker started with interval {} seconds",
            self.interval_seconds
        );
        let mut interval = time::interval(time::Duration::from_secs(self.interval_seconds));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            self.process_due_tasks().await;
        }
    }

    /// Обрабатывает задачи, время выполнения которых наступило.
    async fn process_due_tasks(&mut self) {
        let now = Utc::now();

        for entry in &mut self.entries {
            let due = match entry.next_run {
                Some(next_run) => next_run <= now,
                // первый проход: только вычисляем время запуска
                None => false,
            };

            if due {
                info!("Task '{}' is due, running", entry.task_type);
                match self.registry.get(&entry.task_type) {
                    Some(manager) => {
                        let task_type = entry.task_type.clone();
                        tokio::spawn(async move {
                            if let Err(e) = manager.run().await {
                                error!("Task '{}' failed: {:?}", task_type, e);
                            }
                        });
                    }
                    None => {
                        warn!("No manager registered for task type '{}'", entry.task_type);
                    }
                }
            }

            if due || entry.next_run.is_none() {
                entry.next_run = entry.schedule.after(&now).next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_schedule_rejects_garbage() {
        let mut worker = ScheduledTaskWorker::new(Arc::new(TaskManagerRegistry::new()), 60);
        assert!(worker.add_schedule("u502_sync_marketplace", "0 0 * * * *").is_ok());
        assert!(worker.add_schedule("u502_sync_marketplace", "not a cron").is_err());
    }
}
