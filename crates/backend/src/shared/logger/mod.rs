pub mod repository;

use repository::log_event_internal;

/// Логирование события на сервере
///
/// # Примеры
/// ```
/// logger::log("startup", "Сервер запущен");
/// logger::log("sync", "Запущена синхронизация площадки");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
