use super::{EntityMetadata, Origin};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "marketplace")
    fn collection_name() -> &'static str;

    /// Имя элемента (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка (множественное число)
    fn list_name() -> &'static str;

    /// Источник данных агрегата
    fn origin() -> Origin;
}
