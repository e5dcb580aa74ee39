use thiserror::Error;

/// Ошибки цикла обработки ответа, которые нельзя поглотить в журнал.
///
/// Бизнес-ошибки канала сюда не попадают: они журналируются и выражаются
/// через `is_success() == false`. Здесь только нарушения протокола и
/// конфигурации, которые обязаны дойти до вызывающего кода.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Ответ не содержит ни ключа успеха, ни коллекции ошибок
    #[error("Channel response has unrecognized shape")]
    InvalidResponseShape,

    /// Код действия не входит в закрытое множество
    #[error("Unknown action type code: {0}")]
    UnknownActionType(i32),

    /// Идентификатор товара из параметров действия не разбирается
    #[error("Invalid listing product id: {0}")]
    InvalidProductId(String),

    /// Товар из параметров действия не найден
    #[error("Listing product {0} not found")]
    ProductNotFound(String),
}
