use crate::enums::initiator::Initiator;
use crate::enums::log_priority::LogPriority;
use crate::enums::message_kind::MessageKind;
use serde::{Deserialize, Serialize};

/// Запись журнала действий над товаром листинга.
///
/// Это не агрегат, а плоская журнальная запись: строки пишутся
/// по одной и никогда не изменяются.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingLogEntry {
    pub id: i64,
    /// Товар листинга (ссылка на a004_listing_product)
    #[serde(rename = "listingProductRef")]
    pub listing_product_ref: String,
    /// Идентификатор действия, объединяющий записи одного цикла
    #[serde(rename = "actionId")]
    pub action_id: i64,
    /// Метка действия (например, "List Product on Walmart")
    pub action: String,
    pub initiator: Initiator,
    pub priority: LogPriority,
    /// Текст сообщения
    pub message: String,
    #[serde(rename = "messageKind")]
    pub message_kind: MessageKind,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
