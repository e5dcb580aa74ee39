use super::configurator::ActionConfigurator;
use crate::enums::message_kind::MessageKind;
use serde::{Deserialize, Serialize};

/// Неизменяемый набор входных данных одного цикла обработки ответа.
///
/// Собирается один раз из записи очереди команд и дальше только читается.
/// Коды действия и инициатора хранятся сырыми числами — так они лежат
/// в очереди; их разбор (и отказ на незнакомом коде) происходит при
/// создании обработчика.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionParams {
    /// Товар листинга (ссылка на a004_listing_product)
    #[serde(rename = "listingProductId")]
    pub listing_product_id: String,

    /// Числовой код действия (List/Relist/Revise/Stop/Delete)
    #[serde(rename = "actionType")]
    pub action_type: i32,

    /// Идентификатор действия для журнала
    #[serde(rename = "actionId")]
    pub action_id: i64,

    /// Метка действия для журнала
    #[serde(rename = "logsAction")]
    pub logs_action: String,

    /// Числовой код инициатора смены статуса
    #[serde(rename = "statusChanger")]
    pub status_changer: i32,

    /// Идентификатор блокировки, под которой шло действие
    #[serde(rename = "lockIdentifier")]
    pub lock_identifier: String,

    /// Исходный payload запроса к каналу
    #[serde(rename = "requestData", default)]
    pub request_data: serde_json::Value,

    /// Метаданные запроса (сообщения, накопленные при его сборке)
    #[serde(rename = "requestMetadata", default)]
    pub request_metadata: RequestMetadata,

    /// Флаги действия
    #[serde(default)]
    pub configurator: ActionConfigurator,

    /// Параметры для построения обработчика успеха
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Метаданные запроса, переносимые через цикл запрос → ответ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestMetadata {
    /// Сообщения, подготовленные ещё при сборке запроса
    #[serde(rename = "logMessages", default)]
    pub log_messages: Vec<PreparedLogMessage>,
}

/// Сообщение, подготовленное при сборке запроса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedLogMessage {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}
