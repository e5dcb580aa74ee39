use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::action_type::ActionType;
use contracts::enums::log_priority::LogPriority;
use contracts::enums::message_kind::MessageKind;
use contracts::enums::status_changer::StatusChanger;
use contracts::usecases::u501_process_action_response::configurator::ActionConfigurator;
use contracts::usecases::u501_process_action_response::message::ActionMessage;
use contracts::usecases::u501_process_action_response::request::{ActionParams, PreparedLogMessage};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::a004_listing_product;

use super::error::ProcessError;
use super::logger::ActionLogger;
use super::parent_processor;
use super::request_data::RequestData;
use super::types::{self, ActionTypeResponse, SuccessContext};

/// Обработчик ответа канала на одно действие над товаром листинга.
///
/// Все зависимости собираются сразу при создании: товар загружается
/// по id, код действия разбирается (и отвергается до разрешения
/// стратегии), журнал и стратегия строятся один раз. Дальше обработчик
/// только читает их — ленивых полей нет.
pub struct ResponseHandler {
    listing_product: ListingProduct,
    action_type: ActionType,
    status_changer: StatusChanger,
    configurator: ActionConfigurator,
    request_data: RequestData,
    request_log_messages: Vec<PreparedLogMessage>,
    logger: ActionLogger,
    response_object: Box<dyn ActionTypeResponse>,
    is_success: bool,
}

impl std::fmt::Debug for ResponseHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseHandler")
            .field("action_type", &self.action_type)
            .field("status_changer", &self.status_changer)
            .field("is_success", &self.is_success)
            .finish_non_exhaustive()
    }
}

impl ResponseHandler {
    pub async fn new(params: ActionParams) -> anyhow::Result<Self> {
        // незнакомый код действия — ошибка конфигурации очереди команд,
        // отказываем до обращения к стратегии и к БД
        let action_type = ActionType::from_code(params.action_type)
            .map_err(|_| ProcessError::UnknownActionType(params.action_type))?;

        let product_id = Uuid::parse_str(&params.listing_product_id)
            .map_err(|_| ProcessError::InvalidProductId(params.listing_product_id.clone()))?;

        let listing_product = a004_listing_product::repository::get_by_id(product_id)
            .await?
            .ok_or_else(|| ProcessError::ProductNotFound(params.listing_product_id.clone()))?;

        let status_changer = StatusChanger::from_code(params.status_changer);
        let logger = ActionLogger::new(params.action_id, params.logs_action.clone(), status_changer);
        let response_object = types::resolve(action_type);

        Ok(Self {
            listing_product,
            action_type,
            status_changer,
            configurator: params.configurator,
            request_data: RequestData::new(params.request_data),
            request_log_messages: params.request_metadata.log_messages,
            logger,
            response_object,
            is_success: false,
        })
    }

    /// Полный цикл обработки: валидация формы ответа, разбор и
    /// журналирование сообщений, применение успеха.
    pub async fn process(&mut self, response_data: &Value) -> anyhow::Result<()> {
        tracing::debug!(
            "Processing {} response for {}",
            self.action_type.label(),
            self.listing_product.base.code
        );

        if !self.validate_response(response_data) {
            return Err(ProcessError::InvalidResponseShape.into());
        }

        self.process_response_data(response_data).await
    }

    /// Узнаваема ли форма ответа для текущего действия
    pub fn validate_response(&self, response_data: &Value) -> bool {
        self.response_object.is_valid_response_shape(response_data)
    }

    /// Транспортный сбой: структурированного ответа нет вообще.
    /// Сообщение пишется с высоким приоритетом, признак успеха не трогается.
    pub async fn fail_detected(&self, message_text: &str) -> anyhow::Result<()> {
        let message = ActionMessage::from_prepared_data(message_text, MessageKind::Error);
        self.logger
            .log_listing_product_message(&self.listing_product, &message, LogPriority::High)
            .await
    }

    async fn process_response_data(&mut self, response_data: &Value) -> anyhow::Result<()> {
        let messages = self.collect_messages(response_data);

        if !self.process_messages(&messages).await? {
            return Ok(());
        }

        let success_params = self.successful_params(response_data);
        self.process_success(&success_params).await
    }

    /// Сообщения цикла в исходном порядке: сперва накопленные при сборке
    /// запроса, затем ошибки из ответа канала.
    fn collect_messages(&self, response_data: &Value) -> Vec<ActionMessage> {
        let mut messages: Vec<ActionMessage> = self
            .request_log_messages
            .iter()
            .map(|m| ActionMessage::from_prepared_data(m.text.clone(), m.kind))
            .collect();

        if let Some(errors) = response_data.get("errors").and_then(Value::as_array) {
            for entry in errors {
                messages.push(ActionMessage::from_response_data(entry));
            }
        }

        messages
    }

    /// Журналирует сообщения и возвращает вердикт: одна ошибка в любом
    /// месте последовательности лишает цикл успеха.
    async fn process_messages(&self, messages: &[ActionMessage]) -> anyhow::Result<bool> {
        let mut has_error = false;

        for message in messages {
            if !has_error {
                has_error = message.is_error();
            }

            self.logger
                .log_listing_product_message(&self.listing_product, message, LogPriority::Normal)
                .await?;
        }

        Ok(!has_error)
    }

    /// Параметры успеха по умолчанию — весь подготовленный ответ
    fn successful_params(&self, response_data: &Value) -> Value {
        response_data.clone()
    }

    async fn process_success(&mut self, params: &Value) -> anyhow::Result<()> {
        self.response_object.apply_success(
            &mut self.listing_product,
            &SuccessContext {
                response_data: params,
                request_data: &self.request_data,
                configurator: &self.configurator,
                status_changer: self.status_changer,
            },
        );
        a004_listing_product::service::save(&mut self.listing_product).await?;

        let message = ActionMessage::from_prepared_data(
            self.response_object.successful_message(),
            MessageKind::Success,
        );
        self.logger
            .log_listing_product_message(&self.listing_product, &message, LogPriority::Normal)
            .await?;

        self.is_success = true;
        Ok(())
    }

    /// Пост-хук, выполняется всегда после обработки ответа.
    /// Без успеха он ничего не делает; при успехе запускает каскад
    /// пересчёта родителя вариативной связки.
    pub async fn event_after_executing(&self) -> anyhow::Result<()> {
        if !self.is_success {
            return Ok(());
        }

        parent_processor::process_parent(&self.listing_product).await
    }

    /// Единственный внешний признак успеха цикла
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn listing_product(&self) -> &ListingProduct {
        &self.listing_product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_listing_product::aggregate::VariationRole;
    use contracts::enums::listing_status::ListingStatus;
    use contracts::usecases::u501_process_action_response::request::RequestMetadata;
    use serde_json::json;

    use crate::domain::a004_listing_product::repository;
    use crate::domain::a006_listing_log;
    use crate::shared::data::db;

    async fn init_test_db() {
        let path = std::env::temp_dir().join(format!("backend-test-{}.db", std::process::id()));
        db::initialize_database(Some(path.to_str().unwrap()))
            .await
            .unwrap();
    }

    async fn seed_product(role: VariationRole, parent_ref: Option<String>) -> ListingProduct {
        let product = ListingProduct::new_for_insert(
            "LP-TEST".into(),
            "Test product".into(),
            "listing-1".into(),
            "account-1".into(),
            "marketplace-1".into(),
            42,
            role,
            parent_ref,
        );
        repository::insert(&product).await.unwrap();
        product
    }

    fn params(product: &ListingProduct, action_type: i32, action_id: i64) -> ActionParams {
        ActionParams {
            listing_product_id: product.to_string_id(),
            action_type,
            action_id,
            logs_action: "List Product on Channel".into(),
            status_changer: 2,
            lock_identifier: "list".into(),
            request_data: json!({"sku": "REQ-SKU", "qty": 4, "price": 15.0}),
            request_metadata: RequestMetadata::default(),
            configurator: ActionConfigurator::full(),
            params: json!({}),
        }
    }

    #[tokio::test]
    async fn test_sku_only_response_is_success_with_one_success_message() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;
        let action_id = 910_001;

        let mut handler = ResponseHandler::new(params(&product, 1, action_id))
            .await
            .unwrap();
        handler.process(&json!({"sku": "CH-SKU-1"})).await.unwrap();
        handler.event_after_executing().await.unwrap();

        assert!(handler.is_success());

        let entries = a006_listing_log::repository::list_by_action_id(action_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message_kind, MessageKind::Success);

        let stored = repository::get_by_id(product.base.id.value())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ListingStatus::Listed);
        assert_eq!(stored.online_sku.as_deref(), Some("CH-SKU-1"));
    }

    #[tokio::test]
    async fn test_error_entry_vetoes_success_and_skips_applier() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;
        let action_id = 910_002;

        let mut handler = ResponseHandler::new(params(&product, 1, action_id))
            .await
            .unwrap();
        handler
            .process(&json!({
                "errors": [
                    {"message": "Listing rejected", "severity": "ERROR"}
                ]
            }))
            .await
            .unwrap();
        handler.event_after_executing().await.unwrap();

        assert!(!handler.is_success());

        // применение успеха не выполнялось — товар остался как был
        let stored = repository::get_by_id(product.base.id.value())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ListingStatus::NotListed);
        assert!(stored.online_sku.is_none());

        let entries = a006_listing_log::repository::list_by_action_id(action_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message_kind, MessageKind::Error);
    }

    #[tokio::test]
    async fn test_messages_are_logged_in_original_order() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;
        let action_id = 910_003;

        let mut p = params(&product, 3, action_id);
        p.request_metadata = RequestMetadata {
            log_messages: vec![
                PreparedLogMessage {
                    text: "request note one".into(),
                    kind: MessageKind::Notice,
                },
                PreparedLogMessage {
                    text: "request warning two".into(),
                    kind: MessageKind::Warning,
                },
            ],
        };

        let mut handler = ResponseHandler::new(p).await.unwrap();
        handler
            .process(&json!({
                "errors": [
                    {"message": "channel error one", "severity": "ERROR"},
                    {"message": "channel warning two", "severity": "WARNING"}
                ]
            }))
            .await
            .unwrap();

        assert!(!handler.is_success());

        let entries = a006_listing_log::repository::list_by_action_id(action_id)
            .await
            .unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "request note one",
                "request warning two",
                "channel error one",
                "channel warning two"
            ]
        );
    }

    #[tokio::test]
    async fn test_fail_detected_logs_high_priority_and_keeps_failure() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;
        let action_id = 910_004;

        let handler = ResponseHandler::new(params(&product, 1, action_id))
            .await
            .unwrap();
        handler
            .fail_detected("Connection to channel timed out")
            .await
            .unwrap();
        handler.event_after_executing().await.unwrap();

        assert!(!handler.is_success());

        let entries = a006_listing_log::repository::list_by_action_id(action_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].priority, LogPriority::High);
        assert_eq!(entries[0].message_kind, MessageKind::Error);
    }

    #[tokio::test]
    async fn test_unrecognized_shape_is_surfaced() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;

        let mut handler = ResponseHandler::new(params(&product, 1, 910_005))
            .await
            .unwrap();
        let err = handler
            .process(&json!({"unexpected": true}))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::InvalidResponseShape)
        ));
        assert!(!handler.is_success());
    }

    #[tokio::test]
    async fn test_unknown_action_code_fails_before_anything_else() {
        init_test_db().await;
        let product = seed_product(VariationRole::Individual, None).await;

        let err = ResponseHandler::new(params(&product, 99, 910_006))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::UnknownActionType(99))
        ));
    }

    #[tokio::test]
    async fn test_child_success_cascades_to_parent_once() {
        init_test_db().await;

        let parent = seed_product(VariationRole::RelationParent, None).await;
        let mut child = ListingProduct::new_for_insert(
            "LP-CHILD".into(),
            "Child product".into(),
            "listing-1".into(),
            "account-1".into(),
            "marketplace-1".into(),
            43,
            VariationRole::RelationChild,
            Some(parent.to_string_id()),
        );
        child.online_qty = Some(9);
        repository::insert(&child).await.unwrap();

        let mut handler = ResponseHandler::new(params(&child, 1, 910_007))
            .await
            .unwrap();
        handler.process(&json!({"sku": "CH-SKU-C"})).await.unwrap();
        handler.event_after_executing().await.unwrap();

        assert!(handler.is_success());

        // родитель пересчитан по потомкам: потомок активен — связка активна
        let stored_parent = repository::get_by_id(parent.base.id.value())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_parent.status, ListingStatus::Listed);
        assert_eq!(stored_parent.status_changer, StatusChanger::Synch);
        assert_eq!(stored_parent.online_qty, Some(4));
    }

    #[tokio::test]
    async fn test_individual_success_never_touches_parents() {
        init_test_db().await;

        let bystander = seed_product(VariationRole::RelationParent, None).await;
        let product = seed_product(VariationRole::Individual, None).await;

        let mut handler = ResponseHandler::new(params(&product, 1, 910_008))
            .await
            .unwrap();
        handler.process(&json!({"sku": "CH-SKU-I"})).await.unwrap();
        handler.event_after_executing().await.unwrap();

        assert!(handler.is_success());

        let stored_bystander = repository::get_by_id(bystander.base.id.value())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_bystander.status, ListingStatus::NotListed);
        assert_eq!(stored_bystander.status_changer, StatusChanger::Unknown);
    }
}
