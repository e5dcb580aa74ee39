pub mod list;
pub mod relist;
pub mod retire;
pub mod revise;
pub mod stop;

use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::action_type::ActionType;
use contracts::enums::status_changer::StatusChanger;
use contracts::usecases::u501_process_action_response::configurator::ActionConfigurator;
use serde_json::Value;

use super::request_data::RequestData;

/// Контекст применения успешного ответа к товару листинга
pub struct SuccessContext<'a> {
    /// Подготовленные данные успеха (по умолчанию — весь ответ канала)
    pub response_data: &'a Value,
    /// Что отправлялось на канал
    pub request_data: &'a RequestData,
    /// Какие аспекты товара затрагивало действие
    pub configurator: &'a ActionConfigurator,
    /// От чьего имени менялся статус
    pub status_changer: StatusChanger,
}

/// Стратегия одного типа действия: как применить успех к товару
/// и что писать в журнал.
pub trait ActionTypeResponse: Send + Sync {
    /// Текст сообщения журнала при успехе
    fn successful_message(&self) -> &'static str;

    /// Ключ, по которому канал подтверждает успех этого действия
    fn success_key(&self) -> &'static str {
        "sku"
    }

    /// Узнаваема ли форма ответа для этого действия.
    ///
    /// Форма задаётся стратегией, а не общим кодом: у разных действий
    /// каналы подтверждают успех разными ключами.
    fn is_valid_response_shape(&self, response: &Value) -> bool {
        response.get(self.success_key()).is_some() || response.get("errors").is_some()
    }

    /// Применить успех: обновить состояние товара листинга
    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>);
}

/// Закрытое соответствие «тип действия → стратегия».
///
/// Новое действие добавляется только парой: вариант ActionType
/// плюс стратегия здесь — match не даст забыть ни одну сторону.
pub fn resolve(action_type: ActionType) -> Box<dyn ActionTypeResponse> {
    match action_type {
        ActionType::List => Box::new(list::ListResponse),
        ActionType::Relist => Box::new(relist::RelistResponse),
        ActionType::Revise => Box::new(revise::ReviseResponse),
        ActionType::Stop => Box::new(stop::StopResponse),
        ActionType::Delete => Box::new(retire::RetireResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_action_type_resolves() {
        for action in [
            ActionType::List,
            ActionType::Relist,
            ActionType::Revise,
            ActionType::Stop,
            ActionType::Delete,
        ] {
            let strategy = resolve(action);
            assert!(!strategy.successful_message().is_empty());
        }
    }

    #[test]
    fn test_default_response_shape() {
        let strategy = resolve(ActionType::List);
        assert!(strategy.is_valid_response_shape(&json!({"sku": "A"})));
        assert!(strategy.is_valid_response_shape(&json!({"errors": []})));
        assert!(!strategy.is_valid_response_shape(&json!({"something": 1})));
    }
}
