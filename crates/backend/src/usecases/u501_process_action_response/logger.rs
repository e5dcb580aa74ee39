use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::initiator::Initiator;
use contracts::enums::log_priority::LogPriority;
use contracts::enums::status_changer::StatusChanger;
use contracts::usecases::u501_process_action_response::message::ActionMessage;

use crate::domain::a006_listing_log;

/// Журнал одного действия над товаром листинга.
///
/// Инициатор вычисляется один раз при создании из кода смены статуса.
pub struct ActionLogger {
    action_id: i64,
    action: String,
    initiator: Initiator,
}

impl ActionLogger {
    pub fn new(action_id: i64, action: impl Into<String>, status_changer: StatusChanger) -> Self {
        Self {
            action_id,
            action: action.into(),
            initiator: Initiator::from(status_changer),
        }
    }

    pub fn initiator(&self) -> Initiator {
        self.initiator
    }

    /// Записать одно сообщение против товара листинга
    pub async fn log_listing_product_message(
        &self,
        listing_product: &ListingProduct,
        message: &ActionMessage,
        priority: LogPriority,
    ) -> anyhow::Result<()> {
        a006_listing_log::repository::insert_entry(
            &listing_product.to_string_id(),
            self.action_id,
            &self.action,
            self.initiator,
            priority,
            message.text(),
            message.kind(),
        )
        .await?;

        tracing::debug!(
            "[{} by {}] {} #{}: {} ({})",
            self.action,
            self.initiator.label(),
            listing_product.base.code,
            self.action_id,
            message.text(),
            message.kind()
        );

        Ok(())
    }
}
