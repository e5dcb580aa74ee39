use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::enums::marketplace_component::MarketplaceComponent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор площадки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketplaceId(pub Uuid);

impl MarketplaceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MarketplaceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MarketplaceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Площадка (региональный сайт канала, например "Walmart US")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marketplace {
    #[serde(flatten)]
    pub base: BaseAggregate<MarketplaceId>,

    /// Компонент канала
    pub component: MarketplaceComponent,

    /// Нативный идентификатор площадки на канале
    #[serde(rename = "channelId")]
    pub channel_id: String,

    /// Домен площадки (для построения публичных ссылок)
    pub url: String,

    /// Включена ли площадка в синхронизацию
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,

    /// Время последней успешной синхронизации
    #[serde(rename = "lastSyncAt")]
    pub last_sync_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Кэшированные счётчики товаров листингов (обновляются задачей синхронизации)
    #[serde(rename = "productsTotal")]
    pub products_total: i32,
    #[serde(rename = "productsActive")]
    pub products_active: i32,
}

impl Marketplace {
    /// Создать новую площадку для вставки в БД
    pub fn new_for_insert(
        code: String,
        description: String,
        component: MarketplaceComponent,
        channel_id: String,
        url: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MarketplaceId::new_v4(), code, description),
            component,
            channel_id,
            url,
            is_enabled: true,
            last_sync_at: None,
            products_total: 0,
            products_active: 0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название площадки не может быть пустым".into());
        }
        if self.channel_id.trim().is_empty() {
            return Err("Идентификатор площадки на канале не может быть пустым".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Marketplace {
    type Id = MarketplaceId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "marketplace"
    }

    fn element_name() -> &'static str {
        "Площадка"
    }

    fn list_name() -> &'static str {
        "Площадки"
    }

    fn origin() -> Origin {
        Origin::Channel
    }
}
