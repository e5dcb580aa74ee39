use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::enums::listing_status::ListingStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор стороннего листинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnmanagedListingId(pub Uuid);

impl UnmanagedListingId {
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

impl AggregateId for UnmanagedListingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UnmanagedListingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Сторонний листинг — позиция, найденная на канале,
/// которую магазин не ведёт сам
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmanagedListing {
    #[serde(flatten)]
    pub base: BaseAggregate<UnmanagedListingId>,

    /// Аккаунт продавца (ссылка на a002_account)
    #[serde(rename = "accountRef")]
    pub account_ref: String,

    /// Площадка (ссылка на a001_marketplace)
    #[serde(rename = "marketplaceRef")]
    pub marketplace_ref: String,

    /// SKU позиции на канале
    pub sku: String,

    /// Внутренний идентификатор позиции на канале
    #[serde(rename = "channelItemId")]
    pub channel_item_id: Option<String>,

    /// Текущая цена на канале
    #[serde(rename = "onlinePrice")]
    pub online_price: Option<f64>,

    /// Текущий остаток на канале
    #[serde(rename = "onlineQty")]
    pub online_qty: Option<i32>,

    /// Статус позиции на канале
    pub status: ListingStatus,

    /// Сопоставленный товар магазина, если удалось связать
    #[serde(rename = "linkedProductRef")]
    pub linked_product_ref: Option<String>,
}

impl UnmanagedListing {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        account_ref: String,
        marketplace_ref: String,
        sku: String,
        channel_item_id: Option<String>,
        online_price: Option<f64>,
        online_qty: Option<i32>,
        status: ListingStatus,
    ) -> Self {
        Self {
            base: BaseAggregate::new(UnmanagedListingId::new_v4(), code, description),
            account_ref,
            marketplace_ref,
            sku,
            channel_item_id,
            online_price,
            online_qty,
            status,
            linked_product_ref: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU стороннего листинга не может быть пустым".into());
        }
        if self.account_ref.trim().is_empty() {
            return Err("Ссылка на аккаунт не может быть пустой".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for UnmanagedListing {
    type Id = UnmanagedListingId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "unmanaged_listing"
    }

    fn element_name() -> &'static str {
        "Сторонний листинг"
    }

    fn list_name() -> &'static str {
        "Сторонние листинги"
    }

    fn origin() -> Origin {
        Origin::Channel
    }
}
