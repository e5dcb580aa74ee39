use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::enums::listing_status::ListingStatus;
use crate::enums::status_changer::StatusChanger;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара листинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingProductId(pub Uuid);

impl ListingProductId {
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

impl AggregateId for ListingProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ListingProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Variation relation
// ============================================================================

/// Роль товара в вариативной связке родитель/потомок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationRole {
    /// Обычный товар без вариаций
    Individual,
    /// Родитель связки (агрегирует SKU потомков)
    RelationParent,
    /// Потомок связки (конкретный вариант: размер/цвет)
    RelationChild,
}

impl VariationRole {
    /// Участвует ли товар в связке родитель/потомок
    pub fn is_relation_mode(&self) -> bool {
        matches!(
            self,
            VariationRole::RelationParent | VariationRole::RelationChild
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariationRole::Individual => "individual",
            VariationRole::RelationParent => "relation_parent",
            VariationRole::RelationChild => "relation_child",
        }
    }

    /// Разбор строкового кода из БД; незнакомое значение — обычный товар
    pub fn from_str_code(code: &str) -> Self {
        match code {
            "relation_parent" => VariationRole::RelationParent,
            "relation_child" => VariationRole::RelationChild,
            _ => VariationRole::Individual,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар листинга — связь товара магазина с его размещением на канале
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingProduct {
    #[serde(flatten)]
    pub base: BaseAggregate<ListingProductId>,

    /// Листинг (ссылка на a003_listing)
    #[serde(rename = "listingRef")]
    pub listing_ref: String,

    /// Аккаунт продавца (ссылка на a002_account)
    #[serde(rename = "accountRef")]
    pub account_ref: String,

    /// Площадка (ссылка на a001_marketplace)
    #[serde(rename = "marketplaceRef")]
    pub marketplace_ref: String,

    /// ID товара в каталоге магазина
    #[serde(rename = "storeProductId")]
    pub store_product_id: i64,

    /// Статус размещения на канале
    pub status: ListingStatus,

    /// Кто последним менял статус
    #[serde(rename = "statusChanger")]
    pub status_changer: StatusChanger,

    /// SKU, под которым канал знает товар (присваивается при размещении)
    #[serde(rename = "onlineSku")]
    pub online_sku: Option<String>,

    /// Внутренний идентификатор позиции на канале (item id / wpid)
    #[serde(rename = "channelItemId")]
    pub channel_item_id: Option<String>,

    /// Текущая цена на канале
    #[serde(rename = "onlinePrice")]
    pub online_price: Option<f64>,

    /// Текущий остаток на канале
    #[serde(rename = "onlineQty")]
    pub online_qty: Option<i32>,

    /// Роль в вариативной связке
    #[serde(rename = "variationRole")]
    pub variation_role: VariationRole,

    /// Родитель связки (заполнено только для RelationChild)
    #[serde(rename = "parentProductRef")]
    pub parent_product_ref: Option<String>,
}

impl ListingProduct {
    /// Создать новый товар листинга для вставки в БД
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        listing_ref: String,
        account_ref: String,
        marketplace_ref: String,
        store_product_id: i64,
        variation_role: VariationRole,
        parent_product_ref: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ListingProductId::new_v4(), code, description),
            listing_ref,
            account_ref,
            marketplace_ref,
            store_product_id,
            status: ListingStatus::NotListed,
            status_changer: StatusChanger::Unknown,
            online_sku: None,
            channel_item_id: None,
            online_price: None,
            online_qty: None,
            variation_role,
            parent_product_ref,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Есть ли у товара идентичность на канале
    pub fn has_channel_identity(&self) -> bool {
        self.online_sku.is_some() || self.channel_item_id.is_some()
    }

    /// Запомнить идентификаторы, присвоенные каналом при размещении
    pub fn assign_channel_identity(&mut self, sku: Option<String>, item_id: Option<String>) {
        if sku.is_some() {
            self.online_sku = sku;
        }
        if item_id.is_some() {
            self.channel_item_id = item_id;
        }
    }

    /// Сбросить идентичность канала (после снятия с площадки)
    pub fn drop_channel_identity(&mut self) {
        self.online_sku = None;
        self.channel_item_id = None;
        self.online_price = None;
        self.online_qty = None;
    }

    /// Перевести товар в новый статус
    pub fn set_status(&mut self, status: ListingStatus, changer: StatusChanger) {
        self.status = status;
        self.status_changer = changer;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.listing_ref.trim().is_empty() {
            return Err("Ссылка на листинг не может быть пустой".into());
        }
        if self.store_product_id <= 0 {
            return Err("ID товара магазина должен быть положительным".into());
        }
        if self.variation_role == VariationRole::RelationChild && self.parent_product_ref.is_none()
        {
            return Err("Потомок вариативной связки обязан ссылаться на родителя".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for ListingProduct {
    type Id = ListingProductId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "listing_product"
    }

    fn element_name() -> &'static str {
        "Товар листинга"
    }

    fn list_name() -> &'static str {
        "Товары листингов"
    }

    fn origin() -> Origin {
        Origin::Store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(role: VariationRole, parent: Option<&str>) -> ListingProduct {
        ListingProduct::new_for_insert(
            "LP-1".into(),
            "Test product".into(),
            "listing-1".into(),
            "account-1".into(),
            "marketplace-1".into(),
            42,
            role,
            parent.map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_relation_mode() {
        assert!(!VariationRole::Individual.is_relation_mode());
        assert!(VariationRole::RelationParent.is_relation_mode());
        assert!(VariationRole::RelationChild.is_relation_mode());
    }

    #[test]
    fn test_child_requires_parent_ref() {
        assert!(product(VariationRole::RelationChild, None).validate().is_err());
        assert!(product(VariationRole::RelationChild, Some("parent-1"))
            .validate()
            .is_ok());
        assert!(product(VariationRole::Individual, None).validate().is_ok());
    }

    #[test]
    fn test_channel_identity() {
        let mut p = product(VariationRole::Individual, None);
        assert!(!p.has_channel_identity());

        p.assign_channel_identity(Some("SKU-1".into()), Some("WPID-1".into()));
        assert!(p.has_channel_identity());

        // None не затирает уже присвоенные значения
        p.assign_channel_identity(None, None);
        assert_eq!(p.online_sku.as_deref(), Some("SKU-1"));

        p.drop_channel_identity();
        assert!(!p.has_channel_identity());
        assert!(p.online_qty.is_none());
    }
}
