use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор листинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub Uuid);

impl ListingId {
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

impl AggregateId for ListingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ListingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Листинг — именованная группа товаров одного аккаунта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(flatten)]
    pub base: BaseAggregate<ListingId>,

    /// Аккаунт продавца (ссылка на a002_account)
    #[serde(rename = "accountRef")]
    pub account_ref: String,

    /// Площадка (ссылка на a001_marketplace)
    #[serde(rename = "marketplaceRef")]
    pub marketplace_ref: String,
}

impl Listing {
    pub fn new_for_insert(
        code: String,
        description: String,
        account_ref: String,
        marketplace_ref: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ListingId::new_v4(), code, description),
            account_ref,
            marketplace_ref,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название листинга не может быть пустым".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Listing {
    type Id = ListingId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "listing"
    }

    fn element_name() -> &'static str {
        "Листинг"
    }

    fn list_name() -> &'static str {
        "Листинги"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}
