use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::enums::marketplace_component::MarketplaceComponent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор аккаунта продавца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
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

impl AggregateId for AccountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AccountId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Аккаунт продавца на одной площадке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub base: BaseAggregate<AccountId>,

    /// Компонент канала
    pub component: MarketplaceComponent,

    /// Площадка (ссылка на a001_marketplace)
    #[serde(rename = "marketplaceRef")]
    pub marketplace_ref: String,

    /// Участвует ли аккаунт в синхронизации
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,
}

impl Account {
    pub fn new_for_insert(
        code: String,
        description: String,
        component: MarketplaceComponent,
        marketplace_ref: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(AccountId::new_v4(), code, description),
            component,
            marketplace_ref,
            is_enabled: true,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название аккаунта не может быть пустым".into());
        }
        if self.marketplace_ref.trim().is_empty() {
            return Err("Ссылка на площадку не может быть пустой".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "account"
    }

    fn element_name() -> &'static str {
        "Аккаунт продавца"
    }

    fn list_name() -> &'static str {
        "Аккаунты продавцов"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}
