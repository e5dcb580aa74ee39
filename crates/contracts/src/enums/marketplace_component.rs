use serde::{Deserialize, Serialize};

/// Поддерживаемые торговые площадки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketplaceComponent {
    Ebay,
    Amazon,
    Walmart,
}

impl MarketplaceComponent {
    /// Получить код компонента
    pub fn code(&self) -> &'static str {
        match self {
            MarketplaceComponent::Ebay => "ebay",
            MarketplaceComponent::Amazon => "amazon",
            MarketplaceComponent::Walmart => "walmart",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            MarketplaceComponent::Ebay => "eBay",
            MarketplaceComponent::Amazon => "Amazon",
            MarketplaceComponent::Walmart => "Walmart",
        }
    }

    /// Получить все компоненты
    pub fn all() -> Vec<MarketplaceComponent> {
        vec![
            MarketplaceComponent::Ebay,
            MarketplaceComponent::Amazon,
            MarketplaceComponent::Walmart,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ebay" => Some(MarketplaceComponent::Ebay),
            "amazon" => Some(MarketplaceComponent::Amazon),
            "walmart" => Some(MarketplaceComponent::Walmart),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarketplaceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
