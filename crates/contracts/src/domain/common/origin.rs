use serde::{Deserialize, Serialize};

/// Источник данных для агрегата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Каталог магазина
    Store,
    /// Торговая площадка (данные пришли с канала)
    Channel,
    /// Собственная система
    #[serde(rename = "self")]
    Self_,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Store => "store",
            Origin::Channel => "channel",
            Origin::Self_ => "self",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
