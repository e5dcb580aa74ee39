use serde::{Deserialize, Serialize};

/// Статус товара листинга на канале
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Ещё не размещён на канале
    NotListed,
    /// Активен на канале
    Listed,
    /// Снят с продажи
    Stopped,
    /// Заблокирован каналом
    Blocked,
}

impl ListingStatus {
    pub fn code(&self) -> i32 {
        match self {
            ListingStatus::NotListed => 0,
            ListingStatus::Listed => 1,
            ListingStatus::Stopped => 2,
            ListingStatus::Blocked => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ListingStatus::NotListed),
            1 => Some(ListingStatus::Listed),
            2 => Some(ListingStatus::Stopped),
            3 => Some(ListingStatus::Blocked),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::NotListed => "Not Listed",
            ListingStatus::Listed => "Listed",
            ListingStatus::Stopped => "Stopped",
            ListingStatus::Blocked => "Blocked",
        }
    }
}
