use serde::{Deserialize, Serialize};

/// Кто инициировал смену статуса товара листинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusChanger {
    Unknown,
    Synch,
    User,
    Component,
}

impl StatusChanger {
    pub fn code(&self) -> i32 {
        match self {
            StatusChanger::Unknown => 0,
            StatusChanger::Synch => 1,
            StatusChanger::User => 2,
            StatusChanger::Component => 3,
        }
    }

    /// Разбор числового кода; незнакомые коды считаются компонентными
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => StatusChanger::Unknown,
            1 => StatusChanger::Synch,
            2 => StatusChanger::User,
            _ => StatusChanger::Component,
        }
    }
}
