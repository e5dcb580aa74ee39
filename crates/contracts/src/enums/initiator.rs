use serde::{Deserialize, Serialize};

use super::status_changer::StatusChanger;

/// От чьего имени пишется запись журнала действий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initiator {
    Unknown,
    User,
    Extension,
}

impl Initiator {
    pub fn code(&self) -> i32 {
        match self {
            Initiator::Unknown => 0,
            Initiator::User => 1,
            Initiator::Extension => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Initiator::Unknown => "Unknown",
            Initiator::User => "User",
            Initiator::Extension => "Extension",
        }
    }
}

impl From<StatusChanger> for Initiator {
    /// Фиксированное трёхвариантное сопоставление: пользователь и
    /// «неизвестно» сохраняются, всё остальное — работа расширения
    fn from(changer: StatusChanger) -> Self {
        match changer {
            StatusChanger::Unknown => Initiator::Unknown,
            StatusChanger::User => Initiator::User,
            _ => Initiator::Extension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiator_mapping() {
        assert_eq!(Initiator::from(StatusChanger::Unknown), Initiator::Unknown);
        assert_eq!(Initiator::from(StatusChanger::User), Initiator::User);
        assert_eq!(Initiator::from(StatusChanger::Synch), Initiator::Extension);
        assert_eq!(
            Initiator::from(StatusChanger::Component),
            Initiator::Extension
        );
        // незнакомый код тоже приводит к Extension
        assert_eq!(
            Initiator::from(StatusChanger::from_code(99)),
            Initiator::Extension
        );
    }
}
