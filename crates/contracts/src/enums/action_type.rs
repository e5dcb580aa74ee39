use serde::{Deserialize, Serialize};

/// Тип действия над товаром листинга на канале
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    List,
    Relist,
    Revise,
    Stop,
    Delete,
}

impl ActionType {
    /// Числовой код действия, под которым оно хранится в очереди команд
    pub fn code(&self) -> i32 {
        match self {
            ActionType::List => 1,
            ActionType::Relist => 2,
            ActionType::Revise => 3,
            ActionType::Stop => 4,
            ActionType::Delete => 5,
        }
    }

    /// Разбор числового кода.
    ///
    /// Неизвестный код — это ошибка конфигурации очереди команд,
    /// а не данные: разбор падает сразу.
    pub fn from_code(code: i32) -> anyhow::Result<Self> {
        match code {
            1 => Ok(ActionType::List),
            2 => Ok(ActionType::Relist),
            3 => Ok(ActionType::Revise),
            4 => Ok(ActionType::Stop),
            5 => Ok(ActionType::Delete),
            other => anyhow::bail!("Unknown action type code: {}", other),
        }
    }

    /// Метка действия для журналов
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::List => "List",
            ActionType::Relist => "Relist",
            ActionType::Revise => "Revise",
            ActionType::Stop => "Stop",
            ActionType::Delete => "Delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for action in [
            ActionType::List,
            ActionType::Relist,
            ActionType::Revise,
            ActionType::Stop,
            ActionType::Delete,
        ] {
            assert_eq!(ActionType::from_code(action.code()).unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_code_fails() {
        assert!(ActionType::from_code(0).is_err());
        assert!(ActionType::from_code(6).is_err());
        assert!(ActionType::from_code(-1).is_err());
    }
}
