use serde::{Deserialize, Serialize};

/// Приоритет записи журнала действий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPriority {
    Low,
    Normal,
    High,
}

impl LogPriority {
    pub fn code(&self) -> i32 {
        match self {
            LogPriority::Low => 0,
            LogPriority::Normal => 1,
            LogPriority::High => 2,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => LogPriority::Low,
            2 => LogPriority::High,
            _ => LogPriority::Normal,
        }
    }
}

impl Default for LogPriority {
    fn default() -> Self {
        LogPriority::Normal
    }
}
