use serde::{Deserialize, Serialize};

/// Итог одного цикла обработки ответа канала
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessActionResult {
    /// Единственный внешний признак успеха цикла
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}
