use serde::{Deserialize, Serialize};

/// Флаги одного действия: какие аспекты товара оно затрагивает.
///
/// Полный режим (все флаги включены) — значение по умолчанию;
/// частичный режим используется, например, при ревизии только остатков.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfigurator {
    #[serde(default = "default_true")]
    pub qty: bool,
    #[serde(default = "default_true")]
    pub price: bool,
    #[serde(default = "default_true")]
    pub promotions: bool,
    #[serde(default = "default_true")]
    pub details: bool,
}

fn default_true() -> bool {
    true
}

impl ActionConfigurator {
    /// Полный режим: действие затрагивает все аспекты
    pub fn full() -> Self {
        Self {
            qty: true,
            price: true,
            promotions: true,
            details: true,
        }
    }

    /// Частичный режим: только явно включённые аспекты
    pub fn partial(qty: bool, price: bool, promotions: bool, details: bool) -> Self {
        Self {
            qty,
            price,
            promotions,
            details,
        }
    }

    pub fn is_default_mode(&self) -> bool {
        self.qty && self.price && self.promotions && self.details
    }
}

impl Default for ActionConfigurator {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_mode() {
        assert!(ActionConfigurator::default().is_default_mode());
    }

    #[test]
    fn test_missing_flags_deserialize_as_enabled() {
        let c: ActionConfigurator = serde_json::from_str("{}").unwrap();
        assert!(c.is_default_mode());

        let c: ActionConfigurator = serde_json::from_str(r#"{"qty": true, "price": false}"#).unwrap();
        assert!(c.qty);
        assert!(!c.price);
        assert!(c.promotions);
        assert!(!c.is_default_mode());
    }

    #[test]
    fn test_round_trip() {
        let c = ActionConfigurator::partial(true, false, false, true);
        let json = serde_json::to_string(&c).unwrap();
        let back: ActionConfigurator = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
