use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::AppError;

const DEFAULT_UNIT: &str = "units";

/// A stocked clinic supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub added_at: DateTime<Utc>,
}

/// Raw values from the add-item sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl NewInventoryItem {
    pub fn validate(&self) -> Result<InventoryItem, AppError> {
        let mut fields = HashMap::new();

        let name = self.name.trim();
        if name.is_empty() {
            fields.insert("name".to_string(), "Item name is required".to_string());
        }

        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(0) => {
                fields.insert("quantity".to_string(), "Quantity must be at least 1".to_string());
                None
            }
            Ok(q) => Some(q),
            Err(_) => {
                fields.insert("quantity".to_string(), "Quantity must be a whole number".to_string());
                None
            }
        };

        let unit = match self.unit.trim() {
            "" => DEFAULT_UNIT,
            u => u,
        };

        match quantity {
            Some(quantity) if fields.is_empty() => Ok(InventoryItem {
                id: Uuid::new_v4(),
                name: name.to_string(),
                quantity,
                unit: unit.to_string(),
                added_at: Utc::now(),
            }),
            _ => Err(AppError::validation("Please fix the highlighted fields", fields)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, unit: &str) -> NewInventoryItem {
        NewInventoryItem {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    #[test]
    fn valid_item() {
        let item = form("Gauze pads", " 40 ", "boxes").validate().unwrap();
        assert_eq!(item.name, "Gauze pads");
        assert_eq!(item.quantity, 40);
        assert_eq!(item.unit, "boxes");
    }

    #[test]
    fn blank_unit_defaults() {
        let item = form("Syringes", "5", "  ").validate().unwrap();
        assert_eq!(item.unit, "units");
    }

    #[test]
    fn zero_quantity_rejected() {
        let err = form("Syringes", "0", "").validate().unwrap_err();
        assert_eq!(err.field_error("quantity"), Some("Quantity must be at least 1"));
    }

    #[test]
    fn non_numeric_quantity_rejected() {
        let err = form("Syringes", "-3", "").validate().unwrap_err();
        assert_eq!(err.field_error("quantity"), Some("Quantity must be a whole number"));
        assert!(err.field_error("name").is_none());
    }

    #[test]
    fn missing_name_rejected() {
        let err = form("", "3", "").validate().unwrap_err();
        assert_eq!(err.field_error("name"), Some("Item name is required"));
    }
}
