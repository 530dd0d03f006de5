//! Inventory item master records.
//!
//! `unit_price` rides the wire as a decimal string (e.g. `"12.50"`);
//! stock levels are plain integers. Item codes are not checked for
//! uniqueness, matching the rest of the system's hands-off treatment of
//! business keys.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMaster {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub minimum_stock: i64,
    pub maximum_stock: i64,
    pub reorder_level: i64,
    pub unit_price: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryMaster {
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
    pub minimum_stock: i64,
    pub maximum_stock: i64,
    pub reorder_level: i64,
    pub unit_price: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryMaster {
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub minimum_stock: Option<i64>,
    pub maximum_stock: Option<i64>,
    pub reorder_level: Option<i64>,
    pub unit_price: Option<Decimal>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for InventoryMaster {
    const NAME: &'static str = "inventory master";

    type Create = CreateInventoryMaster;
    type Update = UpdateInventoryMaster;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateInventoryMaster) -> Self {
        Self {
            id,
            created_at,
            item_code: payload.item_code,
            item_name: payload.item_name,
            category: payload.category,
            unit: payload.unit,
            description: payload.description,
            minimum_stock: payload.minimum_stock,
            maximum_stock: payload.maximum_stock,
            reorder_level: payload.reorder_level,
            unit_price: payload.unit_price,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateInventoryMaster) {
        let UpdateInventoryMaster {
            item_code,
            item_name,
            category,
            unit,
            description,
            minimum_stock,
            maximum_stock,
            reorder_level,
            unit_price,
            is_active,
        } = patch;
        if let Some(item_code) = item_code {
            self.item_code = item_code;
        }
        if let Some(item_name) = item_name {
            self.item_name = item_name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(unit) = unit {
            self.unit = unit;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(minimum_stock) = minimum_stock {
            self.minimum_stock = minimum_stock;
        }
        if let Some(maximum_stock) = maximum_stock {
            self.maximum_stock = maximum_stock;
        }
        if let Some(reorder_level) = reorder_level {
            self.reorder_level = reorder_level;
        }
        if let Some(unit_price) = unit_price {
            self.unit_price = unit_price;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_price_serializes_as_decimal_string() {
        let payload: CreateInventoryMaster = serde_json::from_value(serde_json::json!({
            "itemCode": "ITM-1",
            "itemName": "Crate",
            "category": "packaging",
            "unit": "pcs",
            "minimumStock": 10,
            "maximumStock": 500,
            "reorderLevel": 50,
            "unitPrice": "12.50"
        }))
        .expect("payload should parse");
        assert_eq!(payload.unit_price, dec!(12.50));
        assert!(payload.is_active);

        let record = InventoryMaster::new("i-1".to_string(), Utc::now(), payload);
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["unitPrice"], "12.50");
        assert_eq!(json["itemCode"], "ITM-1");
    }

    #[test]
    fn test_missing_item_code_fails_to_parse() {
        let result: Result<CreateInventoryMaster, _> =
            serde_json::from_value(serde_json::json!({
                "itemName": "Crate",
                "category": "packaging",
                "unit": "pcs",
                "minimumStock": 10,
                "maximumStock": 500,
                "reorderLevel": 50,
                "unitPrice": "12.50"
            }));
        assert!(result.is_err());
    }
}
