//! Inventory stock movements.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub transaction_number: String,
    pub item_id: String,
    pub transaction_type: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transaction_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockTransaction {
    pub transaction_number: String,
    pub item_id: String,
    pub transaction_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub total_value: Option<Decimal>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub transaction_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockTransaction {
    pub transaction_number: Option<String>,
    pub item_id: Option<String>,
    pub transaction_type: Option<String>,
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub unit_price: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub total_value: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub reference_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub transaction_date: Option<NaiveDate>,
}

impl Resource for StockTransaction {
    const NAME: &'static str = "stock transaction";

    type Create = CreateStockTransaction;
    type Update = UpdateStockTransaction;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateStockTransaction) -> Self {
        Self {
            id,
            created_at,
            transaction_number: payload.transaction_number,
            item_id: payload.item_id,
            transaction_type: payload.transaction_type,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
            total_value: payload.total_value,
            reference_number: payload.reference_number,
            description: payload.description,
            transaction_date: payload.transaction_date,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateStockTransaction) {
        let UpdateStockTransaction {
            transaction_number,
            item_id,
            transaction_type,
            quantity,
            unit_price,
            total_value,
            reference_number,
            description,
            transaction_date,
        } = patch;
        if let Some(transaction_number) = transaction_number {
            self.transaction_number = transaction_number;
        }
        if let Some(item_id) = item_id {
            self.item_id = item_id;
        }
        if let Some(transaction_type) = transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(quantity) = quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = unit_price {
            self.unit_price = unit_price;
        }
        if let Some(total_value) = total_value {
            self.total_value = total_value;
        }
        if let Some(reference_number) = reference_number {
            self.reference_number = reference_number;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(transaction_date) = transaction_date {
            self.transaction_date = transaction_date;
        }
    }
}
