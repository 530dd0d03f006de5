//! Cold-storage units and their in/out movements.
//!
//! A cold-storage transaction references a unit and an inventory item by
//! id; neither reference is validated against the other collections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdStorageUnit {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub unit_code: String,
    pub unit_name: String,
    pub capacity: i64,
    pub current_occupancy: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColdStorageUnit {
    pub unit_code: String,
    pub unit_name: String,
    pub capacity: i64,
    pub current_occupancy: i64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColdStorageUnit {
    pub unit_code: Option<String>,
    pub unit_name: Option<String>,
    pub capacity: Option<i64>,
    pub current_occupancy: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub temperature: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub humidity: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for ColdStorageUnit {
    const NAME: &'static str = "cold storage unit";

    type Create = CreateColdStorageUnit;
    type Update = UpdateColdStorageUnit;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateColdStorageUnit) -> Self {
        Self {
            id,
            created_at,
            unit_code: payload.unit_code,
            unit_name: payload.unit_name,
            capacity: payload.capacity,
            current_occupancy: payload.current_occupancy,
            temperature: payload.temperature,
            humidity: payload.humidity,
            location: payload.location,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateColdStorageUnit) {
        let UpdateColdStorageUnit {
            unit_code,
            unit_name,
            capacity,
            current_occupancy,
            temperature,
            humidity,
            location,
            is_active,
        } = patch;
        if let Some(unit_code) = unit_code {
            self.unit_code = unit_code;
        }
        if let Some(unit_name) = unit_name {
            self.unit_name = unit_name;
        }
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if let Some(current_occupancy) = current_occupancy {
            self.current_occupancy = current_occupancy;
        }
        if let Some(temperature) = temperature {
            self.temperature = temperature;
        }
        if let Some(humidity) = humidity {
            self.humidity = humidity;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdStorageTransaction {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub transaction_number: String,
    pub unit_id: String,
    pub item_id: String,
    pub transaction_type: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColdStorageTransaction {
    pub transaction_number: String,
    pub unit_id: String,
    pub item_id: String,
    pub transaction_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColdStorageTransaction {
    pub transaction_number: Option<String>,
    pub unit_id: Option<String>,
    pub item_id: Option<String>,
    pub transaction_type: Option<String>,
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub temperature: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub entry_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub exit_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl Resource for ColdStorageTransaction {
    const NAME: &'static str = "cold storage transaction";

    type Create = CreateColdStorageTransaction;
    type Update = UpdateColdStorageTransaction;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateColdStorageTransaction) -> Self {
        Self {
            id,
            created_at,
            transaction_number: payload.transaction_number,
            unit_id: payload.unit_id,
            item_id: payload.item_id,
            transaction_type: payload.transaction_type,
            quantity: payload.quantity,
            temperature: payload.temperature,
            entry_date: payload.entry_date,
            exit_date: payload.exit_date,
            description: payload.description,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateColdStorageTransaction) {
        let UpdateColdStorageTransaction {
            transaction_number,
            unit_id,
            item_id,
            transaction_type,
            quantity,
            temperature,
            entry_date,
            exit_date,
            description,
        } = patch;
        if let Some(transaction_number) = transaction_number {
            self.transaction_number = transaction_number;
        }
        if let Some(unit_id) = unit_id {
            self.unit_id = unit_id;
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
        if let Some(temperature) = temperature {
            self.temperature = temperature;
        }
        if let Some(entry_date) = entry_date {
            self.entry_date = entry_date;
        }
        if let Some(exit_date) = exit_date {
            self.exit_date = exit_date;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}
