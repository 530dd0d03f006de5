//! Supplier master records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub supplier_code: String,
    pub supplier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplier {
    pub supplier_code: String,
    pub supplier_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplier {
    pub supplier_code: Option<String>,
    pub supplier_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_person: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub zip_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_terms: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for Supplier {
    const NAME: &'static str = "supplier";

    type Create = CreateSupplier;
    type Update = UpdateSupplier;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateSupplier) -> Self {
        Self {
            id,
            created_at,
            supplier_code: payload.supplier_code,
            supplier_name: payload.supplier_name,
            contact_person: payload.contact_person,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
            payment_terms: payload.payment_terms,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateSupplier) {
        let UpdateSupplier {
            supplier_code,
            supplier_name,
            contact_person,
            email,
            phone,
            address,
            city,
            state,
            zip_code,
            payment_terms,
            is_active,
        } = patch;
        if let Some(supplier_code) = supplier_code {
            self.supplier_code = supplier_code;
        }
        if let Some(supplier_name) = supplier_name {
            self.supplier_name = supplier_name;
        }
        if let Some(contact_person) = contact_person {
            self.contact_person = contact_person;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(state) = state {
            self.state = state;
        }
        if let Some(zip_code) = zip_code {
            self.zip_code = zip_code;
        }
        if let Some(payment_terms) = payment_terms {
            self.payment_terms = payment_terms;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}
