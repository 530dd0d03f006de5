//! Customer master records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer_code: String,
    pub customer_name: String,
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
    pub credit_limit: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub customer_code: String,
    pub customer_name: String,
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
    pub credit_limit: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub customer_code: Option<String>,
    pub customer_name: Option<String>,
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
    pub credit_limit: Option<Decimal>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for Customer {
    const NAME: &'static str = "customer";

    type Create = CreateCustomer;
    type Update = UpdateCustomer;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateCustomer) -> Self {
        Self {
            id,
            created_at,
            customer_code: payload.customer_code,
            customer_name: payload.customer_name,
            contact_person: payload.contact_person,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
            credit_limit: payload.credit_limit,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateCustomer) {
        let UpdateCustomer {
            customer_code,
            customer_name,
            contact_person,
            email,
            phone,
            address,
            city,
            state,
            zip_code,
            credit_limit,
            is_active,
        } = patch;
        if let Some(customer_code) = customer_code {
            self.customer_code = customer_code;
        }
        if let Some(customer_name) = customer_name {
            self.customer_name = customer_name;
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
        if let Some(credit_limit) = credit_limit {
            self.credit_limit = credit_limit;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}
