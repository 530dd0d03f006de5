//! Company master records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub code: String,
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
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    pub name: String,
    pub code: String,
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
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update. Optional record fields are double-optional so an
/// explicit JSON null clears them while an absent key leaves them alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub code: Option<String>,
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
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for Company {
    const NAME: &'static str = "company";

    type Create = CreateCompany;
    type Update = UpdateCompany;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateCompany) -> Self {
        Self {
            id,
            created_at,
            name: payload.name,
            code: payload.code,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateCompany) {
        // Destructure so a new field cannot be forgotten here.
        let UpdateCompany {
            name,
            code,
            email,
            phone,
            address,
            city,
            state,
            zip_code,
            is_active,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(code) = code {
            self.code = code;
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
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: UpdateCompany =
            serde_json::from_value(serde_json::json!({"email": null})).expect("patch should parse");
        assert_eq!(patch.email, Some(None));
        assert_eq!(patch.phone, None);

        let patch: UpdateCompany =
            serde_json::from_value(serde_json::json!({"email": "a@acme.com"}))
                .expect("patch should parse");
        assert_eq!(patch.email, Some(Some("a@acme.com".to_string())));
    }

    #[test]
    fn test_null_patch_clears_stored_field() {
        let payload: CreateCompany = serde_json::from_value(serde_json::json!({
            "name": "Acme",
            "code": "AC1",
            "email": "a@acme.com",
            "phone": "555-0100"
        }))
        .expect("payload should parse");
        let mut record = Company::new("c-1".to_string(), Utc::now(), payload);

        let patch: UpdateCompany =
            serde_json::from_value(serde_json::json!({"email": null})).expect("patch should parse");
        record.merge(patch);

        assert_eq!(record.email, None);
        assert_eq!(record.phone.as_deref(), Some("555-0100"));
        assert_eq!(record.name, "Acme");
    }
}
