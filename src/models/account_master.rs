//! Chart-of-accounts master records.
//!
//! `parent_account` is a plain string reference; nothing checks that it
//! names an existing account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMaster {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountMaster {
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    #[serde(default)]
    pub parent_account: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountMaster {
    pub account_code: Option<String>,
    pub account_name: Option<String>,
    pub account_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_account: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl Resource for AccountMaster {
    const NAME: &'static str = "account master";

    type Create = CreateAccountMaster;
    type Update = UpdateAccountMaster;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateAccountMaster) -> Self {
        Self {
            id,
            created_at,
            account_code: payload.account_code,
            account_name: payload.account_name,
            account_type: payload.account_type,
            parent_account: payload.parent_account,
            description: payload.description,
            is_active: payload.is_active,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateAccountMaster) {
        let UpdateAccountMaster {
            account_code,
            account_name,
            account_type,
            parent_account,
            description,
            is_active,
        } = patch;
        if let Some(account_code) = account_code {
            self.account_code = account_code;
        }
        if let Some(account_name) = account_name {
            self.account_name = account_name;
        }
        if let Some(account_type) = account_type {
            self.account_type = account_type;
        }
        if let Some(parent_account) = parent_account {
            self.parent_account = parent_account;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}
