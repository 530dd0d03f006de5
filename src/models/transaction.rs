//! Accounting transactions.
//!
//! `account_id` references an account master by id but is never checked
//! against that collection; a transaction against a deleted or mistyped
//! account is stored as-is.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::de::double_option;
use crate::store::Resource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub transaction_number: String,
    pub transaction_type: String,
    pub account_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    pub transaction_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub transaction_number: String,
    pub transaction_type: String,
    pub account_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub transaction_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransaction {
    pub transaction_number: Option<String>,
    pub transaction_type: Option<String>,
    pub account_id: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub reference_number: Option<Option<String>>,
    pub transaction_date: Option<NaiveDate>,
}

impl Resource for Transaction {
    const NAME: &'static str = "transaction";

    type Create = CreateTransaction;
    type Update = UpdateTransaction;

    fn new(id: String, created_at: DateTime<Utc>, payload: CreateTransaction) -> Self {
        Self {
            id,
            created_at,
            transaction_number: payload.transaction_number,
            transaction_type: payload.transaction_type,
            account_id: payload.account_id,
            amount: payload.amount,
            description: payload.description,
            reference_number: payload.reference_number,
            transaction_date: payload.transaction_date,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: UpdateTransaction) {
        let UpdateTransaction {
            transaction_number,
            transaction_type,
            account_id,
            amount,
            description,
            reference_number,
            transaction_date,
        } = patch;
        if let Some(transaction_number) = transaction_number {
            self.transaction_number = transaction_number;
        }
        if let Some(transaction_type) = transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(account_id) = account_id {
            self.account_id = account_id;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(reference_number) = reference_number {
            self.reference_number = reference_number;
        }
        if let Some(transaction_date) = transaction_date {
            self.transaction_date = transaction_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_and_date_wire_formats() {
        let payload: CreateTransaction = serde_json::from_value(serde_json::json!({
            "transactionNumber": "TXN-001",
            "transactionType": "debit",
            "accountId": "acc-1",
            "amount": "1500.75",
            "transactionDate": "2026-08-25"
        }))
        .expect("payload should parse");
        assert_eq!(payload.amount, dec!(1500.75));

        let record = Transaction::new("t-1".to_string(), Utc::now(), payload);
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["transactionDate"], "2026-08-25");
        assert_eq!(json["amount"], "1500.75");
    }

    #[test]
    fn test_malformed_date_fails_to_parse() {
        let result: Result<CreateTransaction, _> = serde_json::from_value(serde_json::json!({
            "transactionNumber": "TXN-001",
            "transactionType": "debit",
            "accountId": "acc-1",
            "amount": "10",
            "transactionDate": "not-a-date"
        }));
        assert!(result.is_err());
    }
}
