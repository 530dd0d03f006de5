// src/lib.rs

use std::sync::Arc;

use axum::extract::FromRef;

use models::account_master::AccountMaster;
use models::cold_storage::{ColdStorageTransaction, ColdStorageUnit};
use models::company::Company;
use models::customer::Customer;
use models::inventory_master::InventoryMaster;
use models::stock_transaction::StockTransaction;
use models::supplier::Supplier;
use models::transaction::Transaction;
use store::ResourceStore;

/// Shared application state: one store per resource type.
///
/// Constructed explicitly at startup and handed to the router, so tests can
/// build an isolated state per test instead of touching global collections.
#[derive(Clone, Default, FromRef)]
pub struct AppState {
    pub companies: Arc<ResourceStore<Company>>,
    pub account_masters: Arc<ResourceStore<AccountMaster>>,
    pub inventory_masters: Arc<ResourceStore<InventoryMaster>>,
    pub customers: Arc<ResourceStore<Customer>>,
    pub suppliers: Arc<ResourceStore<Supplier>>,
    pub transactions: Arc<ResourceStore<Transaction>>,
    pub stock_transactions: Arc<ResourceStore<StockTransaction>>,
    pub cold_storage_units: Arc<ResourceStore<ColdStorageUnit>>,
    pub cold_storage_transactions: Arc<ResourceStore<ColdStorageTransaction>>,
}

pub mod config;
pub mod error;
pub mod router;
pub mod store;

pub mod models {
    pub mod account_master;
    pub mod cold_storage;
    pub mod company;
    pub mod customer;
    pub mod de;
    pub mod inventory_master;
    pub mod stock_transaction;
    pub mod supplier;
    pub mod transaction;
}

pub mod handlers {
    pub mod health;
    pub mod resources;
}
