//! Route tree: one uniform CRUD group per resource type under /api.

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::extract::FromRef;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::error::ApiError;
use crate::handlers::{health, resources};
use crate::models::account_master::AccountMaster;
use crate::models::cold_storage::{ColdStorageTransaction, ColdStorageUnit};
use crate::models::company::Company;
use crate::models::customer::Customer;
use crate::models::inventory_master::InventoryMaster;
use crate::models::stock_transaction::StockTransaction;
use crate::models::supplier::Supplier;
use crate::models::transaction::Transaction;
use crate::store::{Resource, ResourceStore};

/// CRUD route group for one resource type.
pub fn resource_routes<R>() -> Router<AppState>
where
    R: Resource,
    Arc<ResourceStore<R>>: FromRef<AppState>,
{
    Router::new()
        .route(
            "/",
            get(resources::list_resources::<R>).post(resources::create_resource::<R>),
        )
        .route(
            "/{id}",
            get(resources::get_resource::<R>)
                .put(resources::update_resource::<R>)
                .delete(resources::delete_resource::<R>),
        )
}

/// Builds the full application router around the injected state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::hello_backoffice))
        .nest("/api/companies", resource_routes::<Company>())
        .nest("/api/account-masters", resource_routes::<AccountMaster>())
        .nest(
            "/api/inventory-masters",
            resource_routes::<InventoryMaster>(),
        )
        .nest("/api/customers", resource_routes::<Customer>())
        .nest("/api/suppliers", resource_routes::<Supplier>())
        .nest("/api/transactions", resource_routes::<Transaction>())
        .nest(
            "/api/stock-transactions",
            resource_routes::<StockTransaction>(),
        )
        .nest(
            "/api/cold-storage-units",
            resource_routes::<ColdStorageUnit>(),
        )
        .nest(
            "/api/cold-storage-transactions",
            resource_routes::<ColdStorageTransaction>(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Any handler panic becomes the generic 500 body instead of a dropped
/// connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("request handler panicked: {}", detail);
    ApiError::Internal.into_response()
}
