use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::debug;

use crate::models::Product;
use crate::services::Catalog;

pub async fn list_products(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Product>> {
    debug!("Listing {} products", catalog.products().len());
    Json(catalog.products().to_vec())
}
