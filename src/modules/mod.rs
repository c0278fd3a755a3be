pub mod ingredient;
pub mod recipe;

use crate::types::Context;
use axum::{routing::get, Router};
use std::sync::Arc;

async fn status() -> &'static str {
    "OK\n"
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/status", get(status))
        .merge(recipe::routes::get_router())
        .merge(ingredient::routes::get_router())
}
