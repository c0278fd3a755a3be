use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Option<Path<String>>,
) -> impl IntoResponse {
    tracing::debug!("deleting ingredient...");

    let id = id.map(|Path(id)| id).unwrap_or_default();
    let response = service(ctx, request::Payload { id }).await;

    tracing::info!("Ingredient deleted");
    response
}
