use super::{
    service::service,
    types::{request, response},
};
use crate::{types::Context, utils::extract::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Option<Path<String>>,
    JsonBody(body): JsonBody<Option<request::Body>>,
) -> impl IntoResponse {
    tracing::debug!("patching ingredient...");

    let id = id.map(|Path(id)| id).unwrap_or_default();
    let body = body.unwrap_or_default();
    let response = service(ctx, request::Payload { id, body }).await;

    match &response {
        Ok(response::Success::IngredientPatched(ingredient)) => {
            tracing::info!("Ingredient modified: {}", ingredient)
        }
        Err(err) => tracing::error!("{}", err),
    }

    response
}
