use super::{
    service::service,
    types::{request, response},
};
use crate::{types::Context, utils::extract::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(body): JsonBody<Option<request::Body>>,
) -> impl IntoResponse {
    tracing::debug!("creating ingredient...");

    let body = body.unwrap_or_default();
    let response = service(ctx, request::Payload { body }).await;

    match &response {
        Ok(response::Success::IngredientCreated(ingredient)) => {
            tracing::info!("Ingredient created: {}", ingredient)
        }
        Err(err) => tracing::error!("{}", err),
    }

    response
}
