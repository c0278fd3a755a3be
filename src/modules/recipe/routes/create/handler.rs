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
    tracing::debug!("creating recipe...");

    let body = body.unwrap_or_default();
    let response = service(ctx, request::Payload { body }).await;

    match &response {
        Ok(response::Success::RecipeCreated(recipe)) => {
            tracing::info!("Recipe created: {}", recipe)
        }
        Err(err) => tracing::error!("{}", err),
    }

    response
}
