use super::{
    service::service,
    types::{request, response},
};
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
    tracing::debug!("searching recipe...");

    let id = id.map(|Path(id)| id).unwrap_or_default();
    let response = service(ctx, request::Payload { id }).await;

    match &response {
        Ok(response::Success::Recipe(recipe)) => tracing::info!("Recipe returned: {}", recipe),
        Err(err) => tracing::error!("{}", err),
    }

    response
}
