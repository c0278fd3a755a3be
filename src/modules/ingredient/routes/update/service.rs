use super::types::{request, response};
use crate::{modules::ingredient::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("patch ingredient by id [IN]");

    if payload.id.trim().is_empty() {
        return Err(response::Error::MissingId);
    }

    let ingredient = repository::update_by_id(
        &ctx.db_conn,
        payload.id,
        repository::UpdateIngredientPayload {
            name: payload.body.name,
            description: payload.body.description,
            quantity: payload.body.quantity,
        },
    )
    .await
    .ok_or(response::Error::IngredientNotFound)?;

    tracing::debug!("patch ingredient by id [OUT]");
    Ok(response::Success::IngredientPatched(ingredient))
}
