use super::types::{request, response};
use crate::{modules::ingredient::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("create ingredient [IN]");

    let ingredient = repository::create(
        &ctx.db_conn,
        repository::CreateIngredientPayload {
            name: payload.body.name,
            description: payload.body.description,
            quantity: payload.body.quantity,
        },
    )
    .await
    .map_err(|_| response::Error::IdGenerationFailed)?;

    tracing::debug!("create ingredient [OUT]");
    Ok(response::Success::IngredientCreated(ingredient))
}
