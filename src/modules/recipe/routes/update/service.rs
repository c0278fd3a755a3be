use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("patch recipe by id [IN]");

    if payload.id.trim().is_empty() {
        return Err(response::Error::MissingId);
    }

    let recipe = repository::update_by_id(
        &ctx.db_conn,
        payload.id,
        repository::UpdateRecipePayload {
            name: payload.body.name,
            description: payload.body.description,
            steps: payload.body.steps,
        },
    )
    .await
    .ok_or(response::Error::RecipeNotFound)?;

    tracing::debug!("patch recipe by id [OUT]");
    Ok(response::Success::RecipePatched(recipe))
}
