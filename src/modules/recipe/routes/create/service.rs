use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("create recipe [IN]");

    let recipe = repository::create(
        &ctx.db_conn,
        repository::CreateRecipePayload {
            name: payload.body.name,
            description: payload.body.description,
            steps: payload.body.steps,
        },
    )
    .await
    .map_err(|_| response::Error::IdGenerationFailed)?;

    tracing::debug!("create recipe [OUT]");
    Ok(response::Success::RecipeCreated(recipe))
}
