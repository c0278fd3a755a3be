use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("get recipe by id [IN]");

    if payload.id.trim().is_empty() {
        return Err(response::Error::MissingId);
    }

    let recipe = repository::find_by_id(&ctx.db_conn, payload.id)
        .await
        .ok_or(response::Error::RecipeNotFound)?;

    tracing::debug!("get recipe by id [OUT]");
    Ok(response::Success::Recipe(recipe))
}
