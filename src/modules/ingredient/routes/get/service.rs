use super::types::{request, response};
use crate::{modules::ingredient::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("get ingredient by id [IN]");

    if payload.id.trim().is_empty() {
        return Err(response::Error::MissingId);
    }

    let ingredient = repository::find_by_id(&ctx.db_conn, payload.id)
        .await
        .ok_or(response::Error::IngredientNotFound)?;

    tracing::debug!("get ingredient by id [OUT]");
    Ok(response::Success::Ingredient(ingredient))
}
