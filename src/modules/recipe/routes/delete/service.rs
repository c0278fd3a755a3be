use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("delete recipe [IN]");

    if !repository::delete_by_id(&ctx.db_conn, payload.id.clone()).await {
        tracing::debug!("No recipe stored under id {:?}", payload.id);
    }

    tracing::debug!("delete recipe [OUT]");
    response::Success::RecipeRemoved
}
