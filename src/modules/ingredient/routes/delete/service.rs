use super::types::{request, response};
use crate::{modules::ingredient::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("delete ingredient [IN]");

    if !repository::delete_by_id(&ctx.db_conn, payload.id.clone()).await {
        tracing::debug!("No ingredient stored under id {:?}", payload.id);
    }

    tracing::debug!("delete ingredient [OUT]");
    response::Success::IngredientRemoved
}
