mod create;
mod delete;
mod get;
mod update;

use crate::types::Context;
use axum::routing::{get, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/recipes", post(create::handler))
        .route(
            "/recipes/",
            get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
        .route(
            "/recipes/:id",
            get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
}
