mod create;
mod delete;
mod get;
mod update;

use crate::types::Context;
use axum::routing::{get, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/ingredients", post(create::handler))
        .route(
            "/ingredients/",
            get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
        .route(
            "/ingredients/:id",
            get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
}
