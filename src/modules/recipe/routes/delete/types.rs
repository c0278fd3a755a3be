pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{
        modules::recipe::repository::Recipe,
        utils::envelope::{self, Envelope},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        RecipeRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeRemoved => {
                    Envelope::<Recipe>::success(StatusCode::NO_CONTENT, envelope::REMOVED, None)
                        .into_response()
                }
            }
        }
    }

    /// Deleting never fails, unknown ids included.
    pub type Response = Success;
}
