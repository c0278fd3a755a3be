pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{
        modules::ingredient::repository::Ingredient,
        utils::envelope::{self, Envelope},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        IngredientRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::IngredientRemoved => {
                    Envelope::<Ingredient>::success(StatusCode::NO_CONTENT, envelope::REMOVED, None)
                        .into_response()
                }
            }
        }
    }

    /// Deleting never fails, unknown ids included.
    pub type Response = Success;
}
