pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{
        modules::ingredient::repository::Ingredient,
        utils::envelope::{self, Envelope, ErrorDetail},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        Ingredient(Ingredient),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Ingredient(ingredient) => {
                    Envelope::success(StatusCode::OK, envelope::QUERIED, Some(ingredient))
                        .into_response()
                }
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("Mandatory parameter id")]
        MissingId,
        #[error("Element not found")]
        IngredientNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let description = self.to_string();

            match self {
                Self::MissingId => Envelope::<Ingredient>::failure(
                    StatusCode::CONFLICT,
                    description,
                    ErrorDetail::functional(envelope::FAIL),
                )
                .into_response(),
                Self::IngredientNotFound => Envelope::<Ingredient>::failure(
                    StatusCode::NOT_FOUND,
                    description,
                    ErrorDetail::functional("Ingredient not found"),
                )
                .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
