pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    pub struct Body {
        pub name: Option<String>,
        pub description: Option<String>,
        pub quantity: Option<i64>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::ingredient::repository::Ingredient,
        utils::envelope::{self, Envelope, ErrorDetail},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        IngredientPatched(Ingredient),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::IngredientPatched(ingredient) => {
                    Envelope::success(StatusCode::OK, envelope::PATCHED, Some(ingredient))
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
