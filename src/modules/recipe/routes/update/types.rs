pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    pub struct Body {
        pub name: Option<String>,
        pub description: Option<String>,
        pub steps: Option<Vec<String>>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::recipe::repository::Recipe,
        utils::envelope::{self, Envelope, ErrorDetail},
    };
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        RecipePatched(Recipe),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipePatched(recipe) => {
                    Envelope::success(StatusCode::OK, envelope::PATCHED, Some(recipe))
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
        RecipeNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let description = self.to_string();

            match self {
                Self::MissingId => Envelope::<Recipe>::failure(
                    StatusCode::CONFLICT,
                    description,
                    ErrorDetail::functional(envelope::FAIL),
                )
                .into_response(),
                Self::RecipeNotFound => Envelope::<Recipe>::failure(
                    StatusCode::NOT_FOUND,
                    description,
                    ErrorDetail::functional("Recipe not found"),
                )
                .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
