pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    pub struct Body {
        pub name: String,
        pub description: String,
        pub steps: Vec<String>,
    }

    pub struct Payload {
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
        RecipeCreated(Recipe),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeCreated(recipe) => {
                    Envelope::success(StatusCode::CREATED, envelope::CREATED, Some(recipe))
                        .into_response()
                }
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("Identifier generation error")]
        IdGenerationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let description = self.to_string();

            match self {
                Self::IdGenerationFailed => Envelope::<Recipe>::failure(
                    StatusCode::CONFLICT,
                    description,
                    ErrorDetail::technical(envelope::TECHNICAL),
                )
                .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
