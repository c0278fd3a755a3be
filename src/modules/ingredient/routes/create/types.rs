pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    pub struct Body {
        pub name: String,
        pub description: String,
        pub quantity: i64,
    }

    pub struct Payload {
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
        IngredientCreated(Ingredient),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::IngredientCreated(ingredient) => {
                    Envelope::success(StatusCode::CREATED, envelope::CREATED, Some(ingredient))
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
                Self::IdGenerationFailed => Envelope::<Ingredient>::failure(
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

#[cfg(test)]
mod tests {
    use super::response;
    use axum::{http::StatusCode, response::IntoResponse};
    use http_body_util::BodyExt;
    use serde_json::Value;

    #[tokio::test]
    async fn id_generation_failure_is_a_technical_conflict() {
        let response = response::Error::IdGenerationFailed.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"]["code"], 409);
        assert_eq!(body["status"]["description"], "Identifier generation error");
        assert_eq!(body["error"]["kind"], "technical");
        assert_eq!(body["error"]["message"], "Technical error");
        assert!(body["respObj"].is_null());
    }
}
