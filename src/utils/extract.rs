use super::envelope::Envelope;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body decoded regardless of `Content-Type`. Read and parse failures
/// render as the decode-error envelope.
pub struct JsonBody<T>(pub T);

fn reject(reason: String) -> Response {
    tracing::error!("Failed to decode request body: {}", reason);
    Envelope::<()>::decode_error(reason).into_response()
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| reject(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| reject(err.to_string()))
    }
}
