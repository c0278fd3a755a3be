use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .nest("/hrs", modules::get_router())
            .with_state(ctx.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(trace::TraceLayer::new_for_http())
                    .layer(
                        cors::CorsLayer::new()
                            .allow_methods([
                                Method::OPTIONS,
                                Method::GET,
                                Method::POST,
                                Method::PATCH,
                                Method::DELETE,
                            ])
                            .allow_headers([header::CONTENT_TYPE])
                            .allow_origin(cors::Any),
                    )
                    .layer(DefaultBodyLimit::max(1024 * 1024)),
            );

        Self { ctx, router }
    }

    /// Serves until `shutdown` is cancelled, then drains in-flight requests.
    pub async fn serve(self, shutdown: CancellationToken) -> std::io::Result<()> {
        let addr = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Listening on... {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("Stopping server");
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::AppContext, utils::database::DatabaseConnection};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn context() -> Arc<Context> {
        Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            db_conn: Arc::new(DatabaseConnection::new()),
        })
    }

    fn router() -> Router {
        App::new(context()).router
    }

    async fn post_raw(
        router: &Router,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }

        let response = router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }

        let body = body
            .map(|b| Body::from(b.to_string()))
            .unwrap_or_else(Body::empty);
        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|b| b.to_string());
        let (status, bytes) = send(router, method, uri, body.as_deref()).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_recipe_echoes_input_with_fresh_id() {
        let router = router();

        let (status, first) = send_json(
            &router,
            "POST",
            "/hrs/recipes",
            Some(json!({"name": "X", "description": "Y"})),
        )
        .await;
        let (_, second) = send_json(
            &router,
            "POST",
            "/hrs/recipes",
            Some(json!({"name": "X", "description": "Y"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            first["status"],
            json!({"code": 201, "description": "Created successfully"})
        );
        assert_eq!(first["respObj"]["name"], "X");
        assert_eq!(first["respObj"]["description"], "Y");
        assert_eq!(first["respObj"]["steps"], json!([]));
        assert!(first["error"].is_null());

        let first_id = first["respObj"]["id"].as_str().unwrap();
        assert!(!first_id.is_empty());
        assert_ne!(first_id, second["respObj"]["id"].as_str().unwrap());
    }

    #[tokio::test]
    async fn client_supplied_id_is_ignored_on_create() {
        let router = router();

        let (_, body) = send_json(
            &router,
            "POST",
            "/hrs/recipes",
            Some(json!({"id": "mine", "name": "Soup"})),
        )
        .await;

        assert_ne!(body["respObj"]["id"], "mine");
    }

    #[tokio::test]
    async fn read_returns_the_stored_recipe() {
        let router = router();
        let (_, created) = send_json(
            &router,
            "POST",
            "/hrs/recipes",
            Some(json!({"name": "Stew", "steps": ["Chop", "Simmer"]})),
        )
        .await;
        let id = created["respObj"]["id"].as_str().unwrap();

        let uri = format!("/hrs/recipes/{id}");
        let (status, body) = send_json(&router, "GET", &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["description"], "Query completed");
        assert_eq!(body["respObj"], created["respObj"]);
        assert!(body["error"].is_null());
    }

    #[tokio::test]
    async fn empty_id_is_a_functional_conflict() {
        let router = router();

        let (status, body) = send_json(&router, "GET", "/hrs/recipes/", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"]["code"], 409);
        assert_eq!(body["status"]["description"], "Mandatory parameter id");
        assert_eq!(body["error"]["kind"], "functional");
        assert!(body["respObj"].is_null());

        let (status, body) = send_json(
            &router,
            "PATCH",
            "/hrs/ingredients/",
            Some(json!({"quantity": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["kind"], "functional");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let router = router();

        let (status, body) = send_json(&router, "GET", "/hrs/ingredients/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"]["description"], "Element not found");
        assert_eq!(body["error"]["kind"], "functional");
    }

    #[tokio::test]
    async fn patch_applies_provided_fields() {
        let router = router();
        let (_, created) = send_json(
            &router,
            "POST",
            "/hrs/recipes",
            Some(json!({"name": "Stew", "description": "Hearty", "steps": ["Chop"]})),
        )
        .await;
        let uri = format!("/hrs/recipes/{}", created["respObj"]["id"].as_str().unwrap());

        let (status, patched) = send_json(
            &router,
            "PATCH",
            &uri,
            Some(json!({"steps": ["Chop", "Simmer"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["status"]["description"], "Element patched successfully");
        assert_eq!(patched["respObj"]["name"], "Stew");
        assert_eq!(patched["respObj"]["steps"], json!(["Chop", "Simmer"]));

        let (_, read) = send_json(&router, "GET", &uri, None).await;
        assert_eq!(read["respObj"], patched["respObj"]);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let router = router();

        for (method, uri) in [("POST", "/hrs/recipes"), ("PATCH", "/hrs/ingredients/any")] {
            let (status, bytes) = send(&router, method, uri, Some("{\"name\": ")).await;
            let body: Value = serde_json::from_slice(&bytes).unwrap();

            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body["status"]["description"], "Failed validation");
            assert_eq!(body["error"]["kind"], "functional");
        }
    }

    #[tokio::test]
    async fn delete_always_returns_no_content() {
        let router = router();
        let (_, created) = send_json(
            &router,
            "POST",
            "/hrs/ingredients",
            Some(json!({"name": "Salt", "quantity": 1})),
        )
        .await;
        let uri = format!("/hrs/ingredients/{}", created["respObj"]["id"].as_str().unwrap());

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&router, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ingredient_lifecycle() {
        let router = router();
        let (status, created) = send_json(
            &router,
            "POST",
            "/hrs/ingredients",
            Some(json!({"name": "Flour", "description": "Wheat", "quantity": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["respObj"]["quantity"], 2);

        let uri = format!("/hrs/ingredients/{}", created["respObj"]["id"].as_str().unwrap());
        let (status, patched) =
            send_json(&router, "PATCH", &uri, Some(json!({"quantity": 5}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["respObj"]["quantity"], 5);
        assert_eq!(patched["respObj"]["name"], "Flour");
    }

    #[tokio::test]
    async fn body_is_decoded_whatever_the_content_type() {
        let router = router();

        for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
            let (status, body) = post_raw(
                &router,
                "/hrs/recipes",
                content_type,
                r#"{"name":"X","description":"Y"}"#,
            )
            .await;

            assert_eq!(status, StatusCode::CREATED, "content type {content_type:?}");
            assert_eq!(body["respObj"]["name"], "X");
            assert!(body["error"].is_null());
        }
    }

    #[tokio::test]
    async fn null_body_creates_with_defaults() {
        let router = router();

        let (status, body) = post_raw(&router, "/hrs/ingredients", None, "null").await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["respObj"]["name"], "");
        assert_eq!(body["respObj"]["quantity"], 0);
    }

    #[tokio::test]
    async fn empty_body_is_a_decode_error() {
        let (status, body) = post_raw(&router(), "/hrs/recipes", None, "").await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"]["description"], "Failed validation");
        assert_eq!(body["error"]["kind"], "functional");
    }

    #[tokio::test]
    async fn status_endpoint_is_live() {
        let (status, body) = send(&router(), "GET", "/hrs/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK\n");
    }

    #[tokio::test]
    async fn serve_stops_when_shutdown_is_cancelled() {
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(App::new(context()).serve(shutdown.clone()));

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        shutdown.cancel();

        let served = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server did not stop after cancellation")
            .unwrap();
        assert!(served.is_ok());
    }
}
