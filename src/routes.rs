use axum::{
    http::{HeaderValue, Uri},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, AppConfig};
use crate::error::ApiError;
use crate::handlers;
use crate::middleware::ApiResponse;

pub fn app() -> Router {
    app_with_config(config::config())
}

pub fn app_with_config(config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(tour_routes())
        .fallback(fallback);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn tour_routes() -> Router {
    use handlers::tours;

    Router::new()
        // Show collections bound from a delimited id list in the path
        .route(
            "/api/tours/:tour_id/showcollections/:show_ids",
            get(tours::show_collection_get),
        )
        // Same lookup with ?showIds=
        .route(
            "/api/tours/:tour_id/showcollections",
            get(tours::show_collection_query),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
}

async fn root() -> ApiResponse<Value> {
    let version = env!("CARGO_PKG_VERSION");

    ApiResponse::success(json!({
        "name": "Tour Management API",
        "version": version,
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "show_collections": "/api/tours/:tour_id/showcollections/(:id1,:id2,...)",
            "show_collections_query": "/api/tours/:tour_id/showcollections?showIds=:id1,:id2,...",
        }
    }))
}

async fn health() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn show_collection_from_path() {
        let tour = Uuid::new_v4();
        let ids = [Uuid::new_v4(), Uuid::new_v4()];
        let (status, body) = get_json(&format!(
            "/api/tours/{}/showcollections/({},{})",
            tour, ids[0], ids[1]
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tour_id"], json!(tour));
        assert_eq!(body["data"]["show_ids"], json!(ids));
    }

    #[tokio::test]
    async fn show_collection_rejects_bad_id() {
        let tour = Uuid::new_v4();
        let (status, body) = get_json(&format!(
            "/api/tours/{}/showcollections/({},not-a-guid)",
            tour,
            Uuid::new_v4()
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("not-a-guid"));
    }

    #[tokio::test]
    async fn show_collection_requires_ids() {
        let tour = Uuid::new_v4();
        let (status, body) = get_json(&format!("/api/tours/{}/showcollections/()", tour)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let (status, _) = get_json(&format!("/api/tours/{}/showcollections", tour)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn show_collection_rejects_blank_query_value() {
        let tour = Uuid::new_v4();
        for query in ["showIds=", "showIds=%20%20", "showIds=%09"] {
            let (status, body) =
                get_json(&format!("/api/tours/{}/showcollections?{}", tour, query)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "query: {}", query);
            assert_eq!(body["code"], "BAD_REQUEST", "query: {}", query);
        }
    }

    #[tokio::test]
    async fn show_collection_from_query() {
        let tour = Uuid::new_v4();
        let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let (status, body) = get_json(&format!(
            "/api/tours/{}/showcollections?showIds={},{},{}",
            tour, ids[2], ids[0], ids[1]
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["show_ids"], json!([ids[2], ids[0], ids[1]]));
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let (status, body) = get_json("/api/nothing-here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[test]
    fn cors_accepts_explicit_origins() {
        // Building the layer must not panic on a mix of valid and invalid origins
        let _layer = cors_layer(&["https://app.example.com".to_string(), "bad\norigin".to_string()]);
    }
}
