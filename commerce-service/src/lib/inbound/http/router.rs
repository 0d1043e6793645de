use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_product::get_product;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::verify::verify;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::ports::AuthServicePort;

/// Shared handler state, generic over the service ports so any adapter set can be served.
pub struct AppState<AS, CS>
where
    AS: AuthServicePort,
    CS: CatalogServicePort,
{
    pub auth_service: Arc<AS>,
    pub catalog_service: Arc<CS>,
}

impl<AS, CS> Clone for AppState<AS, CS>
where
    AS: AuthServicePort,
    CS: CatalogServicePort,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            catalog_service: Arc::clone(&self.catalog_service),
        }
    }
}

pub fn create_router<AS, CS>(auth_service: Arc<AS>, catalog_service: Arc<CS>) -> Router
where
    AS: AuthServicePort,
    CS: CatalogServicePort,
{
    let state = AppState {
        auth_service,
        catalog_service,
    };

    let auth_routes = Router::new()
        .route("/api/auth/signup", post(signup::<AS, CS>))
        .route("/api/auth/login", post(login::<AS, CS>))
        .route("/api/auth/verify", post(verify::<AS, CS>));

    let catalog_routes = Router::new()
        .route("/api/products", get(list_products::<AS, CS>))
        .route("/api/products/:product_id", get(get_product::<AS, CS>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .merge(catalog_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
