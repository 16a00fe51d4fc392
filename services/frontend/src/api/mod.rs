//! Router assembly: the documented health route, request-id plumbing and the
//! static asset fallback with SPA semantics.

pub mod handlers;

use crate::api::handlers::health::HealthState;
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    Extension, Router,
};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Returns the generated `OpenAPI` document without building a server.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Builds the documented API routes. Add new endpoints here via
/// `.routes(routes!(...))` so they are served and documented together.
fn api_router() -> OpenApiRouter {
    OpenApiRouter::with_openapi(cargo_openapi()).routes(routes!(handlers::health::health))
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    OpenApiBuilder::new().info(info).build()
}

/// Full application router: API routes plus the static bundle fallback.
/// Unknown paths fall back to `index.html` so client-side routing survives a
/// hard reload.
pub fn router(mode: &str, assets_dir: &Path) -> Router {
    let (api, _openapi) = api_router().split_for_parts();

    let assets = ServeDir::new(assets_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(assets_dir.join("index.html")));

    api.layer(
        ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::if_not_present(
                HeaderName::from_static("x-request-id"),
                |_req: &Request<Body>| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                "x-request-id",
            )))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(Extension(HealthState::new(mode))),
    )
    .fallback_service(assets)
}

/// Binds the listener and serves until interrupted.
/// # Errors
/// Returns an error if the port cannot be bound.
pub async fn serve(port: u16, assets: PathBuf, mode: String) -> Result<()> {
    let app = router(&mode, &assets);

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{port}, serving {}", assets.display());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let path = request.uri().path();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, request_id)
}
