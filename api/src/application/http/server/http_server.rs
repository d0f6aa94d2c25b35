use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use dishscale_core::{application::create_service, domain::common::DishscaleConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::calculator::page::{UNEXPECTED_ERROR_MESSAGE, unexpected_error_page};
use crate::application::http::calculator::router::calculator_routes;
use crate::application::http::health::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

/// Loads the recipe table and builds the shared state.
pub fn state(args: Arc<Args>) -> AppState {
    let config = DishscaleConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let app_routes = routes(&state);
    with_layers(app_routes, state)
}

fn routes(state: &AppState) -> Router<AppState> {
    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(calculator_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path))
}

fn with_layers(routes: Router<AppState>, state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let router = routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Adds the Prometheus layer and the `/metrics` route.
///
/// The layer pair installs a process-wide recorder, so build it once.
pub fn with_metrics(
    router: Router,
    root_path: &str,
    (prometheus_layer, metric_handle): (PrometheusMetricLayer<'static>, PrometheusHandle),
) -> Router {
    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

/// Answers panics in HTML routes with the calculator page instead of JSON.
pub fn catch_panics_as_page<S>(routes: Router<S>, root_path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let root_path = root_path.to_string();
    routes.layer(CatchPanicLayer::custom(
        move |panic: Box<dyn Any + Send + 'static>| {
            error!("Page handler panicked: {}", panic_detail(panic.as_ref()));
            unexpected_error_page(&root_path)
        },
    ))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked: {}", panic_detail(panic.as_ref()));

    ApiError::InternalServerError(UNEXPECTED_ERROR_MESSAGE.to_string()).into_response()
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    }
}
