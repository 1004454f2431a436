pub mod todos;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::todos::TodoStore;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

/// Shared handler state: the store plus the process start instant used by
/// the health probe.
#[derive(Clone)]
pub struct ServerState {
    pub todos: Arc<dyn TodoStore>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos, started_at: Instant::now() }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    Json(Health { status: "ok", uptime: state.started_at.elapsed().as_secs_f64() })
}

/// Unmatched paths get the same structured 404 body as missing resources.
async fn fallback() -> ApiError {
    ApiError::NotFound
}

/// Build the full application router: health, todo CRUD, and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/todos", get(todos::list).post(todos::create))
        .route(
            "/api/todos/:id",
            get(todos::get_by_id).put(todos::update).delete(todos::remove),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
