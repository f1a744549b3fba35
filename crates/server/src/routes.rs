use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use service::report::ReportService;

pub mod report;

/// Shared handler state: the injected report service.
#[derive(Clone)]
pub struct ServerState {
    pub reports: ReportService,
}

impl ServerState {
    pub fn new(reports: ReportService) -> Self { Self { reports } }
}

/// Any origin, method and header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the application router: the `/report` resource plus CORS and tracing layers
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/report",
            get(report::get_report)
                .put(report::replace_report)
                .delete(report::delete_report),
        )
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
                )
        )
}
