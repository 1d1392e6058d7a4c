use axum::{Router, routing::get};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod routes;
mod utils;

use crate::{
    doc::ApiDoc,
    routes::{course, health, live_stream},
    utils::shutdown::shutdown_signal,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/courses", get(course::get_courses))
        .route("/courses/{id}", get(course::get_course_by_id))
        .route("/courses/{id}/complete", get(course::get_course_complete))
        .route("/live-streams", get(live_stream::get_live_streams))
        .route(
            "/live-streams/upcoming",
            get(live_stream::get_upcoming_live_streams),
        )
        .route("/live-streams/live", get(live_stream::get_live_live_streams))
        .route("/live-streams/{id}", get(live_stream::get_live_stream_by_id))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
