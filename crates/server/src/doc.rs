use crate::routes::{course, health, live_stream};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::get_courses,
        course::get_course_by_id,
        course::get_course_complete,
        live_stream::get_live_streams,
        live_stream::get_live_stream_by_id,
        live_stream::get_upcoming_live_streams,
        live_stream::get_live_live_streams
    ),
    tags(
        (name = "Course", description = "Course management endpoints"),
        (name = "Module", description = "Course module management endpoints"),
        (name = "Lesson", description = "Lesson management endpoints"),
        (name = "Instructor", description = "Instructor management endpoints"),
        (name = "Course-category", description = "Course category management endpoints"),
        (name = "Tag", description = "Tag management endpoints"),
        (name = "Live-stream", description = "Live stream management endpoints"),
        (name = "Health", description = "Service health endpoints")
    ),
    info(
        title = "Courses CMS API",
        version = "1.0.0",
        description = "API documentation for the Courses Content Management System",
        contact(
            name = "API Support",
            email = "support@example.com"
        ),
        license(
            name = "MIT",
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
        (url = "https://your-domain.com", description = "Production server (replace with your domain)")
    )
)]
pub struct ApiDoc;
