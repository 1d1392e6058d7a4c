use crate::dtos::common::{DetailQueryParams, ListQueryParams, ResponseMeta};
use crate::dtos::live_stream::{LiveStreamListResponse, LiveStreamResponse};
use crate::routes::course::{course_response, instructor_response, media_response};
use crate::utils::populate::{includes, merge_populate, parse_populate};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::Utc;
use database::{
    db::create_connection,
    entities::live_stream,
    services::{
        course::CourseRelations,
        live_stream::{LiveStreamPopulate, LiveStreamRelations, LiveStreamService},
    },
};
use sea_orm::{DatabaseConnection, prelude::Uuid};
use serde_json::Value;

/// Relations merged into every live stream query regardless of what the
/// caller asked to populate
const REQUIRED_POPULATE: &[&str] = &["thumbnail"];

/// Get paginated list of live streams
#[utoipa::path(
    get,
    path = "/live-streams",
    params(ListQueryParams),
    responses(
        (status = 200, description = "List of live streams retrieved successfully", body = LiveStreamListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Live-stream"
)]
pub async fn get_live_streams(
    Query(params): Query<ListQueryParams>,
) -> Result<Json<LiveStreamListResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let existing = params.populate.as_deref().map(parse_populate);
    let spec = merge_populate(existing, REQUIRED_POPULATE);

    let (streams, total_items) =
        LiveStreamService::get_live_streams_paginated(&db, params.page, params.per_page)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let data = resolve_streams(&db, streams, live_stream_populate(&spec)).await?;

    Ok(Json(LiveStreamListResponse {
        data,
        meta: ResponseMeta::paginated(params.page, params.per_page, total_items),
    }))
}

/// Get a specific live stream by ID
#[utoipa::path(
    get,
    path = "/live-streams/{id}",
    params(
        ("id" = Uuid, Path, description = "Live stream ID"),
        DetailQueryParams
    ),
    responses(
        (status = 200, description = "Live stream found", body = LiveStreamResponse),
        (status = 404, description = "Live stream not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Live-stream"
)]
pub async fn get_live_stream_by_id(
    Path(id): Path<Uuid>,
    Query(params): Query<DetailQueryParams>,
) -> Result<Json<LiveStreamResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let existing = params.populate.as_deref().map(parse_populate);
    let spec = merge_populate(existing, REQUIRED_POPULATE);

    let stream = LiveStreamService::get_live_stream_by_id(&db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut data = resolve_streams(&db, vec![stream], live_stream_populate(&spec)).await?;
    data.pop().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Streams still scheduled for the future, soonest first
#[utoipa::path(
    get,
    path = "/live-streams/upcoming",
    responses(
        (status = 200, description = "Upcoming live streams retrieved successfully", body = LiveStreamListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Live-stream"
)]
pub async fn get_upcoming_live_streams() -> Result<Json<LiveStreamListResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let streams = LiveStreamService::get_upcoming(&db, Utc::now())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let total = streams.len() as u64;
    let data = resolve_streams(&db, streams, LiveStreamPopulate::listing()).await?;

    Ok(Json(LiveStreamListResponse {
        data,
        meta: ResponseMeta::unpaginated(total),
    }))
}

/// Streams currently on air
#[utoipa::path(
    get,
    path = "/live-streams/live",
    responses(
        (status = 200, description = "Live streams retrieved successfully", body = LiveStreamListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Live-stream"
)]
pub async fn get_live_live_streams() -> Result<Json<LiveStreamListResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let streams = LiveStreamService::get_live(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let total = streams.len() as u64;
    let data = resolve_streams(&db, streams, LiveStreamPopulate::listing()).await?;

    Ok(Json(LiveStreamListResponse {
        data,
        meta: ResponseMeta::unpaginated(total),
    }))
}

async fn resolve_streams(
    db: &DatabaseConnection,
    streams: Vec<live_stream::Model>,
    populate: LiveStreamPopulate,
) -> Result<Vec<LiveStreamResponse>, StatusCode> {
    let mut relations = LiveStreamService::load_relations(db, &streams, populate)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(streams
        .into_iter()
        .map(|stream| {
            let related = relations.remove(&stream.id).unwrap_or_default();
            live_stream_response(stream, related)
        })
        .collect())
}

/// Maps a normalized populate spec onto the relations live stream queries
/// know how to attach
fn live_stream_populate(spec: &Value) -> LiveStreamPopulate {
    LiveStreamPopulate {
        instructor: includes(spec, "instructor"),
        course: includes(spec, "course"),
        thumbnail: includes(spec, "thumbnail"),
    }
}

fn live_stream_response(
    stream: live_stream::Model,
    related: LiveStreamRelations,
) -> LiveStreamResponse {
    LiveStreamResponse {
        id: stream.id.to_string(),
        title: stream.title,
        description: stream.description,
        platform: stream.platform,
        stream_url: stream.stream_url,
        scheduled_at: stream.scheduled_at,
        duration: stream.duration,
        stream_status: stream.stream_status,
        is_public: stream.is_public,
        max_attendees: stream.max_attendees,
        instructor: related.instructor.map(instructor_response),
        course: related
            .course
            .map(|course| Box::new(course_response(course, CourseRelations::default()))),
        thumbnail: related.thumbnail.map(media_response),
    }
}
