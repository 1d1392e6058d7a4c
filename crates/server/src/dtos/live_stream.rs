use crate::dtos::{
    common::ResponseMeta,
    course::{CourseResponse, InstructorResponse, MediaResponse},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveStreamResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub platform: String,
    pub stream_url: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration: i32,
    pub stream_status: String,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorResponse>,
    /// Parent course, if the stream belongs to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<CourseResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaResponse>,
}

/// Standard list envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct LiveStreamListResponse {
    pub data: Vec<LiveStreamResponse>,
    pub meta: ResponseMeta,
}
