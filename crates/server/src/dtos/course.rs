use crate::dtos::common::ResponseMeta;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub duration: i32,
    pub level: String,
    pub language: String,
    pub status: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<MediaResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleResponse>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    pub mime: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModuleResponse {
    pub id: String,
    pub title: String,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<LessonResponse>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    pub order: i32,
}

/// Standard list envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub data: Vec<CourseResponse>,
    pub meta: ResponseMeta,
}
