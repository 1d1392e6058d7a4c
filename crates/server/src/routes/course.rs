use crate::dtos::common::{DetailQueryParams, ListQueryParams, ResponseMeta};
use crate::dtos::course::{
    CategoryResponse, CourseListResponse, CourseResponse, InstructorResponse, LessonResponse,
    MediaResponse, ModuleResponse, TagResponse,
};
use crate::utils::populate::{includes, includes_nested, merge_populate, parse_populate};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::{course, course_category, instructor, lesson, media, module, tag},
    services::course::{CoursePopulate, CourseRelations, CourseService},
};
use sea_orm::prelude::Uuid;
use serde_json::Value;

/// Relations merged into every course query regardless of what the caller
/// asked to populate
const REQUIRED_POPULATE: &[&str] = &["thumbnail"];

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(ListQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = CourseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Course"
)]
pub async fn get_courses(
    Query(params): Query<ListQueryParams>,
) -> Result<Json<CourseListResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let existing = params.populate.as_deref().map(parse_populate);
    let spec = merge_populate(existing, REQUIRED_POPULATE);

    let (courses, total_items) =
        CourseService::get_courses_paginated(&db, params.page, params.per_page)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut relations = CourseService::load_relations(&db, &courses, course_populate(&spec))
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let data = courses
        .into_iter()
        .map(|course| {
            let related = relations.remove(&course.id).unwrap_or_default();
            course_response(course, related)
        })
        .collect();

    Ok(Json(CourseListResponse {
        data,
        meta: ResponseMeta::paginated(params.page, params.per_page, total_items),
    }))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        DetailQueryParams
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Course"
)]
pub async fn get_course_by_id(
    Path(id): Path<Uuid>,
    Query(params): Query<DetailQueryParams>,
) -> Result<Json<CourseResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let existing = params.populate.as_deref().map(parse_populate);
    let spec = merge_populate(existing, REQUIRED_POPULATE);

    fetch_course(&db, id, course_populate(&spec)).await
}

/// Get a course with everything attached: modules and their lessons,
/// instructor, category, tags, thumbnail and cover image
#[utoipa::path(
    get,
    path = "/courses/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Course"
)]
pub async fn get_course_complete(Path(id): Path<Uuid>) -> Result<Json<CourseResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    fetch_course(&db, id, CoursePopulate::complete()).await
}

async fn fetch_course(
    db: &sea_orm::DatabaseConnection,
    id: Uuid,
    populate: CoursePopulate,
) -> Result<Json<CourseResponse>, StatusCode> {
    let course = CourseService::get_course_by_id(db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut relations = CourseService::load_relations(db, std::slice::from_ref(&course), populate)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let related = relations.remove(&course.id).unwrap_or_default();
    Ok(Json(course_response(course, related)))
}

/// Maps a normalized populate spec onto the relations course queries know
/// how to attach
fn course_populate(spec: &Value) -> CoursePopulate {
    CoursePopulate {
        instructor: includes(spec, "instructor"),
        category: includes(spec, "category"),
        tags: includes(spec, "tags"),
        thumbnail: includes(spec, "thumbnail"),
        cover_image: includes(spec, "coverImage"),
        modules: includes(spec, "modules"),
        lessons: includes_nested(spec, "modules", "lessons"),
    }
}

/// Helper functions converting database models to API responses. Shared
/// with the live stream routes.
pub(crate) fn course_response(course: course::Model, related: CourseRelations) -> CourseResponse {
    CourseResponse {
        id: course.id.to_string(),
        title: course.title,
        description: course.description,
        short_description: course.short_description,
        duration: course.duration,
        level: course.level,
        language: course.language,
        status: course.status,
        featured: course.featured,
        intro_video_url: course.intro_video_url,
        instructor: related.instructor.map(instructor_response),
        category: related.category.map(category_response),
        tags: related
            .tags
            .map(|tags| tags.into_iter().map(tag_response).collect()),
        thumbnail: related.thumbnail.map(media_response),
        cover_image: related.cover_image.map(media_response),
        modules: related.modules.map(|modules| {
            modules
                .into_iter()
                .map(|(module, lessons)| module_response(module, lessons))
                .collect()
        }),
    }
}

pub(crate) fn instructor_response(instructor: instructor::Model) -> InstructorResponse {
    InstructorResponse {
        id: instructor.id.to_string(),
        name: instructor.name,
        email: instructor.email,
        bio: instructor.bio,
        expertise: instructor.expertise,
    }
}

pub(crate) fn media_response(item: media::Model) -> MediaResponse {
    MediaResponse {
        id: item.id.to_string(),
        name: item.name,
        url: item.url,
        mime: item.mime,
    }
}

fn category_response(category: course_category::Model) -> CategoryResponse {
    CategoryResponse {
        id: category.id.to_string(),
        name: category.name,
        slug: category.slug,
        description: category.description,
    }
}

fn tag_response(tag: tag::Model) -> TagResponse {
    TagResponse {
        id: tag.id.to_string(),
        name: tag.name,
    }
}

fn module_response(
    module: module::Model,
    lessons: Option<Vec<lesson::Model>>,
) -> ModuleResponse {
    ModuleResponse {
        id: module.id.to_string(),
        title: module.title,
        order: module.order,
        lessons: lessons.map(|lessons| lessons.into_iter().map(lesson_response).collect()),
    }
}

fn lesson_response(lesson: lesson::Model) -> LessonResponse {
    LessonResponse {
        id: lesson.id.to_string(),
        title: lesson.title,
        content: lesson.content,
        video_url: lesson.video_url,
        duration: lesson.duration,
        order: lesson.order,
    }
}
