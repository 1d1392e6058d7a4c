use crate::entities::{course, course_category, course_tag, instructor, lesson, media, module, tag};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Which relations to attach to course query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoursePopulate {
    pub instructor: bool,
    pub category: bool,
    pub tags: bool,
    pub thumbnail: bool,
    pub cover_image: bool,
    pub modules: bool,
    /// Only meaningful together with `modules`
    pub lessons: bool,
}

impl CoursePopulate {
    /// The deep populate used by the "complete" course endpoint
    pub fn complete() -> Self {
        Self {
            instructor: true,
            category: true,
            tags: true,
            thumbnail: true,
            cover_image: true,
            modules: true,
            lessons: true,
        }
    }
}

/// Related records resolved for a single course
#[derive(Debug, Clone, Default)]
pub struct CourseRelations {
    pub instructor: Option<instructor::Model>,
    pub category: Option<course_category::Model>,
    pub tags: Option<Vec<tag::Model>>,
    pub thumbnail: Option<media::Model>,
    pub cover_image: Option<media::Model>,
    /// Modules in course order; the inner lessons vec is only present when
    /// lessons were populated too
    pub modules: Option<Vec<(module::Model, Option<Vec<lesson::Model>>)>>,
}

pub struct CourseService;

impl CourseService {
    /// Query courses with pagination
    pub async fn get_courses_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<course::Model>, u64), DbErr> {
        let query = course::Entity::find().order_by_asc(course::Column::Title);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?; // SeaORM uses 0-based pages

        Ok((courses, total_items))
    }

    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(course_id).one(db).await
    }

    /// Batch-fetch the requested relations for a set of courses.
    ///
    /// Every relation type is loaded with a single `IS IN` query across all
    /// courses, then distributed through lookup maps.
    pub async fn load_relations(
        db: &DatabaseConnection,
        courses: &[course::Model],
        populate: CoursePopulate,
    ) -> Result<HashMap<Uuid, CourseRelations>, DbErr> {
        let mut relations: HashMap<Uuid, CourseRelations> = courses
            .iter()
            .map(|course| (course.id, CourseRelations::default()))
            .collect();

        if courses.is_empty() {
            return Ok(relations);
        }

        if populate.instructor {
            let instructor_ids: Vec<Uuid> = courses.iter().map(|c| c.instructor_id).collect();
            let instructors: HashMap<Uuid, instructor::Model> = instructor::Entity::find()
                .filter(instructor::Column::Id.is_in(instructor_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|instructor| (instructor.id, instructor))
                .collect();

            for course in courses {
                if let Some(entry) = relations.get_mut(&course.id) {
                    entry.instructor = instructors.get(&course.instructor_id).cloned();
                }
            }
        }

        if populate.category {
            let category_ids: Vec<Uuid> = courses.iter().map(|c| c.category_id).collect();
            let categories: HashMap<Uuid, course_category::Model> =
                course_category::Entity::find()
                    .filter(course_category::Column::Id.is_in(category_ids))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|category| (category.id, category))
                    .collect();

            for course in courses {
                if let Some(entry) = relations.get_mut(&course.id) {
                    entry.category = categories.get(&course.category_id).cloned();
                }
            }
        }

        if populate.thumbnail || populate.cover_image {
            let mut media_ids: Vec<Uuid> = Vec::new();
            for course in courses {
                if populate.thumbnail {
                    media_ids.extend(course.thumbnail_id);
                }
                if populate.cover_image {
                    media_ids.extend(course.cover_image_id);
                }
            }

            let media: HashMap<Uuid, media::Model> = media::Entity::find()
                .filter(media::Column::Id.is_in(media_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|item| (item.id, item))
                .collect();

            for course in courses {
                if let Some(entry) = relations.get_mut(&course.id) {
                    if populate.thumbnail {
                        entry.thumbnail = course
                            .thumbnail_id
                            .and_then(|id| media.get(&id).cloned());
                    }
                    if populate.cover_image {
                        entry.cover_image = course
                            .cover_image_id
                            .and_then(|id| media.get(&id).cloned());
                    }
                }
            }
        }

        if populate.tags {
            let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
            let tag_links: Vec<(course_tag::Model, Option<tag::Model>)> =
                course_tag::Entity::find()
                    .filter(course_tag::Column::CourseId.is_in(course_ids))
                    .find_also_related(tag::Entity)
                    .all(db)
                    .await?;

            for course in courses {
                if let Some(entry) = relations.get_mut(&course.id) {
                    entry.tags = Some(Vec::new());
                }
            }
            for (link, tag) in tag_links {
                if let (Some(entry), Some(tag)) = (relations.get_mut(&link.course_id), tag) {
                    entry.tags.get_or_insert_with(Vec::new).push(tag);
                }
            }
        }

        if populate.modules {
            let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
            let modules = module::Entity::find()
                .filter(module::Column::CourseId.is_in(course_ids))
                .order_by_asc(module::Column::Order)
                .all(db)
                .await?;

            let mut lessons_by_module: HashMap<Uuid, Vec<lesson::Model>> = HashMap::new();
            if populate.lessons && !modules.is_empty() {
                let module_ids: Vec<Uuid> = modules.iter().map(|m| m.id).collect();
                let lessons = lesson::Entity::find()
                    .filter(lesson::Column::ModuleId.is_in(module_ids))
                    .order_by_asc(lesson::Column::Order)
                    .all(db)
                    .await?;

                for lesson in lessons {
                    lessons_by_module
                        .entry(lesson.module_id)
                        .or_default()
                        .push(lesson);
                }
            }

            let mut modules_by_course: HashMap<
                Uuid,
                Vec<(module::Model, Option<Vec<lesson::Model>>)>,
            > = HashMap::new();
            for module in modules {
                let module_lessons = populate
                    .lessons
                    .then(|| lessons_by_module.remove(&module.id).unwrap_or_default());
                modules_by_course
                    .entry(module.course_id)
                    .or_default()
                    .push((module, module_lessons));
            }

            for course in courses {
                if let Some(entry) = relations.get_mut(&course.id) {
                    entry.modules = Some(modules_by_course.remove(&course.id).unwrap_or_default());
                }
            }
        }

        Ok(relations)
    }
}
