use database::services::{
    permission::PermissionService, seed::SeedService, settings::SettingsService,
};
use log::{error, info, warn};
use models::seed_data::{
    CategorySeed, CourseSeed, InstructorSeed, LessonSeed, LiveStreamSeed, ModuleSeed, SeedData,
    TagSeed,
};
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;
use uuid::Uuid;

/// Maps a zero-based position in a seed array to the identifier the
/// database assigned at creation time
pub type IdMap = HashMap<usize, Uuid>;

const READ_ACTIONS: &[&str] = &["find", "findOne"];

/// Content types opened to unauthenticated reads before importing
const PUBLIC_READ_GRANTS: &[(&str, &[&str])] = &[
    ("course", READ_ACTIONS),
    ("module", READ_ACTIONS),
    ("lesson", READ_ACTIONS),
    ("instructor", READ_ACTIONS),
    ("course-category", READ_ACTIONS),
    ("tag", READ_ACTIONS),
    ("live-stream", READ_ACTIONS),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Imported,
    /// The first-run flag was already set; nothing was created
    AlreadyImported,
}

/// Runs the whole import: first-run guard, public permission grants, then
/// the entity batches in dependency order. Individual entry failures are
/// logged and skipped; only infrastructure errors (guard, grants) abort.
pub async fn seed_courses(db: &DatabaseConnection, data: &SeedData) -> Result<SeedOutcome, DbErr> {
    if SettingsService::get_flag(db, SettingsService::SEED_FLAG).await? {
        info!("Seed data has already been imported. Clear your database first to reimport.");
        return Ok(SeedOutcome::AlreadyImported);
    }
    SettingsService::set_flag(db, SettingsService::SEED_FLAG, true).await?;

    PermissionService::grant_public(db, PUBLIC_READ_GRANTS).await?;

    info!("Importing instructors...");
    let instructor_map = import_instructors(db, &data.instructors).await;

    info!("Importing categories...");
    let category_map = import_categories(db, &data.categories).await;

    info!("Importing tags...");
    let tag_map = import_tags(db, &data.tags).await;

    info!("Importing courses...");
    let course_map =
        import_courses(db, &data.courses, &instructor_map, &category_map, &tag_map).await;

    info!("Importing modules...");
    let module_map = import_modules(db, &data.modules, &course_map).await;

    info!("Importing lessons...");
    import_lessons(db, &data.lessons, &module_map).await;

    info!("Importing live streams...");
    import_live_streams(db, &data.live_streams, &instructor_map, &course_map).await;

    info!("All course data imported successfully!");
    Ok(SeedOutcome::Imported)
}

pub async fn import_instructors(
    db: &DatabaseConnection,
    instructors: &[InstructorSeed],
) -> IdMap {
    let mut map = IdMap::new();
    for (index, instructor) in instructors.iter().enumerate() {
        match SeedService::create_instructor(db, instructor).await {
            Ok(id) => {
                map.insert(index, id);
            }
            Err(err) => error!("instructor {index}: create failed: {err} (entry: {instructor:?})"),
        }
    }
    map
}

pub async fn import_categories(db: &DatabaseConnection, categories: &[CategorySeed]) -> IdMap {
    let mut map = IdMap::new();
    for (index, category) in categories.iter().enumerate() {
        match SeedService::create_category(db, category).await {
            Ok(id) => {
                map.insert(index, id);
            }
            Err(err) => error!("category {index}: create failed: {err} (entry: {category:?})"),
        }
    }
    map
}

pub async fn import_tags(db: &DatabaseConnection, tags: &[TagSeed]) -> IdMap {
    let mut map = IdMap::new();
    for (index, tag) in tags.iter().enumerate() {
        match SeedService::create_tag(db, tag).await {
            Ok(id) => {
                map.insert(index, id);
            }
            Err(err) => error!("tag {index}: create failed: {err} (entry: {tag:?})"),
        }
    }
    map
}

pub async fn import_courses(
    db: &DatabaseConnection,
    courses: &[CourseSeed],
    instructor_map: &IdMap,
    category_map: &IdMap,
    tag_map: &IdMap,
) -> IdMap {
    let mut map = IdMap::new();
    for (index, course) in courses.iter().enumerate() {
        let Some(&instructor_id) = instructor_map.get(&course.instructor) else {
            error!(
                "course {index}: unknown instructor index {} (entry: {course:?})",
                course.instructor
            );
            continue;
        };
        let Some(&category_id) = category_map.get(&course.category) else {
            error!(
                "course {index}: unknown category index {} (entry: {course:?})",
                course.category
            );
            continue;
        };

        let mut tag_ids = Vec::with_capacity(course.tags.len());
        for &tag_index in &course.tags {
            match tag_map.get(&tag_index) {
                Some(&tag_id) => tag_ids.push(tag_id),
                None => warn!("course {index}: skipping unknown tag index {tag_index}"),
            }
        }

        match SeedService::create_course(db, course, instructor_id, category_id, &tag_ids).await {
            Ok(id) => {
                map.insert(index, id);
            }
            Err(err) => error!("course {index}: create failed: {err} (entry: {course:?})"),
        }
    }
    map
}

pub async fn import_modules(
    db: &DatabaseConnection,
    modules: &[ModuleSeed],
    course_map: &IdMap,
) -> IdMap {
    let mut map = IdMap::new();
    for (index, module) in modules.iter().enumerate() {
        let Some(&course_id) = course_map.get(&module.course) else {
            error!(
                "module {index}: unknown course index {} (entry: {module:?})",
                module.course
            );
            continue;
        };

        match SeedService::create_module(db, module, course_id).await {
            Ok(id) => {
                map.insert(index, id);
            }
            Err(err) => error!("module {index}: create failed: {err} (entry: {module:?})"),
        }
    }
    map
}

/// Returns how many lessons were created
pub async fn import_lessons(
    db: &DatabaseConnection,
    lessons: &[LessonSeed],
    module_map: &IdMap,
) -> usize {
    let mut imported = 0;
    for (index, lesson) in lessons.iter().enumerate() {
        let Some(&module_id) = module_map.get(&lesson.module) else {
            error!(
                "lesson {index}: unknown module index {} (entry: {lesson:?})",
                lesson.module
            );
            continue;
        };

        match SeedService::create_lesson(db, lesson, module_id).await {
            Ok(_) => imported += 1,
            Err(err) => error!("lesson {index}: create failed: {err} (entry: {lesson:?})"),
        }
    }
    imported
}

/// Returns how many streams were created. A seed entry without a `course`
/// field becomes a standalone stream with a NULL course reference.
pub async fn import_live_streams(
    db: &DatabaseConnection,
    streams: &[LiveStreamSeed],
    instructor_map: &IdMap,
    course_map: &IdMap,
) -> usize {
    let mut imported = 0;
    for (index, stream) in streams.iter().enumerate() {
        let Some(&instructor_id) = instructor_map.get(&stream.instructor) else {
            error!(
                "live-stream {index}: unknown instructor index {} (entry: {stream:?})",
                stream.instructor
            );
            continue;
        };

        let course_id = match stream.course {
            None => None,
            Some(course_index) => match course_map.get(&course_index) {
                Some(&course_id) => Some(course_id),
                None => {
                    error!(
                        "live-stream {index}: unknown course index {course_index} (entry: {stream:?})"
                    );
                    continue;
                }
            },
        };

        match SeedService::create_live_stream(db, stream, instructor_id, course_id).await {
            Ok(_) => imported += 1,
            Err(err) => error!("live-stream {index}: create failed: {err} (entry: {stream:?})"),
        }
    }
    imported
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use database::entities::setting;
    use models::stream_status::StreamStatus;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn instructor(name: &str) -> InstructorSeed {
        InstructorSeed {
            name: name.to_owned(),
            email: format!("{name}@example.com"),
            bio: None,
            expertise: None,
        }
    }

    fn stream(course: Option<usize>) -> LiveStreamSeed {
        LiveStreamSeed {
            title: "Q&A".to_owned(),
            description: None,
            platform: "youtube".to_owned(),
            stream_url: "https://example.com/live".to_owned(),
            scheduled_at: Utc::now(),
            duration: 60,
            stream_status: StreamStatus::Upcoming,
            is_public: true,
            max_attendees: None,
            instructor: 0,
            course,
        }
    }

    #[tokio::test]
    async fn instructor_import_maps_every_index() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(), exec_ok()])
            .into_connection();

        let map = import_instructors(&db, &[instructor("ada"), instructor("grace")]).await;

        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&0) && map.contains_key(&1));
        assert_ne!(map[&0], map[&1]);
    }

    #[tokio::test]
    async fn module_with_unknown_course_index_is_skipped_without_any_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let bad = ModuleSeed {
            title: "Orphan".to_owned(),
            order: 1,
            course: 7,
        };
        let map = import_modules(&db, &[bad], &IdMap::new()).await;

        assert!(map.is_empty());
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn bad_module_does_not_block_later_modules() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok()])
            .into_connection();

        let mut course_map = IdMap::new();
        course_map.insert(0, Uuid::new_v4());

        let bad = ModuleSeed {
            title: "Orphan".to_owned(),
            order: 1,
            course: 7,
        };
        let good = ModuleSeed {
            title: "Basics".to_owned(),
            order: 2,
            course: 0,
        };
        let map = import_modules(&db, &[bad, good], &course_map).await;

        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&1));
    }

    #[tokio::test]
    async fn stream_without_course_field_is_created_standalone() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok()])
            .into_connection();

        let mut instructor_map = IdMap::new();
        instructor_map.insert(0, Uuid::new_v4());

        let imported =
            import_live_streams(&db, &[stream(None)], &instructor_map, &IdMap::new()).await;

        assert_eq!(imported, 1);
    }

    #[tokio::test]
    async fn stream_with_unresolvable_course_index_is_skipped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let mut instructor_map = IdMap::new();
        instructor_map.insert(0, Uuid::new_v4());

        let imported =
            import_live_streams(&db, &[stream(Some(3))], &instructor_map, &IdMap::new()).await;

        assert_eq!(imported, 0);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn course_references_resolve_to_recorded_ids() {
        // Course row + one junction batch.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(), exec_ok()])
            .into_connection();

        let instructor_id = Uuid::new_v4();
        let category_id = Uuid::new_v4();
        let tag_id = Uuid::new_v4();
        let mut instructor_map = IdMap::new();
        instructor_map.insert(1, instructor_id);
        let mut category_map = IdMap::new();
        category_map.insert(0, category_id);
        let mut tag_map = IdMap::new();
        tag_map.insert(0, tag_id);

        let seed = CourseSeed {
            title: "Intro".to_owned(),
            description: "d".to_owned(),
            short_description: None,
            duration: 300,
            level: "beginner".to_owned(),
            language: "en".to_owned(),
            status: "published".to_owned(),
            featured: false,
            intro_video_url: None,
            instructor: 1,
            category: 0,
            tags: vec![0, 9],
        };
        let map = import_courses(&db, &[seed], &instructor_map, &category_map, &tag_map).await;

        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&0));

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);

        let course_insert = format!("{:?}", log[0]);
        assert!(course_insert.contains(&instructor_id.to_string()));
        assert!(course_insert.contains(&category_id.to_string()));

        // Unknown tag index 9 was dropped: the junction insert holds a single
        // four-column row, so it never reaches a fifth bind parameter.
        let junction_insert = format!("{:?}", log[1]);
        assert!(junction_insert.contains(&tag_id.to_string()));
        assert!(!junction_insert.contains("$5"));
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        // Flag already set: the run stops after the single settings read.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![setting::Model {
                key: SettingsService::SEED_FLAG.to_owned(),
                value: json!(true),
            }]])
            .into_connection();

        let data = SeedData {
            instructors: vec![instructor("ada")],
            categories: Vec::new(),
            tags: Vec::new(),
            courses: Vec::new(),
            modules: Vec::new(),
            lessons: Vec::new(),
            live_streams: Vec::new(),
        };

        let outcome = seed_courses(&db, &data).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyImported);
        assert_eq!(db.into_transaction_log().len(), 1);
    }
}
