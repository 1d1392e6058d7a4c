use crate::entities::{
    course, course_category, course_tag, instructor, lesson, live_stream, module, tag,
};
use chrono::Utc;
use models::seed_data::{
    CategorySeed, CourseSeed, InstructorSeed, LessonSeed, LiveStreamSeed, ModuleSeed, TagSeed,
};
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Creation API used by the one-shot seed importer. Every function inserts a
/// single row with a client-generated identifier and returns that identifier
/// so the importer can record its index-to-id mapping.
pub struct SeedService;

impl SeedService {
    pub async fn create_instructor(
        db: &DatabaseConnection,
        seed: &InstructorSeed,
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        instructor::Entity::insert(instructor::ActiveModel {
            id: Set(id),
            name: Set(seed.name.clone()),
            email: Set(seed.email.clone()),
            bio: Set(seed.bio.clone()),
            expertise: Set(seed.expertise.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }

    pub async fn create_category(
        db: &DatabaseConnection,
        seed: &CategorySeed,
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        course_category::Entity::insert(course_category::ActiveModel {
            id: Set(id),
            name: Set(seed.name.clone()),
            slug: Set(seed.slug.clone()),
            description: Set(seed.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }

    pub async fn create_tag(db: &DatabaseConnection, seed: &TagSeed) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        tag::Entity::insert(tag::ActiveModel {
            id: Set(id),
            name: Set(seed.name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }

    /// Inserts the course row, then one junction row per resolved tag
    pub async fn create_course(
        db: &DatabaseConnection,
        seed: &CourseSeed,
        instructor_id: Uuid,
        category_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        course::Entity::insert(course::ActiveModel {
            id: Set(id),
            title: Set(seed.title.clone()),
            description: Set(seed.description.clone()),
            short_description: Set(seed.short_description.clone()),
            duration: Set(seed.duration),
            level: Set(seed.level.clone()),
            language: Set(seed.language.clone()),
            status: Set(seed.status.clone()),
            featured: Set(seed.featured),
            intro_video_url: Set(seed.intro_video_url.clone()),
            instructor_id: Set(instructor_id),
            category_id: Set(category_id),
            thumbnail_id: Set(None),
            cover_image_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        if !tag_ids.is_empty() {
            let links = tag_ids.iter().map(|&tag_id| course_tag::ActiveModel {
                id: Set(Uuid::new_v4()),
                course_id: Set(id),
                tag_id: Set(tag_id),
                created_at: Set(now),
            });

            course_tag::Entity::insert_many(links)
                .exec_without_returning(db)
                .await?;
        }

        Ok(id)
    }

    pub async fn create_module(
        db: &DatabaseConnection,
        seed: &ModuleSeed,
        course_id: Uuid,
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        module::Entity::insert(module::ActiveModel {
            id: Set(id),
            title: Set(seed.title.clone()),
            order: Set(seed.order),
            course_id: Set(course_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }

    pub async fn create_lesson(
        db: &DatabaseConnection,
        seed: &LessonSeed,
        module_id: Uuid,
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        lesson::Entity::insert(lesson::ActiveModel {
            id: Set(id),
            title: Set(seed.title.clone()),
            content: Set(seed.content.clone()),
            video_url: Set(seed.video_url.clone()),
            duration: Set(seed.duration),
            order: Set(seed.order),
            module_id: Set(module_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }

    /// `course_id` is None for standalone streams
    pub async fn create_live_stream(
        db: &DatabaseConnection,
        seed: &LiveStreamSeed,
        instructor_id: Uuid,
        course_id: Option<Uuid>,
    ) -> Result<Uuid, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        live_stream::Entity::insert(live_stream::ActiveModel {
            id: Set(id),
            title: Set(seed.title.clone()),
            description: Set(seed.description.clone()),
            platform: Set(seed.platform.clone()),
            stream_url: Set(seed.stream_url.clone()),
            scheduled_at: Set(seed.scheduled_at),
            duration: Set(seed.duration),
            stream_status: Set(seed.stream_status.as_str().to_owned()),
            is_public: Set(seed.is_public),
            max_attendees: Set(seed.max_attendees),
            instructor_id: Set(instructor_id),
            course_id: Set(course_id),
            thumbnail_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(db)
        .await?;

        Ok(id)
    }
}
