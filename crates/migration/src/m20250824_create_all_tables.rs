use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string().not_null())
                    .col(ColumnDef::new(Instructors::Email).string().not_null())
                    .col(ColumnDef::new(Instructors::Bio).text())
                    .col(ColumnDef::new(Instructors::Expertise).string())
                    .col(
                        ColumnDef::new(Instructors::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Instructors::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_categories table
        manager
            .create_table(
                Table::create()
                    .table(CourseCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseCategories::Name).string().not_null())
                    .col(ColumnDef::new(CourseCategories::Slug).string().not_null())
                    .col(ColumnDef::new(CourseCategories::Description).text())
                    .col(
                        ColumnDef::new(CourseCategories::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCategories::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tags table
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::Name).string().not_null())
                    .col(ColumnDef::new(Tags::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Tags::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create media table
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Media::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Media::Name).string().not_null())
                    .col(ColumnDef::new(Media::Url).string().not_null())
                    .col(ColumnDef::new(Media::Mime).string().not_null())
                    .col(ColumnDef::new(Media::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::ShortDescription).text())
                    .col(ColumnDef::new(Courses::Duration).integer().not_null())
                    .col(ColumnDef::new(Courses::Level).string().not_null())
                    .col(ColumnDef::new(Courses::Language).string().not_null())
                    .col(ColumnDef::new(Courses::Status).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Courses::IntroVideoUrl).string())
                    .col(ColumnDef::new(Courses::InstructorId).uuid().not_null())
                    .col(ColumnDef::new(Courses::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Courses::ThumbnailId).uuid())
                    .col(ColumnDef::new(Courses::CoverImageId).uuid())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-instructor_id")
                            .from(Courses::Table, Courses::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-category_id")
                            .from(Courses::Table, Courses::CategoryId)
                            .to(CourseCategories::Table, CourseCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-thumbnail_id")
                            .from(Courses::Table, Courses::ThumbnailId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-cover_image_id")
                            .from(Courses::Table, Courses::CoverImageId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_tags junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTags::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseTags::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseTags::TagId).uuid().not_null())
                    .col(ColumnDef::new(CourseTags::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_tags-course_id")
                            .from(CourseTags::Table, CourseTags::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_tags-tag_id")
                            .from(CourseTags::Table, CourseTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create modules table
        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Modules::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Modules::Title).string().not_null())
                    .col(ColumnDef::new(Modules::Order).integer().not_null())
                    .col(ColumnDef::new(Modules::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Modules::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Modules::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-modules-course_id")
                            .from(Modules::Table, Modules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lessons table
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lessons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lessons::Title).string().not_null())
                    .col(ColumnDef::new(Lessons::Content).text().not_null())
                    .col(ColumnDef::new(Lessons::VideoUrl).string())
                    .col(ColumnDef::new(Lessons::Duration).integer())
                    .col(ColumnDef::new(Lessons::Order).integer().not_null())
                    .col(ColumnDef::new(Lessons::ModuleId).uuid().not_null())
                    .col(ColumnDef::new(Lessons::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Lessons::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lessons-module_id")
                            .from(Lessons::Table, Lessons::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create live_streams table
        manager
            .create_table(
                Table::create()
                    .table(LiveStreams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LiveStreams::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LiveStreams::Title).string().not_null())
                    .col(ColumnDef::new(LiveStreams::Description).text())
                    .col(ColumnDef::new(LiveStreams::Platform).string().not_null())
                    .col(ColumnDef::new(LiveStreams::StreamUrl).string().not_null())
                    .col(
                        ColumnDef::new(LiveStreams::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LiveStreams::Duration).integer().not_null())
                    .col(ColumnDef::new(LiveStreams::StreamStatus).string().not_null())
                    .col(
                        ColumnDef::new(LiveStreams::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(LiveStreams::MaxAttendees).integer())
                    .col(ColumnDef::new(LiveStreams::InstructorId).uuid().not_null())
                    .col(ColumnDef::new(LiveStreams::CourseId).uuid())
                    .col(ColumnDef::new(LiveStreams::ThumbnailId).uuid())
                    .col(ColumnDef::new(LiveStreams::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(LiveStreams::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-live_streams-instructor_id")
                            .from(LiveStreams::Table, LiveStreams::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-live_streams-course_id")
                            .from(LiveStreams::Table, LiveStreams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-live_streams-thumbnail_id")
                            .from(LiveStreams::Table, LiveStreams::ThumbnailId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create permissions table
        manager
            .create_table(
                Table::create()
                    .table(Permissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Permissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Permissions::Action).string().not_null())
                    .col(ColumnDef::new(Permissions::Role).string().not_null())
                    .col(
                        ColumnDef::new(Permissions::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create settings key-value table
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Settings::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Settings::Value).json_binary().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Permissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LiveStreams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Instructors {
    Table,
    Id,
    Name,
    Email,
    Bio,
    Expertise,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseCategories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Name,
    Url,
    Mime,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    ShortDescription,
    Duration,
    Level,
    Language,
    Status,
    Featured,
    IntroVideoUrl,
    InstructorId,
    CategoryId,
    ThumbnailId,
    CoverImageId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseTags {
    Table,
    Id,
    CourseId,
    TagId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Modules {
    Table,
    Id,
    Title,
    Order,
    CourseId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Lessons {
    Table,
    Id,
    Title,
    Content,
    VideoUrl,
    Duration,
    Order,
    ModuleId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LiveStreams {
    Table,
    Id,
    Title,
    Description,
    Platform,
    StreamUrl,
    ScheduledAt,
    Duration,
    StreamStatus,
    IsPublic,
    MaxAttendees,
    InstructorId,
    CourseId,
    ThumbnailId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Permissions {
    Table,
    Id,
    Action,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Key,
    Value,
}
