use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    /// Total length in minutes
    pub duration: i32,
    pub level: String,
    pub language: String,
    pub status: String,
    pub featured: bool,
    pub intro_video_url: Option<String>,
    pub instructor_id: Uuid,
    pub category_id: Uuid,
    pub thumbnail_id: Option<Uuid>,
    pub cover_image_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::course_category::Entity",
        from = "Column::CategoryId",
        to = "super::course_category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::module::Entity")]
    Modules,
    #[sea_orm(has_many = "super::live_stream::Entity")]
    LiveStreams,
    #[sea_orm(has_many = "super::course_tag::Entity")]
    CourseTags,
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::course_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modules.def()
    }
}

impl Related<super::course_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTags.def()
    }
}

// Many-to-many relationship with tags
impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_tag::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
