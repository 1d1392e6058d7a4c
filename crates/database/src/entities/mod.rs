pub mod course;
pub mod course_category;
pub mod course_tag;
pub mod instructor;
pub mod lesson;
pub mod live_stream;
pub mod media;
pub mod module;
pub mod permission;
pub mod setting;
pub mod tag;
