use crate::stream_status::StreamStatus;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The fixed-shape seed dataset consumed by the seeder binary.
///
/// Cross-references between the top-level arrays are zero-based positional
/// indices: `courses[n].instructor` points into `instructors`, and so on.
/// The importer translates each index to the identifier assigned by the
/// database at creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub instructors: Vec<InstructorSeed>,
    pub categories: Vec<CategorySeed>,
    pub tags: Vec<TagSeed>,
    pub courses: Vec<CourseSeed>,
    pub modules: Vec<ModuleSeed>,
    pub lessons: Vec<LessonSeed>,
    #[serde(rename = "liveStreams")]
    pub live_streams: Vec<LiveStreamSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorSeed {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub expertise: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeed {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagSeed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
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
    /// Index into `instructors`
    pub instructor: usize,
    /// Index into `categories`
    pub category: usize,
    /// Indices into `tags`
    #[serde(default)]
    pub tags: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSeed {
    pub title: String,
    pub order: i32,
    /// Index into `courses`
    pub course: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSeed {
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub duration: Option<i32>,
    pub order: i32,
    /// Index into `modules`
    pub module: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamSeed {
    pub title: String,
    pub description: Option<String>,
    pub platform: String,
    pub stream_url: String,
    pub scheduled_at: DateTime<Utc>,
    /// Planned length in minutes
    pub duration: i32,
    pub stream_status: StreamStatus,
    pub is_public: bool,
    pub max_attendees: Option<i32>,
    /// Index into `instructors`
    pub instructor: usize,
    /// Index into `courses`; absent means the stream is standalone
    pub course: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_with_index_references() {
        let json = r#"{
            "instructors": [{"name": "Ada", "email": "ada@example.com"}],
            "categories": [{"name": "Systems", "slug": "systems"}],
            "tags": [{"name": "rust"}, {"name": "backend"}],
            "courses": [{
                "title": "Intro",
                "description": "d",
                "duration": 300,
                "level": "beginner",
                "language": "en",
                "status": "published",
                "featured": true,
                "instructor": 0,
                "category": 0,
                "tags": [0, 1]
            }],
            "modules": [{"title": "M1", "order": 1, "course": 0}],
            "lessons": [{"title": "L1", "content": "c", "order": 1, "module": 0}],
            "liveStreams": [{
                "title": "Office hours",
                "platform": "youtube",
                "streamUrl": "https://example.com/live",
                "scheduledAt": "2026-09-01T18:00:00Z",
                "duration": 60,
                "streamStatus": "upcoming",
                "isPublic": true,
                "instructor": 0
            }]
        }"#;

        let data: SeedData = serde_json::from_str(json).unwrap();
        assert_eq!(data.courses[0].tags, vec![0, 1]);
        assert_eq!(data.modules[0].course, 0);
        assert_eq!(data.live_streams[0].course, None);
        assert_eq!(
            data.live_streams[0].stream_status,
            StreamStatus::Upcoming
        );
    }
}
