pub mod course;
pub mod health;
pub mod live_stream;
