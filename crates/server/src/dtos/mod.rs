pub mod common;
pub mod course;
pub mod live_stream;
