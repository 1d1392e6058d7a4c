pub mod course;
pub mod live_stream;
pub mod permission;
pub mod seed;
pub mod settings;
