pub mod seed_data;
pub mod stream_status;
