pub mod populate;
pub mod shutdown;
