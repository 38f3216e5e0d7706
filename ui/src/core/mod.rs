pub mod config;
pub mod format;
pub mod platform;
pub mod premium;
pub mod quota;
pub mod storage;
pub mod workflow;
