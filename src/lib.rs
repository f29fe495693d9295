pub mod config;
pub mod observability;
pub mod render;
pub mod storage;

pub use config::Config;
