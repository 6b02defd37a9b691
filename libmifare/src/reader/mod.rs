// libmifare/src/reader/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Configured, KeyConfig, Reader, Uninitialized};
