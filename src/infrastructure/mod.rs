// src/infrastructure/mod.rs
pub mod clock;
pub mod config;
pub mod file_store;
pub mod image;
pub mod memory_store;

pub use clock::ClockIdSource;
pub use config::Config;
pub use file_store::FileKeyValueStore;
pub use image::PathImageSource;
pub use memory_store::MemoryKeyValueStore;
