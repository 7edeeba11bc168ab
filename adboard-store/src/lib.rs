pub mod app_config;
pub mod blob;
pub mod keys;

pub use app_config::Config;
pub use blob::{load_optional, load_or_default, save, BlobStore, FileStore, MemoryStore, StoreError};
