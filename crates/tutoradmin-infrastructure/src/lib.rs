//! Filesystem-backed pieces of the tutoradmin client: paths, the session
//! file, configuration loading and attachment reading.

pub mod attachments;
pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::attachments::load_attachment;
pub use crate::config_service::ConfigService;
pub use crate::paths::AdminPaths;
pub use crate::storage::FileKeyValueStore;
