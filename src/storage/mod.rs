//! Object-store abstraction layer
//!
//! Every pipeline stage reads and writes keyed, immutable artifacts through
//! the [`ObjectStore`] trait; nothing else is shared between stages. The
//! store must provide read-after-write visibility for a key once a write to
//! that key has returned.

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod traits;

pub use backends::MemoryStore;
pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use factory::StorageFactory;
pub use traits::ObjectStore;
