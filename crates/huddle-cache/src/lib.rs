pub mod error;
pub mod keys;
pub mod memory_store;
pub mod redis_store;
pub mod service;
pub mod store;

pub use error::{CacheError, Result};
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use service::CacheService;
pub use store::CacheStore;
