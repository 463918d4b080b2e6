//! Cache module for Redis access
//!
//! Provides the Redis client with retry logic and the revocation store
//! built on it.

pub mod redis_client;
pub mod revocation_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use taskhub_shared::config::CacheConfig;
