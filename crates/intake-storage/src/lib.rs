//! intake-storage
//!
//! Session and symptom persistence. The store traits are the seam the
//! interview and diagnosis layers depend on; in-memory and S3 (JSON objects
//! with ETag optimistic locking) implementations are provided.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use memory::{MemorySessionStore, MemorySymptomStore};
pub use objects::{JsonBucket, Versioned, WriteMode};
pub use s3::{S3SessionStore, S3SymptomStore};
pub use store::{BoxFuture, SessionStore, SymptomStore};
