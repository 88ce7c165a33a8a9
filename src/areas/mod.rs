//! Core repository components
//!
//! - `database`: Content-addressed object store for blobs, trees, and commits
//! - `refs`: Reference management (HEAD, tags, branch heads)
//! - `repository`: Owns the other areas for one working directory
//! - `workspace`: Working directory file system operations and the ignore policy

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
