//! Command implementations
//!
//! Every command is an `impl Repository` block, organized into two categories
//! following Git's architecture:
//!
//! - `plumbing`: Low-level object and tree operations (hash-object, write-tree, read-tree, ...)
//! - `porcelain`: User-facing workflow commands (commit, checkout, tag, log)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
