//! joegit: a minimal content-addressed version-control tool
//!
//! - `areas`: the object database, refs, and working-directory areas owned by a repository
//! - `artifacts`: object types, name resolution, and history traversal
//! - `commands`: user-facing operations built on the areas
//! - `errors`: classified failures

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the directory holding the repository's own metadata.
///
/// Every path with a segment equal to this name is ignored by tree writing
/// and by working-directory sync.
pub const METADATA_DIR: &str = ".joegit";
