//! Data structures and algorithms
//!
//! - `branch`: Ref names and name-to-object resolution
//! - `database`: Tree entry types
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, tree, commit)

pub mod branch;
pub mod database;
pub mod log;
pub mod objects;
