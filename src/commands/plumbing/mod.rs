//! Plumbing commands (low-level operations)
//!
//! Plumbing commands provide direct access to the object model. They are the
//! building blocks the porcelain commands compose.
//!
//! ## Commands
//!
//! - `hash-object`: Compute an object ID and optionally store the blob
//! - `cat-file`: Print an object's content
//! - `write-tree`: Snapshot the working directory into tree objects
//! - `ls-tree`: Expand a tree into a flat path listing
//! - `read-tree`: Replace the working directory with a tree's content
//! - `rev-parse`: Resolve a name to an object ID

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod read_tree;
pub mod rev_parse;
pub mod write_tree;
