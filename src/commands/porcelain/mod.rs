//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the plumbing into the snapshot workflow: commit
//! the working directory, move between commits, name them and read history.
//!
//! ## Commands
//!
//! - `init`: Create the metadata directory layout
//! - `commit`: Snapshot the working directory on top of `HEAD`
//! - `checkout`: Restore a commit into the working directory
//! - `tag`: Create or list tags
//! - `log`: Show commit history

pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod tag;
