//! Commit history traversal
//!
//! - `rev_list`: lazy, deduplicating walk from one or more commits to their roots
//!
//! ## Algorithm
//!
//! A FIFO work list seeded with the starting commits plus a visited set. Each
//! commit contributes at most its single parent, and the visited set stops
//! revisits, so the walk always terminates.

pub mod rev_list;
