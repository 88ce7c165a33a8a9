//! Database entry types
//!
//! Entries are the (object ID, kind) pairs a tree maps its names to.

pub mod database_entry;
