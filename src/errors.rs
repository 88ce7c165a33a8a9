//! Classified repository failures
//!
//! Operations return `anyhow::Result`; the failures a caller may want to tell apart
//! are raised as a [`RepositoryError`] so they can be recovered with
//! `anyhow::Error::downcast_ref`. Plain I/O failures stay as `std::io::Error`
//! wrapped in context.

use crate::artifacts::objects::object_type::ObjectType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("object {oid} is a {actual}, expected a {expected}")]
    TypeMismatch {
        oid: String,
        expected: ObjectType,
        actual: ObjectType,
    },

    #[error("object {oid} is corrupt: {reason}")]
    CorruptObject { oid: String, reason: String },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid tree entry name: {0:?}")]
    InvalidTreeEntryName(String),

    #[error("unknown tree entry kind: {0}")]
    UnknownTreeEntryKind(String),

    #[error("malformed tree entry: {0:?}")]
    MalformedTreeEntry(String),

    #[error("unknown commit field: {0}")]
    UnknownCommitField(String),

    #[error("duplicate commit field: {0}")]
    DuplicateCommitField(String),

    #[error("malformed commit header line: {0:?}")]
    MalformedCommit(String),

    #[error("commit has no tree")]
    MissingCommitTree,

    #[error("unknown name: {0}")]
    UnknownName(String),

    #[error("invalid ref name: {0:?}")]
    InvalidRefName(String),
}
