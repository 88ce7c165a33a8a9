//! References (HEAD, tags, branch heads)
//!
//! References are human-readable names pointing at objects. They are plain
//! files below the metadata directory, each containing one 40-character object
//! ID followed by a newline:
//!
//! - `HEAD`: the currently checked-out commit
//! - `refs/tags/*`: tagged commits
//! - `refs/heads/*`: branch tips (read only in this tool)
//!
//! Refs are overwritten in place; no history or locking is kept.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.joegit`)
    path: Box<Path>,
}

impl Refs {
    /// Read the object ID a ref points to
    ///
    /// A missing ref, a directory in its place, or an empty ref file all read as `None`.
    pub fn read_ref(&self, name: &RefName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.ref_path(name);
        if !ref_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .with_context(|| format!("ref {name} holds an invalid object id"))
    }

    pub fn update_ref(&self, name: &RefName, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_path = self.ref_path(name);

        std::fs::create_dir_all(ref_path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                ref_path
            )
        })?)?;

        std::fs::write(&ref_path, format!("{oid}\n"))
            .with_context(|| format!("failed to write ref file at {:?}", ref_path))?;
        tracing::debug!(%name, %oid, "updated ref");

        Ok(())
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref(&RefName::head())
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref(&RefName::head(), oid)
    }

    /// List every ref stored below `refs/<namespace>`, sorted by name
    pub fn list_refs(&self, namespace: &str) -> anyhow::Result<Vec<RefName>> {
        let root = self.refs_path().join(namespace);
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut refs = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to list refs under {:?}", root))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(&self.path)
                .with_context(|| format!("ref {:?} outside of {:?}", entry.path(), self.path))?;
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            refs.push(RefName::try_parse(name)?);
        }

        Ok(refs)
    }

    /// Map every object pointed to by `HEAD` or a ref below `refs/` back to its names
    pub fn reverse_refs(&self) -> anyhow::Result<HashMap<ObjectId, Vec<RefName>>> {
        let all_refs = std::iter::once(RefName::head()).chain(self.list_refs("")?);

        let mut reverse_refs: HashMap<ObjectId, Vec<RefName>> = HashMap::new();
        for ref_name in all_refs {
            if let Some(oid) = self.read_ref(&ref_name)? {
                reverse_refs.entry(oid).or_default().push(ref_name);
            }
        }

        Ok(reverse_refs)
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.refs_path().join("tags")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    fn ref_path(&self, name: &RefName) -> PathBuf {
        self.path.join(name.as_ref())
    }
}
