//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees) along with their names.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry is a text line: `<blob|tree> <40-hex-oid> <name>\n`
//!
//! Entries are always kept sorted by name, so two directories with the same
//! content serialize (and therefore hash) identically regardless of the order
//! in which their entries were discovered.

use crate::artifacts::database::database_entry::{DatabaseEntry, EntryKind};
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    /// Reject names that could escape or alias a directory once materialized
    pub fn validate_entry_name(name: &str) -> anyhow::Result<()> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\n']) {
            return Err(RepositoryError::InvalidTreeEntryName(name.to_string()).into());
        }

        Ok(())
    }

    pub fn add_entry(&mut self, name: impl Into<String>, entry: DatabaseEntry) -> anyhow::Result<()> {
        let name = name.into();
        Self::validate_entry_name(&name)?;
        self.entries.insert(name, entry);

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.entries.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn parse_entry(line: &str) -> anyhow::Result<(String, DatabaseEntry)> {
        let mut parts = line.splitn(3, ' ');
        let (Some(kind), Some(oid), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(RepositoryError::MalformedTreeEntry(line.to_string()).into());
        };

        Self::validate_entry_name(name)?;
        let kind = EntryKind::try_from(kind)?;
        let oid = ObjectId::try_parse(oid.to_string())?;

        Ok((name.to_string(), DatabaseEntry::new(oid, kind)))
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = self
            .entries
            .iter()
            .map(|(name, entry)| format!("{} {} {}\n", entry.kind.as_str(), entry.oid, name))
            .collect::<String>();

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("tree payload is not valid UTF-8")?;

        let mut tree = Tree::default();
        for line in content.split_terminator('\n') {
            let (name, entry) = Self::parse_entry(line)?;
            tree.entries.insert(name, entry);
        }

        Ok(tree)
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(name, entry)| format!("{} {}\t{}", entry.kind.as_str(), entry.oid, name))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
