//! Commit object
//!
//! Commits represent snapshots of the working directory at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - At most one parent commit ID (for history)
//! - A free-text message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Parent commit ID (None for the root commit)
    parent: Option<ObjectId>,
    message: String,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = format!("tree {}\n", self.tree_oid);
        if let Some(parent) = &self.parent {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push('\n');
        content.push_str(&self.message);
        content.push('\n');

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("commit payload is not valid UTF-8")?;

        let mut lines = content.lines();
        let mut tree_oid = None;
        let mut parent = None;

        // the header ends at the first blank line, everything after it is the message
        for line in lines.by_ref().take_while(|line| !line.is_empty()) {
            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| RepositoryError::MalformedCommit(line.to_string()))?;

            let slot = match key {
                "tree" => &mut tree_oid,
                "parent" => &mut parent,
                _ => return Err(RepositoryError::UnknownCommitField(key.to_string()).into()),
            };
            if slot.is_some() {
                return Err(RepositoryError::DuplicateCommitField(key.to_string()).into());
            }
            *slot = Some(ObjectId::try_parse(value.to_string())?);
        }

        let tree_oid = tree_oid.ok_or(RepositoryError::MissingCommitTree)?;
        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Self::new(tree_oid, parent, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
