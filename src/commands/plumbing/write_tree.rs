use crate::areas::repository::Repository;
use crate::areas::workspace::WorkspaceEntry;
use crate::artifacts::database::database_entry::{DatabaseEntry, EntryKind};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// A directory whose tree is still being filled
#[derive(new)]
struct PendingTree {
    /// Entry name inside the parent directory (empty for the root)
    name: String,
    remaining: Vec<WorkspaceEntry>,
    #[new(default)]
    tree: Tree,
}

impl Repository {
    /// Snapshot the whole working directory and return the root tree ID
    pub fn write_tree(&self) -> anyhow::Result<ObjectId> {
        self.write_tree_at(Path::new(""))
    }

    /// Store every non-ignored file below `directory` as a blob and every
    /// directory as a tree, children before parents
    ///
    /// Directories are tracked on an explicit stack, so nesting depth is not
    /// limited by the call stack.
    pub fn write_tree_at(&self, directory: &Path) -> anyhow::Result<ObjectId> {
        let root = PendingTree::new(String::new(), self.workspace().list_dir(directory)?);
        let mut stack = vec![root];

        while let Some(mut pending) = stack.pop() {
            if let Some(entry) = pending.remaining.pop() {
                match entry.kind {
                    EntryKind::Blob => {
                        let data = self.workspace().read_file(&entry.path)?;
                        let oid = self.database().put(ObjectType::Blob, &data)?;
                        pending
                            .tree
                            .add_entry(entry.name, DatabaseEntry::new(oid, EntryKind::Blob))?;
                        stack.push(pending);
                    }
                    EntryKind::Tree => {
                        let child =
                            PendingTree::new(entry.name, self.workspace().list_dir(&entry.path)?);
                        stack.push(pending);
                        stack.push(child);
                    }
                }
                continue;
            }

            let oid = self.database().store(&pending.tree)?;
            match stack.last_mut() {
                Some(parent) => parent
                    .tree
                    .add_entry(pending.name, DatabaseEntry::new(oid, EntryKind::Tree))?,
                None => {
                    tracing::debug!(tree = %oid, entries = pending.tree.len(), "wrote tree");
                    return Ok(oid);
                }
            }
        }

        unreachable!("the root directory is always the last tree stored")
    }

    pub fn print_write_tree(&self) -> anyhow::Result<()> {
        let tree_oid = self.write_tree()?;
        writeln!(self.writer(), "{tree_oid}")?;

        Ok(())
    }
}
