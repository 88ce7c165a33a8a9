use crate::METADATA_DIR;
use crate::artifacts::database::database_entry::EntryKind;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A non-ignored file or directory directly inside a workspace directory
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WorkspaceEntry {
    pub name: String,
    /// Path relative to the workspace root
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Whether any segment of `path` is the metadata directory
    pub fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            matches!(component, Component::Normal(name) if name == METADATA_DIR)
        })
    }

    /// List the immediate, non-ignored entries of `dir_path` (relative to the root)
    ///
    /// Entries are classified without following symbolic links; anything that is
    /// neither a regular file nor a directory (symlinks, sockets, ...) is skipped.
    pub fn list_dir(&self, dir_path: &Path) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let full_path = self.path.join(dir_path);
        let read_dir = std::fs::read_dir(&full_path)
            .with_context(|| format!("Unable to list directory {}", full_path.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry
                .with_context(|| format!("Unable to list directory {}", full_path.display()))?;
            let relative_path = dir_path.join(entry.file_name());
            if Self::is_ignored(&relative_path) {
                continue;
            }

            // DirEntry::file_type does not traverse symlinks
            let file_type = entry
                .file_type()
                .with_context(|| format!("Unable to stat {}", relative_path.display()))?;
            let kind = if file_type.is_file() {
                EntryKind::Blob
            } else if file_type.is_dir() {
                EntryKind::Tree
            } else {
                tracing::trace!(path = %relative_path.display(), "skipping special file");
                continue;
            };

            let name = entry.file_name().into_string().map_err(|name| {
                RepositoryError::InvalidTreeEntryName(name.to_string_lossy().into_owned())
            })?;
            entries.push(WorkspaceEntry::new(name, relative_path, kind));
        }

        Ok(entries)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(content.into())
    }

    /// Write `data` to `file_path`, creating missing parent directories and
    /// replacing any existing content
    ///
    /// A symbolic link at the target or at any ancestor inside the workspace is
    /// removed first, so the write never lands outside the working directory.
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        let mut ancestors = file_path.ancestors().collect::<Vec<_>>();
        ancestors.reverse();
        for ancestor in ancestors.iter().filter(|a| !a.as_os_str().is_empty()) {
            self.unlink_symlink(ancestor)?;
        }

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&full_path, data)
            .with_context(|| format!("Unable to write file {}", full_path.display()))
    }

    /// Remove every non-ignored regular file and directory below the root
    ///
    /// The walk is bottom-up so directories are only removed after their
    /// contents. A directory still holding ignored (or skipped special) entries
    /// cannot be removed and is left in place; every other failure propagates.
    pub fn empty(&self) -> anyhow::Result<()> {
        let mut removed_files = 0usize;

        for entry in WalkDir::new(&self.path).min_depth(1).contents_first(true) {
            let entry = entry
                .with_context(|| format!("Unable to walk workspace {}", self.path.display()))?;
            let relative_path = entry
                .path()
                .strip_prefix(&self.path)
                .with_context(|| format!("{} is outside the workspace", entry.path().display()))?;
            if Self::is_ignored(relative_path) {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_file() {
                std::fs::remove_file(entry.path()).with_context(|| {
                    format!("Unable to remove file {}", relative_path.display())
                })?;
                removed_files += 1;
            } else if file_type.is_dir() {
                Self::remove_directory(entry.path())?;
            }
        }

        tracing::debug!(removed_files, root = %self.path.display(), "emptied workspace");
        Ok(())
    }

    fn unlink_symlink(&self, relative_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(relative_path);
        let Ok(metadata) = std::fs::symlink_metadata(&full_path) else {
            return Ok(());
        };

        if metadata.file_type().is_symlink() {
            tracing::debug!(path = %relative_path.display(), "replacing symbolic link");
            std::fs::remove_file(&full_path).with_context(|| {
                format!("Unable to remove symbolic link {}", relative_path.display())
            })?;
        }

        Ok(())
    }

    fn remove_directory(dir_path: &Path) -> anyhow::Result<()> {
        match std::fs::remove_dir(dir_path) {
            Ok(()) => Ok(()),
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::DirectoryNotEmpty | std::io::ErrorKind::NotFound
                ) =>
            {
                tracing::trace!(path = %dir_path.display(), "keeping non-empty directory");
                Ok(())
            }
            Err(e) => Err(e)
                .with_context(|| format!("Unable to remove directory {}", dir_path.display())),
        }
    }
}
