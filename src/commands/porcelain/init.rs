use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata layout; running it again on an existing repository
    /// keeps every object and ref
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .joegit/objects directory")?;

        fs::create_dir_all(self.refs().tags_path())
            .context("Failed to create .joegit/refs/tags directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .joegit/refs/heads directory")?;

        tracing::debug!(path = %self.metadata_path().display(), "initialized metadata");
        writeln!(
            self.writer(),
            "Initialized empty joegit repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
