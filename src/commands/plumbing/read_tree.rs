use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    /// Replace the working directory with the content of a tree
    ///
    /// The whole tree is flattened before anything is removed, so a missing or
    /// malformed tree leaves the working directory untouched. Paths that would
    /// land inside the metadata directory are never written.
    pub fn read_tree(&self, tree_oid: &ObjectId) -> anyhow::Result<()> {
        let files = self.get_tree(Some(tree_oid), "")?;

        self.workspace().empty()?;

        for (path, oid) in &files {
            let path = Path::new(path);
            if Workspace::is_ignored(path) {
                tracing::warn!(path = %path.display(), "refusing to overwrite metadata");
                continue;
            }

            let blob = self.database().parse_object_as_blob(oid)?;
            self.workspace().write_file(path, blob.data())?;
        }

        tracing::debug!(tree = %tree_oid, files = files.len(), "read tree into workspace");
        Ok(())
    }
}
