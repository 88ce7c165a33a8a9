use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Replace the working directory with a commit's tree and point `HEAD` at it
    ///
    /// Uncommitted changes are discarded without warning.
    pub fn checkout(&self, commit_oid: &ObjectId) -> anyhow::Result<()> {
        let commit = self.get_commit(commit_oid)?;
        self.read_tree(commit.tree_oid())?;
        self.refs().update_head(commit_oid)?;

        tracing::debug!(commit = %commit_oid, "checked out");
        Ok(())
    }

    /// Resolve `name` first, so tags and `@` can be checked out too
    pub fn checkout_name(&self, name: &str) -> anyhow::Result<()> {
        let commit_oid = self.get_oid(name)?;
        self.checkout(&commit_oid)
    }
}
