use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Snapshot the working directory on top of `HEAD` and move `HEAD` to it
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        let tree_oid = self.write_tree()?;
        let parent = self.refs().read_head()?;

        let commit = Commit::new(tree_oid, parent, message.to_string());
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_head(&commit_oid)?;

        tracing::debug!(
            commit = %commit_oid.to_short_oid(),
            root = commit.parent().is_none(),
            subject = commit.short_message(),
            "created commit"
        );
        Ok(commit_oid)
    }

    pub fn get_commit(&self, commit_oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database().parse_object_as_commit(commit_oid)
    }

    pub fn print_commit(&self, message: &str) -> anyhow::Result<()> {
        let commit_oid = self.commit(message)?;
        writeln!(self.writer(), "{commit_oid}")?;

        Ok(())
    }
}
