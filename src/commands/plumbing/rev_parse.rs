use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Resolve a tag, branch, `@`, ref path or full object ID
    pub fn get_oid(&self, name: &str) -> anyhow::Result<ObjectId> {
        Revision::new(name.to_string()).resolve(self.refs())
    }

    pub fn rev_parse(&self, name: &str) -> anyhow::Result<()> {
        let object_id = self.get_oid(name)?;
        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
