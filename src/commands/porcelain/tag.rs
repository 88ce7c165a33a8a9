use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

const TAGS_NAMESPACE: &str = "tags";

impl Repository {
    /// Point `refs/tags/<name>` at `oid`, replacing any previous target
    pub fn create_tag(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_name = RefName::tag(name)?;
        self.refs().update_ref(&ref_name, oid)?;

        tracing::debug!(%ref_name, %oid, "tagged");
        Ok(())
    }

    /// Tag the object `target` resolves to (`@` when omitted), or list tags when
    /// no name is given
    pub fn tag(&self, name: Option<&str>, target: Option<&str>) -> anyhow::Result<()> {
        let Some(name) = name else {
            return self.list_tags();
        };

        let oid = self.get_oid(target.unwrap_or("@"))?;
        self.create_tag(name, &oid)
    }

    pub fn list_tags(&self) -> anyhow::Result<()> {
        for tag in self.refs().list_refs(TAGS_NAMESPACE)? {
            writeln!(self.writer(), "{}", tag.to_short_name())?;
        }

        Ok(())
    }
}
