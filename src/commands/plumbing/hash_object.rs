use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Hash a file as a blob, storing it only when `write` is set
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let object_path = self.path().join(object_path);
        let object_data = std::fs::read(&object_path)
            .with_context(|| format!("Unable to read file {}", object_path.display()))?;
        let object = Blob::new(object_data.into());

        if write {
            self.database().store(&object)
        } else {
            object.object_id()
        }
    }
}
