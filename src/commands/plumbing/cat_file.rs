use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use std::io::Write;

impl Repository {
    pub fn cat_file(&self, name: &str) -> anyhow::Result<()> {
        let object_id = self.get_oid(name)?;

        match self.database().parse_object(&object_id)? {
            // blobs are printed byte for byte
            ObjectBox::Blob(blob) => self.writer().write_all(blob.data())?,
            object => writeln!(self.writer(), "{}", object.display())?,
        }

        Ok(())
    }
}
