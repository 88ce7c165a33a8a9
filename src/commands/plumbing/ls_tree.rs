use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::io::Write;

impl Repository {
    /// Flatten a tree into a map from slash-separated path to blob ID
    ///
    /// Every key starts with `prefix`; subtrees are expanded with their name
    /// followed by `/`. Passing `None` yields an empty map.
    pub fn get_tree(
        &self,
        tree_oid: Option<&ObjectId>,
        prefix: &str,
    ) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let mut files = BTreeMap::new();
        let Some(tree_oid) = tree_oid else {
            return Ok(files);
        };

        let mut pending = vec![(tree_oid.clone(), prefix.to_string())];
        while let Some((oid, prefix)) = pending.pop() {
            let tree = self.database().parse_object_as_tree(&oid)?;

            for (name, entry) in tree.into_entries() {
                let path = format!("{prefix}{name}");
                if entry.is_tree() {
                    pending.push((entry.oid, format!("{path}/")));
                } else {
                    files.insert(path, entry.oid);
                }
            }
        }

        Ok(files)
    }

    /// Print every blob reachable from a tree (or a commit's tree)
    pub fn ls_tree(&self, name: &str) -> anyhow::Result<()> {
        let object_id = self.get_oid(name)?;
        let tree_oid = match self.database().parse_object(&object_id)? {
            ObjectBox::Commit(commit) => commit.tree_oid().clone(),
            _ => object_id,
        };

        for (path, oid) in self.get_tree(Some(&tree_oid), "")? {
            writeln!(self.writer(), "blob {oid}\t{path}")?;
        }

        Ok(())
    }
}
