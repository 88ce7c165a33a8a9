use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Lazy walk over commits and their ancestors
///
/// Seeds are queued in the order given (duplicates dropped) and parents are
/// appended as they are discovered, so a single seed yields its chain from
/// newest to root. Every reachable commit is yielded exactly once.
///
/// A commit ID is yielded before its object is read; its parent is looked up
/// on the following call to `next`. A failure to load a commit is yielded as
/// an error and ends the walk.
pub struct RevList<'d> {
    database: &'d Database,
    pending: VecDeque<ObjectId>,
    visited: HashSet<ObjectId>,
    /// Yielded commit whose parent has not been queued yet
    unexpanded: Option<ObjectId>,
    failed: bool,
}

impl<'d> RevList<'d> {
    pub fn new(database: &'d Database, seeds: impl IntoIterator<Item = ObjectId>) -> Self {
        let mut pending = VecDeque::new();
        for seed in seeds {
            if !pending.contains(&seed) {
                pending.push_back(seed);
            }
        }

        RevList {
            database,
            pending,
            visited: HashSet::new(),
            unexpanded: None,
            failed: false,
        }
    }

    fn expand(&mut self, oid: &ObjectId) -> anyhow::Result<()> {
        let commit = self.database.parse_object_as_commit(oid)?;
        if let Some(parent) = commit.parent() {
            self.pending.push_back(parent.clone());
        }

        Ok(())
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<ObjectId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(oid) = self.unexpanded.take()
            && let Err(e) = self.expand(&oid)
        {
            self.failed = true;
            return Some(Err(e));
        }

        while let Some(oid) = self.pending.pop_front() {
            if !self.visited.insert(oid.clone()) {
                continue;
            }

            tracing::trace!(%oid, "visiting commit");
            self.unexpanded = Some(oid.clone());
            return Some(Ok(oid));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit::Commit;
    use crate::artifacts::objects::object_type::ObjectType;
    use crate::errors::RepositoryError;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn database() -> (TempDir, Database) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let database = Database::new(dir.path().join("objects").into_boxed_path());
        (dir, database)
    }

    fn store_chain(database: &Database, length: usize) -> Vec<ObjectId> {
        let tree = database.put(ObjectType::Tree, b"").unwrap();
        let mut chain: Vec<ObjectId> = Vec::new();
        for i in 0..length {
            let commit = Commit::new(tree.clone(), chain.last().cloned(), format!("commit {i}"));
            chain.push(database.store(&commit).unwrap());
        }
        chain
    }

    #[rstest]
    fn walks_a_chain_from_newest_to_root(database: (TempDir, Database)) {
        let (_dir, database) = database;
        let chain = store_chain(&database, 5);

        let walked = RevList::new(&database, [chain[4].clone()])
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(walked, chain.iter().rev().cloned().collect::<Vec<_>>());
    }

    #[rstest]
    fn overlapping_seeds_yield_each_commit_once(database: (TempDir, Database)) {
        let (_dir, database) = database;
        let chain = store_chain(&database, 4);

        let walked = RevList::new(
            &database,
            [chain[3].clone(), chain[1].clone(), chain[3].clone()],
        )
        .collect::<anyhow::Result<Vec<_>>>()
        .unwrap();

        let mut sorted = walked.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), walked.len());
        assert_eq!(walked.len(), 4);
    }

    #[rstest]
    fn yields_before_loading(database: (TempDir, Database)) {
        let (_dir, database) = database;
        let missing = ObjectId::try_parse("f".repeat(40)).unwrap();

        let mut walk = RevList::new(&database, [missing.clone()]);

        assert_eq!(walk.next().unwrap().unwrap(), missing);
        let err = walk.next().unwrap().unwrap_err();
        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::ObjectNotFound(missing.to_string()))
        );
        assert!(walk.next().is_none());
    }

    #[rstest]
    fn no_seeds_yield_nothing(database: (TempDir, Database)) {
        let (_dir, database) = database;
        assert_eq!(RevList::new(&database, Vec::<ObjectId>::new()).count(), 0);
    }
}
