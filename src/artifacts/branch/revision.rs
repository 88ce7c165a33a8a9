use crate::areas::refs::{HEAD_REF_NAME, Refs};
use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;

/// A human-friendly name for an object.
///
/// Supported forms, tried in this order:
/// - Aliases: `@` (resolves as `HEAD`)
/// - Ref names: the literal name (only `HEAD` or a path below `refs/`), then
///   `refs/<name>`, `refs/tags/<name>` and `refs/heads/<name>`; the first ref
///   holding a value wins
/// - Full OIDs: 40 hexadecimal characters, used as-is when no ref matched
///
/// Because refs are tried first, a ref that happens to be named with 40 hex
/// characters shadows the object ID of the same spelling. A literal OID is not
/// checked against the object database here; a missing object only surfaces
/// when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Revision {
    name: String,
}

impl Revision {
    pub fn resolve(&self, refs: &Refs) -> anyhow::Result<ObjectId> {
        let name = REF_ALIASES
            .get(self.name.as_str())
            .copied()
            .unwrap_or(self.name.as_str());

        for candidate in Self::ref_candidates(name).into_iter().flatten() {
            // a name that cannot be a ref simply does not match one
            let Ok(ref_name) = RefName::try_parse(candidate) else {
                continue;
            };

            if let Some(oid) = refs.read_ref(&ref_name)? {
                tracing::trace!(name = %self.name, %ref_name, %oid, "resolved through ref");
                return Ok(oid);
            }
        }

        if ObjectId::is_full_hex(name) {
            return ObjectId::try_parse(name.to_string());
        }

        Err(RepositoryError::UnknownName(self.name.clone()).into())
    }

    /// Other files in the metadata directory (objects, scratch files) are never refs
    fn ref_candidates(name: &str) -> [Option<String>; 4] {
        let literal =
            (name == HEAD_REF_NAME || name.starts_with("refs/")).then(|| name.to_string());

        [
            literal,
            Some(format!("refs/{name}")),
            Some(format!("refs/tags/{name}")),
            Some(format!("refs/heads/{name}")),
        ]
    }
}
