use crate::artifacts::branch::{HEADS_PREFIX, INVALID_REF_NAME_REGEX, TAGS_PREFIX};
use crate::errors::RepositoryError;
use anyhow::Context;

/// Validated ref name, relative to the metadata directory (`HEAD`, `refs/tags/v1`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RepositoryError::InvalidRefName(name).into());
        }

        let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
            .with_context(|| format!("invalid ref name regex: {INVALID_REF_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(RepositoryError::InvalidRefName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    pub fn head() -> Self {
        Self(crate::areas::refs::HEAD_REF_NAME.to_string())
    }

    pub fn tag(name: &str) -> anyhow::Result<Self> {
        Self::try_parse(format!("{TAGS_PREFIX}{name}"))
    }

    pub fn is_head(&self) -> bool {
        self.0 == crate::areas::refs::HEAD_REF_NAME
    }

    /// Name without its `refs/tags/` or `refs/heads/` namespace
    pub fn to_short_name(&self) -> &str {
        self.0
            .strip_prefix(TAGS_PREFIX)
            .or_else(|| self.0.strip_prefix(HEADS_PREFIX))
            .unwrap_or(&self.0)
    }

    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAGS_PREFIX)
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
