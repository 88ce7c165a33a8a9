use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Lazily walk the given commits and every ancestor, each exactly once
    pub fn iter_commits_and_parents(
        &self,
        seeds: impl IntoIterator<Item = ObjectId>,
    ) -> RevList<'_> {
        RevList::new(self.database(), seeds)
    }

    /// Print the history starting at `name` (`@` when omitted)
    pub fn log(&self, name: Option<&str>) -> anyhow::Result<()> {
        let start = self.get_oid(name.unwrap_or("@"))?;
        let reverse_refs = self.refs().reverse_refs()?;

        for commit_oid in self.iter_commits_and_parents([start]) {
            let commit_oid = commit_oid?;
            let commit = self.get_commit(&commit_oid)?;

            writeln!(
                self.writer(),
                "{} {}{}",
                "commit".yellow(),
                commit_oid.to_string().yellow(),
                Self::decoration(reverse_refs.get(&commit_oid))
            )?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {message_line}")?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }

    fn decoration(ref_names: Option<&Vec<RefName>>) -> String {
        let Some(ref_names) = ref_names else {
            return String::new();
        };

        let names = ref_names
            .iter()
            .map(|ref_name| {
                if ref_name.is_head() {
                    ref_name.to_string().cyan().bold().to_string()
                } else if ref_name.is_tag() {
                    format!("tag: {}", ref_name.to_short_name())
                        .yellow()
                        .bold()
                        .to_string()
                } else {
                    ref_name.to_short_name().green().bold().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(" ({names})")
    }
}
