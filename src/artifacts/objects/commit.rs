//! Commit records as reported by `git log`
//!
//! Each commit arrives as one line holding five fields separated by the ASCII
//! unit separator (`0x1f`):
//!
//! ```text
//! <hash> 0x1f <parent hashes> 0x1f <author name> <author email> 0x1f <date> 0x1f <subject>
//! ```
//!
//! The subject is the last field, so any stray separator inside it stays part
//! of the subject instead of shifting the other fields.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

/// Field separator used in [`LOG_FORMAT`]
pub const FIELD_DELIMITER: char = '\x1f';

/// Number of fields in a single log record
pub const FIELD_COUNT: usize = 5;

/// Pretty format handed to `git log --format`
pub const LOG_FORMAT: &str = "%H%x1f%P%x1f%an %ae%x1f%aD (%ar)%x1f%s";

/// A single commit from the history stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    author: String,
    date: String,
    subject: String,
}

impl Commit {
    /// Parse one log record
    ///
    /// # Errors
    ///
    /// Fails when the line has fewer than five fields or when the commit or a
    /// parent hash is not a valid object ID.
    pub fn parse_record(line: &str) -> anyhow::Result<Self> {
        let fields = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect::<Vec<_>>();

        let [hash, parents, author, date, subject] = fields.as_slice() else {
            anyhow::bail!(
                "expected {} fields in log record, got {}",
                FIELD_COUNT,
                fields.len()
            );
        };

        let oid = ObjectId::try_parse(hash.trim().to_string())
            .with_context(|| format!("invalid commit hash in log record: {hash:?}"))?;
        let parents = parents
            .split_whitespace()
            .map(|parent| ObjectId::try_parse(parent.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("invalid parent list for commit {oid}"))?;

        Ok(Commit {
            oid,
            parents,
            author: author.to_string(),
            date: date.to_string(),
            subject: subject.to_string(),
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(fields: &[&str]) -> String {
        fields.join(FIELD_DELIMITER.to_string().as_str())
    }

    #[test]
    fn parses_root_commit() {
        let hash = "a".repeat(40);
        let line = record(&[
            &hash,
            "",
            "Jane Doe jane@example.com",
            "Sun, 1 Jan 2023 12:00:00 +0000 (3 years ago)",
            "init",
        ]);

        let commit = Commit::parse_record(&line).unwrap();

        assert_eq!(commit.oid().as_ref(), hash);
        assert!(commit.parents().is_empty());
        assert!(!commit.is_merge());
        assert_eq!(commit.author(), "Jane Doe jane@example.com");
        assert_eq!(commit.date(), "Sun, 1 Jan 2023 12:00:00 +0000 (3 years ago)");
        assert_eq!(commit.subject(), "init");
    }

    #[test]
    fn keeps_parent_order_for_merges() {
        let (a, b, c) = ("a".repeat(40), "b".repeat(40), "c".repeat(40));
        let parents = format!("{b} {c}");
        let line = record(&[&a, &parents, "x y", "now", "Merge branch 'topic'"]);

        let commit = Commit::parse_record(&line).unwrap();

        assert!(commit.is_merge());
        assert_eq!(
            commit
                .parents()
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>(),
            vec![b.as_str(), c.as_str()]
        );
    }

    #[test]
    fn subject_absorbs_extra_delimiters() {
        let hash = "d".repeat(40);
        let subject = format!("weird{FIELD_DELIMITER}subject|with|pipes");
        let line = record(&[&hash, "", "x y", "now", &subject]);

        let commit = Commit::parse_record(&line).unwrap();

        assert_eq!(commit.subject(), subject);
    }

    #[rstest]
    #[case::empty("")]
    #[case::too_few_fields("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\x1f\x1fname")]
    #[case::pipe_delimited("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa||a b|now|subject")]
    #[case::bad_hash("nothex\x1f\x1fa b\x1fnow\x1fsubject")]
    #[case::bad_parent("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\x1fbeef\x1fa b\x1fnow\x1fsubject")]
    fn rejects_malformed_records(#[case] line: &str) {
        assert!(Commit::parse_record(line).is_err());
    }
}
