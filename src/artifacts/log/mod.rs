//! Commit history stream
//!
//! `git log --all --full-history` reports one record per commit reachable
//! from any ref. The reader turns that byte stream into [`Commit`] values one
//! line at a time, so the history never has to fit in memory.
//!
//! No ordering beyond what git reports is assumed; merges in particular may
//! appear before or after the commits they join.
//!
//! [`Commit`]: crate::artifacts::objects::commit::Commit

pub mod commit_reader;
