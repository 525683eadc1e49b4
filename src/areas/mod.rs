//! Repository data sources
//!
//! - `repository`: the working copy, its output sink and the precondition check
//! - `git`: runs the `git` executable
//! - `refs`: resolves refs through `git show-ref` or the on-disk ref stores
//! - `history`: lazy commit stream from `git log`

pub mod git;
pub mod history;
pub mod refs;
pub mod repository;
