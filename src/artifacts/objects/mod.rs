//! Git object types consumed by the graph
//!
//! - **ObjectId**: validated 40-char SHA-1 hash
//! - **Commit**: one record of the `git log` stream
//! - **Tag**: annotated tag objects, read only to peel them to their commit
//! - **batch_check**: requests asking git which commit a ref target names

pub mod batch_check;
pub mod commit;
pub mod object_id;
pub mod tag;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
