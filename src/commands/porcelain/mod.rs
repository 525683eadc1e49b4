//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `visualize`: resolve refs, stream history and write the dot graph

pub mod visualize;
