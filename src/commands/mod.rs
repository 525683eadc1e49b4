//! Command implementations
//!
//! Commands are implemented as methods on
//! [`Repository`](crate::areas::repository::Repository) and compose the data
//! sources in `areas` with the renderers in `artifacts`.

pub mod porcelain;
