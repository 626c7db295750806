//! # entmap extension: scanner-index
//!
//! In-process type index implementing the discovery and resolution
//! protocols. Applications submit entity type records at startup; the
//! index answers namespace scans with marker filtering, and exact-name
//! resolution.

mod index;

pub use index::TypeIndex;
