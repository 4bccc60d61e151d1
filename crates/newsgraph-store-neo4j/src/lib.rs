//! Neo4j backend for the fact-graph store.
//!
//! Every query projects plain scalars and lists; nodes and relationships are
//! rebuilt client-side from those columns, which keeps decoding independent
//! of the driver's internal graph types.

mod serialize;
mod store;

pub mod error;
pub mod provision;

pub use error::{Error, Result};
pub use store::{Neo4jStore, StoreLimits};

#[cfg(test)]
mod tests;
