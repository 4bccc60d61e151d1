//! Core types and trait definitions for the Newsgraph fact store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entity;
pub mod envelope;
pub mod error;
pub mod fact;
pub mod news;
pub mod page;
pub mod store;
pub mod vocab;

pub use error::{Error, Result};
