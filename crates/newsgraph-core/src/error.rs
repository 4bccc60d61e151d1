//! Error types for `newsgraph-core`.
//!
//! Every variant here is a *validation* failure: the request was rejected
//! before any query was built or any mutation attempted. Conflict and
//! not-found conditions are expressed as empty results by the store and
//! mapped to user-facing signals by the caller.

use thiserror::Error;

use crate::vocab::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown entity type: {0:?}")]
  UnknownEntityType(String),

  #[error("unknown relation: {0:?}")]
  UnknownRelation(String),

  #[error("{0} cannot be the subject of a fact")]
  InvalidSubjectType(EntityKind),

  #[error("{0} cannot be the object of a fact")]
  InvalidObjectType(EntityKind),

  #[error("{0} cannot be the location of a fact")]
  InvalidLocationType(EntityKind),

  #[error("the time of a fact must have type Time, got {0:?}")]
  InvalidTimeType(String),

  #[error("subject and object cannot be the same entity: {0:?}")]
  SelfStatement(String),

  #[error("not a valid YYYY-MM-DD date: {0:?}")]
  InvalidDate(String),

  #[error("the search text is required")]
  MissingSearchText,

  #[error("entityID in the body ({body:?}) does not match the id in the path ({path:?})")]
  IdMismatch { path: String, body: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
