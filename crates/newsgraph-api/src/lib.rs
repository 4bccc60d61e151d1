//! JSON REST API for the news fact graph.
//!
//! Exposes an axum [`Router`] backed by any
//! [`newsgraph_core::store::GraphStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", newsgraph_api::api_router(store.clone(), defaults))
//! ```

pub mod entities;
pub mod error;
pub mod news;
pub mod relations;

use std::sync::Arc;

use axum::Router;
use newsgraph_core::{page::PageDefaults, store::GraphStore, vocab::EntityKind};

pub use error::ApiError;

/// Shared handler state: the store plus the configured pagination defaults.
pub struct ApiState<S> {
  pub store:    Arc<S>,
  pub defaults: PageDefaults,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    ApiState {
      store:    Arc::clone(&self.store),
      defaults: self.defaults,
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// Each entity kind gets an identical CRUD/search/merge surface at its
/// plural path; News carries the fact and subgraph endpoints on top.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, defaults: PageDefaults) -> Router<()>
where
  S: GraphStore + 'static,
{
  let state = ApiState { store, defaults };
  let mut router = Router::new();
  for kind in EntityKind::ALL {
    router = router.nest(
      &format!("/{}/", kind.plural()),
      entities::kind_router::<S>(kind),
    );
  }
  router.nest("/news/", news::router::<S>()).with_state(state)
}
