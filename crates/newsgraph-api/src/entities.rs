//! Handlers for the per-kind entity endpoints.
//!
//! Every kind exposes the same surface at its plural path:
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/{plural}/` | Paginated by `?start`/`?limit` |
//! | `POST`   | `/{plural}/` | 400 if the id already exists |
//! | `GET`    | `/{plural}/:id` | 404 if not found |
//! | `PUT`    | `/{plural}/:id` | Body id must match the path id |
//! | `DELETE` | `/{plural}/:id` | 400 while any Fact references it |
//! | `POST`   | `/{plural}/search` | Ranked full-text, paginated |
//! | `POST`   | `/{plural}/merge_nodes` | Collapse same-kind nodes |

use axum::{
  extract::{OriginalUri, Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  routing::{get, post},
  Extension, Json, Router,
};
use newsgraph_core::{
  entity::{Entity, EntityInput, SearchHit},
  page::{Page, PageParams, PageWindow},
  store::GraphStore,
  vocab::EntityKind,
};
use serde::Deserialize;

use crate::{error::ApiError, ApiState};

pub fn kind_router<S>(kind: EntityKind) -> Router<ApiState<S>>
where
  S: GraphStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route(
      "/{id}",
      get(get_one::<S>).put(update::<S>).delete(delete_one::<S>),
    )
    .route("/search", post(search::<S>))
    .route("/merge_nodes", post(merge::<S>))
    .layer(Extension(kind))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /{plural}/?start=<n>&limit=<n>`
pub async fn list<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  OriginalUri(uri): OriginalUri,
  Query(params): Query<PageParams>,
) -> Result<Json<Page<Entity>>, ApiError> {
  let window = PageWindow::resolve(params, state.defaults);
  let entities = state
    .store
    .list_entities(kind, window.start, window.limit)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Page::assemble(entities, window, uri.path())))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /{plural}/` — body: `{"entityID": …, "name": …, "des": …}`
pub async fn create<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  Json(input): Json<EntityInput>,
) -> Result<impl IntoResponse, ApiError> {
  input.validate_for(kind)?;
  let existing = state
    .store
    .get_entity(kind, &input.entity_id)
    .await
    .map_err(ApiError::store)?;
  if existing.is_some() {
    return Err(ApiError::Conflict(format!(
      "a {kind} with this entityID already exists"
    )));
  }
  let entity = state
    .store
    .create_entity(kind, &input)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(entity)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /{plural}/:id`
pub async fn get_one<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  Path(id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
  let entity = state
    .store
    .get_entity(kind, &id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("this {kind} does not exist")))?;
  Ok(Json(entity))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /{plural}/:id` — full replace; the body's entityID must equal the
/// path id.
pub async fn update<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  Path(id): Path<String>,
  Json(input): Json<EntityInput>,
) -> Result<Json<Entity>, ApiError> {
  if input.entity_id != id {
    return Err(newsgraph_core::Error::IdMismatch {
      path: id,
      body: input.entity_id,
    }
    .into());
  }
  input.validate_for(kind)?;
  let entity = state
    .store
    .update_entity(kind, &id, &input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("this {kind} does not exist")))?;
  Ok(Json(entity))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /{plural}/:id` — rejected while any Fact references the entity.
pub async fn delete_one<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let referenced = state
    .store
    .entity_is_referenced(kind, &id)
    .await
    .map_err(ApiError::store)?;
  if referenced {
    return Err(ApiError::Conflict(format!(
      "unable to delete because this {kind} is being referenced"
    )));
  }
  state
    .store
    .delete_entity(kind, &id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(serde_json::json!({ "message": "Successful" })))
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub text: Option<String>,
}

/// `POST /{plural}/search?start=<n>&limit=<n>` — body: `{"text": …}`,
/// mandatory.
pub async fn search<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  OriginalUri(uri): OriginalUri,
  Query(params): Query<PageParams>,
  Json(body): Json<SearchBody>,
) -> Result<Json<Page<SearchHit>>, ApiError> {
  let text = body.text.ok_or(newsgraph_core::Error::MissingSearchText)?;
  let window = PageWindow::resolve(params, state.defaults);
  let hits = state
    .store
    .search_entities(kind, &text, window.start, window.limit)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Page::assemble(hits, window, uri.path())))
}

// ─── Merge ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MergeBody {
  pub set_entity_id: Vec<String>,
}

/// `POST /{plural}/merge_nodes` — body: `{"set_entity_id": […]}`.
///
/// Keeps one entityID and combines the remaining properties and all incident
/// relationships onto the surviving node.
pub async fn merge<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Extension(kind): Extension<EntityKind>,
  Json(body): Json<MergeBody>,
) -> Result<Json<Entity>, ApiError> {
  let merged = state
    .store
    .merge_entities(kind, &body.set_entity_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| {
      ApiError::NotFound(format!("none of the supplied ids is a {kind}"))
    })?;
  Ok(Json(merged))
}
