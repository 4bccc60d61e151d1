//! Handlers for the subgraph and appearance-count endpoints under `/news`.
//!
//! Single-News variants are `GET` with path parameters; set-scoped variants
//! are `POST` and take the News-id set in the body, deduped and capped by
//! the store.

use axum::{
  extract::{Path, State},
  routing::{get, post},
  Json, Router,
};
use newsgraph_core::{
  envelope::GraphEnvelope, store::GraphStore, vocab::EntityKind,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, ApiState};

pub fn routes<S>() -> Router<ApiState<S>>
where
  S: GraphStore + 'static,
{
  Router::new()
    .route("/{news_id}/relations", get(news_relations::<S>))
    .route("/relations", post(news_set_relations::<S>))
    .route("/{news_id}/type/relations", post(news_relations_of_kinds::<S>))
    .route("/type/relations", post(news_set_relations_of_kinds::<S>))
    .route(
      "/{news_id}/entity/{entity_id}/relations",
      get(entity_relations::<S>),
    )
    .route(
      "/entity/{entity_id}/relations",
      post(entity_set_relations::<S>),
    )
    .route("/{news_id}/appearance/{entity_id}", get(appearance::<S>))
    .route("/appearance/{entity_id}", post(set_appearance::<S>))
}

#[derive(Debug, Deserialize)]
pub struct NewsSetBody {
  pub set_news_id: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypesBody {
  pub set_entity_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypesNewsSetBody {
  pub set_news_id:      Vec<String>,
  pub set_entity_types: Vec<String>,
}

fn parse_kinds(tokens: &[String]) -> Result<Vec<EntityKind>, ApiError> {
  tokens
    .iter()
    .map(|t| EntityKind::parse(t).map_err(ApiError::from))
    .collect()
}

// ─── Subgraphs ───────────────────────────────────────────────────────────────

/// `GET /news/:news_id/relations` — the News item's whole fact subgraph.
pub async fn news_relations<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(news_id): Path<String>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let envelope = state
    .store
    .news_relations(&news_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

/// `POST /news/relations` — body: `{"set_news_id": […]}`.
pub async fn news_set_relations<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<NewsSetBody>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let envelope = state
    .store
    .news_set_relations(&body.set_news_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

/// `POST /news/:news_id/type/relations` — body:
/// `{"set_entity_types": […]}`; unknown types fail closed.
pub async fn news_relations_of_kinds<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(news_id): Path<String>,
  Json(body): Json<TypesBody>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let kinds = parse_kinds(&body.set_entity_types)?;
  let envelope = state
    .store
    .news_relations_of_kinds(&news_id, &kinds)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

/// `POST /news/type/relations` — body:
/// `{"set_news_id": […], "set_entity_types": […]}`.
pub async fn news_set_relations_of_kinds<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<TypesNewsSetBody>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let kinds = parse_kinds(&body.set_entity_types)?;
  let envelope = state
    .store
    .news_set_relations_of_kinds(&body.set_news_id, &kinds)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

/// `GET /news/:news_id/entity/:entity_id/relations` — the facts of one News
/// item that touch one entity, expanded to their full edge sets.
pub async fn entity_relations<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path((news_id, entity_id)): Path<(String, String)>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let envelope = state
    .store
    .entity_relations_in_news(&news_id, &entity_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

/// `POST /news/entity/:entity_id/relations` — body: `{"set_news_id": […]}`.
pub async fn entity_set_relations<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(entity_id): Path<String>,
  Json(body): Json<NewsSetBody>,
) -> Result<Json<GraphEnvelope>, ApiError> {
  let envelope = state
    .store
    .entity_relations_in_news_set(&body.set_news_id, &entity_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(envelope))
}

// ─── Appearance counts ───────────────────────────────────────────────────────

/// `GET /news/:news_id/appearance/:entity_id`
pub async fn appearance<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path((news_id, entity_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let count = state
    .store
    .appearance_in_news(&news_id, &entity_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "numberAppearance": count })))
}

/// `POST /news/appearance/:entity_id` — body: `{"set_news_id": […]}`.
pub async fn set_appearance<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(entity_id): Path<String>,
  Json(body): Json<NewsSetBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let count = state
    .store
    .appearance_in_news_set(&body.set_news_id, &entity_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "numberAppearance": count })))
}
