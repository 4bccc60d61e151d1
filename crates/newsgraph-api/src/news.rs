//! Handlers for `/news` CRUD, fact management, search, and merge.
//!
//! The subgraph and appearance-count endpoints live in
//! [`relations`](crate::relations); this module carries everything that
//! reads or writes News and Fact nodes directly.

use axum::{
  extract::{OriginalUri, Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  routing::{get, post},
  Json, Router,
};
use newsgraph_core::{
  entity::Entity,
  fact::{FactDetail, FactInput},
  news::News,
  page::{Page, PageParams, PageWindow},
  store::GraphStore,
  vocab::EntityKind,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, relations, ApiState};

pub fn router<S>() -> Router<ApiState<S>>
where
  S: GraphStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route(
      "/{news_id}",
      get(get_one::<S>).put(update::<S>).delete(delete_one::<S>),
    )
    .route(
      "/{news_id}/facts",
      get(detailed_facts::<S>).post(create_fact::<S>),
    )
    .route("/{news_id}/facts/{fact_id}", axum::routing::delete(delete_fact::<S>))
    .route("/search", post(search::<S>))
    .route("/entity/search", post(search_typed::<S>))
    .route("/merge_nodes", post(merge::<S>))
    .merge(relations::routes::<S>())
}

// ─── CRUD ────────────────────────────────────────────────────────────────────

/// `GET /news/?start=<n>&limit=<n>`
pub async fn list<S: GraphStore>(
  State(state): State<ApiState<S>>,
  OriginalUri(uri): OriginalUri,
  Query(params): Query<PageParams>,
) -> Result<Json<Page<News>>, ApiError> {
  let window = PageWindow::resolve(params, state.defaults);
  let items = state
    .store
    .list_news(window.start, window.limit)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Page::assemble(items, window, uri.path())))
}

/// `POST /news/` — body: `{"entityID": …, "link": …, "topics": […]}`
pub async fn create<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Json(news): Json<News>,
) -> Result<impl IntoResponse, ApiError> {
  let existing = state
    .store
    .get_news(&news.entity_id)
    .await
    .map_err(ApiError::store)?;
  if existing.is_some() {
    return Err(ApiError::Conflict(
      "a news with this entityID already exists".to_owned(),
    ));
  }
  let created = state
    .store
    .create_news(&news)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /news/:id`
pub async fn get_one<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<News>, ApiError> {
  let news = state
    .store
    .get_news(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("this news does not exist".to_owned()))?;
  Ok(Json(news))
}

/// `PUT /news/:id` — the body's entityID must equal the path id.
pub async fn update<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  Json(news): Json<News>,
) -> Result<Json<News>, ApiError> {
  if news.entity_id != id {
    return Err(newsgraph_core::Error::IdMismatch {
      path: id,
      body: news.entity_id,
    }
    .into());
  }
  let updated = state
    .store
    .update_news(&id, &news)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("this news does not exist".to_owned()))?;
  Ok(Json(updated))
}

/// `DELETE /news/:id` — cascades to the owned Facts, never to entities.
pub async fn delete_one<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
  state.store.delete_news(&id).await.map_err(ApiError::store)?;
  Ok(Json(json!({ "message": "Successful" })))
}

// ─── Facts ───────────────────────────────────────────────────────────────────

/// `GET /news/:news_id/facts` — every owned Fact flattened to its id slots.
pub async fn detailed_facts<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(news_id): Path<String>,
) -> Result<Json<Vec<FactDetail>>, ApiError> {
  let facts = state
    .store
    .detailed_facts(&news_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(facts))
}

/// `POST /news/:news_id/facts` — validate, pre-check the fact id, then
/// create the hyper-edge in one statement.
pub async fn create_fact<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path(news_id): Path<String>,
  Json(input): Json<FactInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let spec = input.validate()?;
  let exists = state
    .store
    .fact_exists(&spec.entity_id)
    .await
    .map_err(ApiError::store)?;
  if exists {
    return Err(ApiError::Conflict(
      "a fact with this entityID already exists".to_owned(),
    ));
  }
  let fact_id = state
    .store
    .create_fact(&news_id, &spec)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| {
      ApiError::MissingReference(
        "the news, subject or object of this fact does not exist".to_owned(),
      )
    })?;
  Ok(Json(json!({ "factID": fact_id })))
}

/// `DELETE /news/:news_id/facts/:fact_id`
pub async fn delete_fact<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Path((news_id, fact_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
  state
    .store
    .delete_fact(&news_id, &fact_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "message": "Successful" })))
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub text: Option<String>,
}

/// `POST /news/search?start=<n>&limit=<n>` — substring match on `link`;
/// the body's `text` is mandatory.
pub async fn search<S: GraphStore>(
  State(state): State<ApiState<S>>,
  OriginalUri(uri): OriginalUri,
  Query(params): Query<PageParams>,
  Json(body): Json<SearchBody>,
) -> Result<Json<Page<News>>, ApiError> {
  let text = body.text.ok_or(newsgraph_core::Error::MissingSearchText)?;
  let window = PageWindow::resolve(params, state.defaults);
  let items = state
    .store
    .search_news(&text, window.start, window.limit)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Page::assemble(items, window, uri.path())))
}

#[derive(Debug, Deserialize)]
pub struct TypedSearchBody {
  pub text:        String,
  pub type_entity: String,
}

/// `POST /news/entity/search` — substring match on `des`, restricted to one
/// entity kind. 404 on an unknown kind.
pub async fn search_typed<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<TypedSearchBody>,
) -> Result<Json<Vec<Entity>>, ApiError> {
  let kind = EntityKind::parse(&body.type_entity)
    .map_err(|_| ApiError::NotFound("entity type not found".to_owned()))?;
  let entities = state
    .store
    .search_typed_entities(kind, &body.text)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(entities))
}

// ─── Merge ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MergeBody {
  pub set_entity_id: Vec<String>,
  pub entity_type:   String,
}

/// `POST /news/merge_nodes` — kind-explicit merge; returns the surviving
/// node, or an empty object when nothing matched.
pub async fn merge<S: GraphStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<MergeBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let kind = EntityKind::parse(&body.entity_type)?;
  let merged = state
    .store
    .merge_entities(kind, &body.set_entity_id)
    .await
    .map_err(ApiError::store)?;
  match merged {
    Some(entity) => Ok(Json(serde_json::to_value(entity).map_err(ApiError::store)?)),
    None => Ok(Json(json!({}))),
  }
}
