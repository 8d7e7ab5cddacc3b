//! Synset lookup and search handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use lexnet_kb::data::{AutocompleteItem, HypernymPath, RelatedSynset, SearchResult, SynsetDetail, SynsetRelations};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DepthParams {
    pub depth: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub pos: Option<String>,
    pub limit: Option<usize>,
}

pub async fn synset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<SynsetDetail>> {
    Ok(Json(state.explorer.synset(&id).await?))
}

pub async fn relations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<SynsetRelations>> {
    Ok(Json(state.explorer.synset_relations(&id).await?))
}

pub async fn hypernyms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<DepthParams>, QueryRejection>,
) -> ServerResult<Json<Vec<RelatedSynset>>> {
    let Query(params) = params?;
    Ok(Json(state.explorer.hypernyms(&id, params.depth).await?))
}

pub async fn hyponyms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<DepthParams>, QueryRejection>,
) -> ServerResult<Json<Vec<RelatedSynset>>> {
    let Query(params) = params?;
    Ok(Json(state.explorer.hyponyms(&id, params.depth).await?))
}

pub async fn hypernym_paths(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Vec<HypernymPath>>> {
    Ok(Json(state.explorer.hypernym_paths(&id).await?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ServerResult<Json<Vec<SearchResult>>> {
    let Query(params) = params?;
    let results = state
        .explorer
        .search(&params.q, params.pos.as_deref(), params.limit)
        .await?;
    Ok(Json(results))
}

pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ServerResult<Json<Vec<AutocompleteItem>>> {
    let Query(params) = params?;
    let items = state.explorer.autocomplete(&params.q, params.limit).await?;
    Ok(Json(items))
}
