//! Graph view handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use lexnet_kb::{GraphData, PathResult, SimilarityResult};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct NeighborhoodParams {
    pub depth: Option<usize>,
    /// Comma-separated relation names
    pub relations: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TreeParams {
    pub max_depth: Option<usize>,
    pub limit: Option<usize>,
}

/// `relations=hypernym, hyponym,,similar` becomes three names; an empty
/// list means the default set.
fn split_relations(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub async fn neighborhood(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<NeighborhoodParams>, QueryRejection>,
) -> ServerResult<Json<GraphData>> {
    let Query(params) = params?;
    let relations = split_relations(params.relations.as_deref());
    let relations = (!relations.is_empty()).then_some(relations.as_slice());

    let graph = state
        .explorer
        .neighborhood(&id, params.depth, relations, params.limit)
        .await?;
    Ok(Json(graph))
}

pub async fn shortest_path(
    State(state): State<Arc<AppState>>,
    Path((source, target)): Path<(String, String)>,
) -> ServerResult<Json<PathResult>> {
    let path = state.explorer.shortest_path(&source, &target).await?;
    Ok(Json(path))
}

pub async fn hypernym_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<TreeParams>, QueryRejection>,
) -> ServerResult<Json<GraphData>> {
    let Query(params) = params?;
    let graph = state.explorer.hypernym_tree(&id, params.max_depth).await?;
    Ok(Json(graph))
}

pub async fn hyponym_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<TreeParams>, QueryRejection>,
) -> ServerResult<Json<GraphData>> {
    let Query(params) = params?;
    let graph = state
        .explorer
        .hyponym_subtree(&id, params.max_depth, params.limit)
        .await?;
    Ok(Json(graph))
}

pub async fn similarity(
    State(state): State<Arc<AppState>>,
    Path((id1, id2)): Path<(String, String)>,
) -> ServerResult<Json<SimilarityResult>> {
    let result = state.explorer.similarity(&id1, &id2).await?;
    Ok(Json(result))
}
