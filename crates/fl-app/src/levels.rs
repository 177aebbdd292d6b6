//! Catalog lookups.

use fl_project::{Catalog, LevelDef};

use crate::error::{AppError, AppResult};

/// Summary of a level for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub node_count: i64,
    pub edge_count: usize,
}

/// List all levels in catalog order.
pub fn list_levels(catalog: &Catalog) -> Vec<LevelSummary> {
    catalog
        .levels()
        .iter()
        .map(|level| LevelSummary {
            id: level.id,
            name: level.name.clone(),
            description: level.description.clone(),
            node_count: level.graph.nodes,
            edge_count: level.graph.edges.len(),
        })
        .collect()
}

pub fn get_level(catalog: &Catalog, id: u32) -> AppResult<LevelDef> {
    catalog.find(id).cloned().ok_or(AppError::LevelNotFound(id))
}

/// Hint for a level; unknown ids get the generic fallback rather than an error.
pub fn get_hint(catalog: &Catalog, id: u32) -> String {
    catalog.hint(id).to_string()
}
