//! fl-project: wire and file formats, plus the level catalog.

pub mod catalog;
pub mod schema;

pub use catalog::{Catalog, NO_HINT};
pub use schema::*;

use serde::de::DeserializeOwned;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Invalid flow key '{key}' (expected \"from-to\")")]
    InvalidFlowKey { key: String },

    #[error("Duplicate level id {id} in catalog")]
    DuplicateLevel { id: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON or YAML document; `.yaml`/`.yml` files are YAML, all else JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> ProjectResult<T> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn load_graph(path: &Path) -> ProjectResult<GraphDef> {
    load_document(path)
}

pub fn load_flows(path: &Path) -> ProjectResult<FlowMapDef> {
    let flows: FlowMapDef = load_document(path)?;
    for key in flows.keys() {
        parse_flow_key(key)?;
    }
    Ok(flows)
}

pub fn load_verify_requests(path: &Path) -> ProjectResult<Vec<VerifyRequestDef>> {
    load_document(path)
}

pub fn load_catalog(path: &Path) -> ProjectResult<Catalog> {
    let levels: Vec<LevelDef> = load_document(path)?;
    Catalog::new(levels)
}
