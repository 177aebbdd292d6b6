//! Request, response and level definitions as they appear on the wire.
//!
//! Integers are kept as `i64` here so that out-of-range input (negative node
//! ids, say) deserializes and is rejected with a precise message later,
//! instead of failing inside serde.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ProjectError, ProjectResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub from: i64,
    pub to: i64,
    pub capacity: i64,
}

/// `{nodes, edges: [{from, to, capacity}], source, sink}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphDef {
    pub nodes: i64,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    pub source: i64,
    pub sink: i64,
}

/// User flow keyed by `"from-to"`.
pub type FlowMapDef = BTreeMap<String, i64>;

pub fn flow_key(from: impl std::fmt::Display, to: impl std::fmt::Display) -> String {
    format!("{from}-{to}")
}

/// Split a `"from-to"` key into its endpoints.
pub fn parse_flow_key(key: &str) -> ProjectResult<(u32, u32)> {
    let invalid = || ProjectError::InvalidFlowKey {
        key: key.to_string(),
    };
    let (from, to) = key.split_once('-').ok_or_else(invalid)?;
    let from = from.trim().parse::<u32>().map_err(|_| invalid())?;
    let to = to.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((from, to))
}

/// A predefined puzzle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelDef {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub graph: GraphDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Marker for the literal string `"custom"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CustomTag {
    #[serde(rename = "custom")]
    Custom,
}

/// Which graph a verify request is about: a catalog level or `"custom"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LevelRef {
    Id(u32),
    Custom(CustomTag),
}

/// `{level_id, flows, level_data?}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyRequestDef {
    pub level_id: LevelRef,
    #[serde(default)]
    pub flows: FlowMapDef,
    /// Required when `level_id` is `"custom"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_data: Option<GraphDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationDef {
    Capacity {
        edge: String,
        flow: i64,
        capacity: i64,
    },
    Conservation {
        node: u32,
        in_flow: i64,
        out_flow: i64,
    },
}

/// `{is_valid, message, max_flow, user_flow, violations?}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResponseDef {
    pub is_valid: bool,
    pub message: String,
    pub max_flow: i64,
    pub user_flow: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AugmentingPathDef {
    pub nodes: Vec<u32>,
    pub bottleneck: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinCutDef {
    pub source_side: Vec<u32>,
    pub edges: Vec<String>,
    pub capacity: i64,
}

/// `{max_flow, edge_flows?, augmenting_paths?, min_cut?}`
///
/// The optional fields are filled together, for detailed solves only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveResponseDef {
    pub max_flow: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_flows: Option<FlowMapDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub augmenting_paths: Option<Vec<AugmentingPathDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cut: Option<MinCutDef>,
}

impl SolveResponseDef {
    pub fn value_only(max_flow: i64) -> Self {
        Self {
            max_flow,
            edge_flows: None,
            augmenting_paths: None,
            min_cut: None,
        }
    }
}
