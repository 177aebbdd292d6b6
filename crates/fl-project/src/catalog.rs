//! Predefined levels.

use std::collections::HashSet;

use crate::schema::{EdgeDef, GraphDef, LevelDef};
use crate::{ProjectError, ProjectResult};

pub const NO_HINT: &str = "No hint available";

type RawLevel = (u32, &'static str, &'static str, i64, &'static [(i64, i64, i64)], i64, i64, &'static str);

const BUILTIN: &[RawLevel] = &[
    (
        1,
        "Simple Path",
        "Find the maximum flow through a simple linear graph",
        4,
        &[(0, 1, 10), (1, 2, 5), (2, 3, 15)],
        0,
        3,
        "Remember: the flow through a path is limited by its smallest-capacity edge (the bottleneck)",
    ),
    (
        2,
        "Parallel Paths",
        "Two paths to the sink - distribute the flow efficiently",
        4,
        &[(0, 1, 10), (0, 2, 10), (1, 3, 10), (2, 3, 10)],
        0,
        3,
        "Try to split the flow evenly between the two paths out of the source",
    ),
    (
        3,
        "Mixed Network",
        "Several paths with different capacities",
        5,
        &[
            (0, 1, 16),
            (0, 2, 12),
            (1, 2, 9),
            (1, 3, 12),
            (2, 1, 3),
            (2, 4, 20),
            (3, 2, 7),
            (3, 4, 7),
            (4, 3, 4),
        ],
        0,
        4,
        "Find the bottleneck edges that limit the total flow",
    ),
    (
        4,
        "Complex Network",
        "A larger graph with bottlenecks",
        6,
        &[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (3, 5, 10),
            (4, 3, 6),
            (4, 5, 10),
            (5, 2, 2),
        ],
        0,
        5,
        "Look for edges that appear on several paths - they are critical",
    ),
    (
        5,
        "Expert Challenge",
        "A large network with many interdependencies",
        7,
        &[
            (0, 1, 9),
            (0, 2, 5),
            (1, 3, 4),
            (1, 4, 8),
            (2, 1, 4),
            (2, 5, 8),
            (3, 6, 10),
            (4, 3, 3),
            (4, 5, 4),
            (5, 4, 2),
            (5, 6, 10),
            (6, 4, 2),
        ],
        0,
        6,
        "This is a real maximum-flow problem: you need to find every augmenting path",
    ),
];

/// An ordered set of levels with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    levels: Vec<LevelDef>,
}

impl Catalog {
    /// Wrap a list of levels, rejecting repeated ids.
    pub fn new(levels: Vec<LevelDef>) -> ProjectResult<Self> {
        let mut ids = HashSet::new();
        for level in &levels {
            if !ids.insert(level.id) {
                return Err(ProjectError::DuplicateLevel { id: level.id });
            }
        }
        Ok(Self { levels })
    }

    /// The five levels shipped with the game.
    pub fn builtin() -> Self {
        let levels = BUILTIN
            .iter()
            .map(
                |&(id, name, description, nodes, edges, source, sink, hint)| LevelDef {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    graph: GraphDef {
                        nodes,
                        edges: edges
                            .iter()
                            .map(|&(from, to, capacity)| EdgeDef { from, to, capacity })
                            .collect(),
                        source,
                        sink,
                    },
                    hint: Some(hint.to_string()),
                },
            )
            .collect();
        Self { levels }
    }

    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    pub fn find(&self, id: u32) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Hint text for a level, or [`NO_HINT`].
    pub fn hint(&self, id: u32) -> &str {
        self.find(id)
            .and_then(|level| level.hint.as_deref())
            .unwrap_or(NO_HINT)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
