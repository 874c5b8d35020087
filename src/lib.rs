//! Ranked enumeration of the spanning trees of a weighted undirected graph
//! by substitute-edge tree exchange (Yamada et al.).
//!
//! ```
//! use yamada::{enumerate_spanning_trees, WeightedGraph};
//!
//! let graph = WeightedGraph::new([(1, 2, 1), (2, 3, 2), (1, 3, 3)]).unwrap();
//! let weights: Vec<i32> = enumerate_spanning_trees(&graph, None)
//!     .map(|tree| tree.unwrap().weight())
//!     .collect();
//! assert_eq!(weights, vec![3, 4, 5]);
//! ```
pub mod config;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod substitute;
pub mod tree;

pub use config::{EnumeratorConfig, Scope};
pub use enumerate::{enumerate_spanning_trees, BranchNode, TreeEnumerator};
pub use error::{Error, ReplacementFault, Result};
pub use graph::{EdgeId, Weight, WeightedGraph};
pub use substitute::{compute_substitutes, EdgeRoles, SubstituteFinder, SubstituteMap, SubstituteRule, TieBreak};
pub use tree::{minimum_spanning_tree, SpanningTree};
