//! Output rendering.
//!
//! - [`dot`]: Graphviz document emission for a resolved [`ClusterGraph`](crate::data::ClusterGraph)
//! - [`theme`]: Document-level styling ([`GraphStyle`])

pub mod dot;
pub mod theme;

pub use dot::write_graph;
pub use theme::GraphStyle;
