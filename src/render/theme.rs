//! Document-level Graphviz styling.

use serde::{Deserialize, Serialize};

/// Graph attributes written once at the top of the document.
///
/// See <https://graphviz.org/doc/info/attrs.html> for what each does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    /// Title shown above the graph, followed by the generation time.
    pub title: String,
    pub background: String,
    pub font_color: String,
    pub font_size: f64,
    /// Maximum drawing size in inches, `"width,height"`.
    pub size: String,
    /// Node margin used to remove overlaps (`sep`).
    pub separation: String,
    /// Margin around polygons for spline routing (`esep`).
    pub edge_separation: String,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            title: "HPC Cluster Activity".to_string(),
            background: "black".to_string(),
            font_color: "white".to_string(),
            font_size: 24.0,
            size: "13.0,9.75".to_string(),
            separation: "0.7".to_string(),
            edge_separation: "0.5".to_string(),
        }
    }
}
