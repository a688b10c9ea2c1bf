//! Mapping of scheduler records to visual attributes.
//!
//! ## Submodules
//!
//! - [`queue`]: Splitting of `queue@host` instance names
//! - [`style`]: Job state line styles, edge widths and the queue color table
//! - [`temperature`]: Host load to palette color quantization
//! - [`cluster`]: The resolved [`ClusterGraph`] joining jobs, queues and hosts
//!
//! ## Data Flow
//!
//! ```text
//! QueueSnapshot + HostSnapshot
//!        │
//!        ▼
//! ClusterGraph::build()
//!        │
//!        ├──▶ QueueInstance::parse()   (queue name, short host)
//!        ├──▶ resolve_load()           (host load, or an error)
//!        └──▶ JobPlacement             (colors, shapes, line style)
//! ```

pub mod cluster;
pub mod queue;
pub mod style;
pub mod temperature;

pub use cluster::{resolve_load, ClusterGraph, HostNode, JobEdge, JobPlacement};
pub use queue::QueueInstance;
pub use style::{edge_width, JobState, LineStyle, QueueColor, QueueColors};
pub use temperature::{palette_index, temperature_color, PALETTE};
