//! # gridgraph
//!
//! Draws the activity of a Grid Engine cluster as a Graphviz graph.
//!
//! Two XML snapshots are read: the job listing from
//! `qstat -f -u "*" -ne -xml` and the host listing from `qhost -xml`. Every
//! running job becomes a box connected to a polygon for its execution host.
//! Hosts are filled with a "temperature" color from their load, edges are as
//! thick as the job's slot count, colored by queue, and dashed or dotted when
//! the job is not running.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌────────────┐    ┌────────┐
//! │  source  │───▶│    data    │───▶│   render   │───▶│ stdout │
//! │  (XML)   │    │ (mapping)  │    │   (DOT)    │    │        │
//! └──────────┘    └────────────┘    └────────────┘    └────────┘
//!                       ▲
//!                 ┌─────┴────┐
//!                 │  config  │
//!                 └──────────┘
//! ```
//!
//! - **[`source`]**: Loading of the two listings into owned snapshot records
//! - **[`data`]**: Queue name splitting, job styling, host temperature colors,
//!   and the resolved [`ClusterGraph`]
//! - **[`render`]**: DOT document emission
//! - **[`config`]**: Site naming, queue colors and graph styling
//!
//! ## Usage
//!
//! ```bash
//! qstat -f -u "*" -ne -xml > qstat.xml
//! qhost -xml > qhost.xml
//! gridgraph --qstat qstat.xml --qhost qhost.xml | neato -Tpng -o cluster.png
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use gridgraph::{App, Settings, SnapshotFiles};
//!
//! let app = App::new(SnapshotFiles::in_dir("/var/spool/gridgraph"), Settings::default());
//! let graph = app.load_graph()?;
//! app.write_dot(std::io::stdout(), &graph, chrono::Local::now().naive_local())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod source;

pub use app::{export_to_file, App};
pub use config::{Settings, SiteSettings};
pub use data::{ClusterGraph, JobPlacement, LineStyle, QueueColors};
pub use error::{GraphError, Result};
pub use render::GraphStyle;
pub use source::{HostSnapshot, QueueSnapshot, SnapshotFiles};
