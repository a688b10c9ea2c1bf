//! One run of the pipeline: load snapshots, resolve the graph, write it out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::info;

use crate::config::Settings;
use crate::data::ClusterGraph;
use crate::render::write_graph;
use crate::source::SnapshotFiles;

/// Inputs and settings for a single report.
#[derive(Debug, Clone)]
pub struct App {
    pub files: SnapshotFiles,
    pub settings: Settings,
}

impl App {
    pub fn new(files: SnapshotFiles, settings: Settings) -> Self {
        Self { files, settings }
    }

    /// Load both listings and resolve every job placement.
    ///
    /// Nothing has been written anywhere when this fails.
    pub fn load_graph(&self) -> crate::Result<ClusterGraph> {
        let (queues, hosts) = self.files.load()?;
        let graph = ClusterGraph::build(&queues, &hosts, &self.settings)?;
        info!(
            queues = queues.queues.len(),
            hosts = hosts.hosts.len(),
            jobs = graph.placements.len(),
            "cluster graph ready"
        );
        Ok(graph)
    }

    /// Write the DOT document for `graph`.
    pub fn write_dot<W: Write>(
        &self,
        out: W,
        graph: &ClusterGraph,
        generated_at: NaiveDateTime,
    ) -> Result<()> {
        let mut out = BufWriter::new(out);
        write_graph(&mut out, graph, &self.settings.graph, generated_at)
            .and_then(|()| out.flush())
            .context("failed to write graph")
    }
}

/// Export a resolved graph as pretty-printed JSON.
pub fn export_to_file(graph: &ClusterGraph, export_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    let mut file = File::create(export_path)
        .with_context(|| format!("failed to create {}", export_path.display()))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
