//! Resolved cluster graph.
//!
//! Joins the job listing with the host listing and derives every visual
//! attribute up front, so rendering cannot fail halfway through a document.

use serde::Serialize;
use tracing::debug;

use super::queue::QueueInstance;
use super::style::{edge_width, JobState, LineStyle};
use super::temperature::temperature_color;
use crate::config::{Settings, SiteSettings};
use crate::error::{GraphError, Result};
use crate::source::{HostSnapshot, QueueSnapshot};

/// Every job placement of a cluster, in job listing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusterGraph {
    pub placements: Vec<JobPlacement>,
}

/// A job, the host it runs on, and the edge joining them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPlacement {
    pub job_number: u64,
    pub owner: String,
    pub state: String,
    pub queue: String,
    pub host: HostNode,
    pub edge: JobEdge,
}

/// Execution host as drawn: a regular polygon with one side per slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostNode {
    /// Short host name, used as the node id.
    pub id: String,
    pub label: String,
    pub sides: u32,
    pub load_avg: f64,
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobEdge {
    pub width: u32,
    /// Queue color, shared with the job node.
    pub color: String,
    pub style: LineStyle,
}

/// Load average of a short host name, looked up by fully-qualified name.
pub fn resolve_load(hosts: &HostSnapshot, site: &SiteSettings, short_name: &str) -> Result<f64> {
    let fqdn = site.fqdn(short_name);
    let host = hosts
        .find(&fqdn)
        .ok_or_else(|| GraphError::HostNotFound { fqdn: fqdn.clone() })?;
    host.load_avg.ok_or(GraphError::LoadUnavailable { fqdn })
}

impl ClusterGraph {
    /// Walk every queue instance and style each of its jobs.
    pub fn build(queues: &QueueSnapshot, hosts: &HostSnapshot, settings: &Settings) -> Result<Self> {
        let mut placements = Vec::with_capacity(queues.job_count());

        for record in &queues.queues {
            let instance = QueueInstance::parse(&record.name)?;
            if record.jobs.is_empty() {
                continue;
            }
            if record.slots_total == 0 {
                return Err(GraphError::ZeroSlots {
                    queue: record.name.clone(),
                });
            }

            let load_avg = resolve_load(hosts, &settings.site, instance.host)?;
            let host = HostNode {
                id: instance.host.to_string(),
                label: settings.site.host_label(instance.host).to_string(),
                sides: record.slots_total,
                load_avg,
                fill_color: temperature_color(load_avg, record.slots_total).to_string(),
            };
            let color = settings.queues.color_for(instance.queue);

            for job in &record.jobs {
                placements.push(JobPlacement {
                    job_number: job.job_number,
                    owner: job.owner.clone(),
                    state: job.state.clone(),
                    queue: instance.queue.to_string(),
                    host: host.clone(),
                    edge: JobEdge {
                        width: edge_width(job.slots),
                        color: color.to_string(),
                        style: JobState::parse(&job.state).line_style(),
                    },
                });
            }
        }

        debug!(placements = placements.len(), "resolved cluster graph");
        Ok(Self { placements })
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
