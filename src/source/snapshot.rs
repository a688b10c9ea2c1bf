//! Owned records parsed from the scheduler's XML listings.
//!
//! These mirror the parts of `qstat -f -xml` and `qhost -xml` output that
//! the graph needs. Everything else in those documents is ignored.

/// The job listing: every queue instance with its running jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueSnapshot {
    pub queues: Vec<QueueRecord>,
}

impl QueueSnapshot {
    /// Total number of jobs across all queue instances.
    pub fn job_count(&self) -> usize {
        self.queues.iter().map(|q| q.jobs.len()).sum()
    }
}

/// A queue instance, named `<queue>@<host>`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueRecord {
    /// Composite key, e.g. `all.q@hpcnode3a.bos1.vrtx.com`.
    pub name: String,
    /// Slot capacity of the queue instance.
    pub slots_total: u32,
    /// Jobs placed on this queue instance, in document order.
    pub jobs: Vec<JobRecord>,
}

/// A job running (or suspended, transferring, ...) in a queue instance.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub job_number: u64,
    pub owner: String,
    /// Slots requested by the job.
    pub slots: u32,
    /// Scheduler state code such as `r`, `s`, `qw` or `Eqw`.
    pub state: String,
}

/// The host listing with per-host load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSnapshot {
    pub hosts: Vec<HostRecord>,
}

impl HostSnapshot {
    /// Look up a host by its fully-qualified name.
    pub fn find(&self, fqdn: &str) -> Option<&HostRecord> {
        self.hosts.iter().find(|h| h.name == fqdn)
    }
}

/// An execution host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    /// Fully-qualified host name as reported by the scheduler.
    pub name: String,
    /// Load average, `None` when the host reports `-` or omits it.
    pub load_avg: Option<f64>,
}
