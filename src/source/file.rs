//! File-based snapshot loading.
//!
//! Reads the XML written by `qstat -f -u "*" -ne -xml` and `qhost -xml`
//! and converts it into owned records.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use roxmltree::{Document, Node};
use tracing::debug;

use super::{HostRecord, HostSnapshot, JobRecord, QueueRecord, QueueSnapshot};
use crate::error::{GraphError, Result};

/// The pair of scheduler listings a graph is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFiles {
    /// Output of `qstat -f -u "*" -ne -xml`.
    pub qstat: PathBuf,
    /// Output of `qhost -xml`.
    pub qhost: PathBuf,
}

impl SnapshotFiles {
    pub const QSTAT_FILE: &'static str = "qstat.xml";
    pub const QHOST_FILE: &'static str = "qhost.xml";

    /// Create a pair from explicit paths.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(qstat: P, qhost: Q) -> Self {
        Self {
            qstat: qstat.as_ref().to_path_buf(),
            qhost: qhost.as_ref().to_path_buf(),
        }
    }

    /// The conventional file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(Self::QSTAT_FILE), dir.join(Self::QHOST_FILE))
    }

    /// The conventional file names next to the running executable.
    pub fn beside_executable() -> io::Result<Self> {
        Self::with_defaults(None, None, executable_dir)
    }

    /// Explicit paths where given, conventional names in `default_dir` for
    /// the rest. `default_dir` is only called when a path is missing.
    pub fn with_defaults<F>(
        qstat: Option<PathBuf>,
        qhost: Option<PathBuf>,
        default_dir: F,
    ) -> io::Result<Self>
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        match (qstat, qhost) {
            (Some(qstat), Some(qhost)) => Ok(Self { qstat, qhost }),
            (qstat, qhost) => {
                let defaults = Self::in_dir(default_dir()?);
                Ok(Self {
                    qstat: qstat.unwrap_or(defaults.qstat),
                    qhost: qhost.unwrap_or(defaults.qhost),
                })
            }
        }
    }

    /// Read and parse both listings. Fails on the first unusable document.
    pub fn load(&self) -> Result<(QueueSnapshot, HostSnapshot)> {
        let queues = load_queues(&self.qstat)?;
        let hosts = load_hosts(&self.qhost)?;
        Ok((queues, hosts))
    }
}

/// Directory holding the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().unwrap_or_else(|| Path::new(".")).to_path_buf())
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_document<'a>(content: &'a str, path: &Path) -> Result<Document<'a>> {
    Document::parse(content).map_err(|e| GraphError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the job listing from `path`.
pub fn load_queues(path: &Path) -> Result<QueueSnapshot> {
    let content = read_document(path)?;
    parse_queues(&content, path)
}

/// Load the host listing from `path`.
pub fn load_hosts(path: &Path) -> Result<HostSnapshot> {
    let content = read_document(path)?;
    parse_hosts(&content, path)
}

/// Parse a job listing. `path` is only used for error messages.
pub fn parse_queues(content: &str, path: &Path) -> Result<QueueSnapshot> {
    let doc = parse_document(content, path)?;
    let queue_info = child(doc.root_element(), "queue_info")
        .ok_or_else(|| missing(path, "queue_info"))?;

    let queues = queue_info
        .children()
        .filter(|n| n.has_tag_name("Queue-List"))
        .map(|q| parse_queue(q, path))
        .collect::<Result<Vec<_>>>()?;

    let snapshot = QueueSnapshot { queues };
    debug!(
        path = %path.display(),
        queues = snapshot.queues.len(),
        jobs = snapshot.job_count(),
        "loaded job listing"
    );
    Ok(snapshot)
}

fn parse_queue(node: Node<'_, '_>, path: &Path) -> Result<QueueRecord> {
    let name = required_text(node, "name", path)?.to_string();
    let slots_total = required_number(node, "slots_total", path)?;
    let jobs = node
        .children()
        .filter(|n| n.has_tag_name("job_list"))
        .map(|j| parse_job(j, path))
        .collect::<Result<Vec<_>>>()?;

    Ok(QueueRecord {
        name,
        slots_total,
        jobs,
    })
}

fn parse_job(node: Node<'_, '_>, path: &Path) -> Result<JobRecord> {
    Ok(JobRecord {
        job_number: required_number(node, "JB_job_number", path)?,
        owner: required_text(node, "JB_owner", path)?.to_string(),
        slots: required_number(node, "slots", path)?,
        state: required_text(node, "state", path)?.to_string(),
    })
}

/// Parse a host listing. `path` is only used for error messages.
pub fn parse_hosts(content: &str, path: &Path) -> Result<HostSnapshot> {
    let doc = parse_document(content, path)?;

    let hosts: Vec<HostRecord> = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("host"))
        .filter_map(|host| {
            let name = host.attribute("name")?.to_string();
            // qhost reports "-" for hosts that are down
            let load_avg = host
                .children()
                .filter(|v| v.has_tag_name("hostvalue") && v.attribute("name") == Some("load_avg"))
                .filter_map(|v| v.text().and_then(|t| t.trim().parse::<f64>().ok()))
                .last();
            Some(HostRecord { name, load_avg })
        })
        .collect();

    debug!(path = %path.display(), hosts = hosts.len(), "loaded host listing");
    Ok(HostSnapshot { hosts })
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn missing(path: &Path, element: &str) -> GraphError {
    GraphError::MissingElement {
        path: path.to_path_buf(),
        element: element.to_string(),
    }
}

fn required_text<'a>(node: Node<'a, '_>, tag: &str, path: &Path) -> Result<&'a str> {
    child(node, tag)
        .and_then(|n| n.text())
        .map(str::trim)
        .ok_or_else(|| missing(path, tag))
}

fn required_number<T: FromStr>(node: Node<'_, '_>, tag: &str, path: &Path) -> Result<T> {
    let text = required_text(node, tag, path)?;
    text.parse().map_err(|_| GraphError::invalid(path, tag, text))
}
