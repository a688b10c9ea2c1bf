//! Edge and job styling derived from scheduler semantics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Job state as reported in the `<state>` element of a job listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// `r`
    Running,
    /// `s`, suspended by the owner or an operator.
    Suspended,
    /// `S`, suspended because its queue is suspended (admin or calendar).
    QueueSuspended,
    /// `T`, suspended by a queue threshold.
    Threshold,
    /// `w`
    Waiting,
    /// Any other code: `qw`, `h`, `E`, `d`, and `t` (being transferred to
    /// its execution host), ...
    Other(String),
}

impl JobState {
    pub fn parse(code: &str) -> Self {
        match code {
            "r" => JobState::Running,
            "s" => JobState::Suspended,
            "S" => JobState::QueueSuspended,
            "T" => JobState::Threshold,
            "w" => JobState::Waiting,
            other => JobState::Other(other.to_string()),
        }
    }

    /// Line style of the edge connecting the job to its host.
    pub fn line_style(&self) -> LineStyle {
        match self {
            JobState::Running => LineStyle::Solid,
            JobState::Suspended
            | JobState::QueueSuspended
            | JobState::Threshold
            | JobState::Waiting => LineStyle::Dashed,
            JobState::Other(_) => LineStyle::Dotted,
        }
    }
}

/// Graphviz line style of a job edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge thickness for a job requesting `slots` slots.
pub fn edge_width(slots: u32) -> u32 {
    slots.saturating_mul(2)
}

/// One entry of the queue color table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueColor {
    pub queue: String,
    pub color: String,
}

impl QueueColor {
    fn new(queue: &str, color: &str) -> Self {
        Self {
            queue: queue.to_string(),
            color: color.to_string(),
        }
    }
}

/// Queue name to color table with an explicit fallback.
///
/// Edit this to fit the queues of your cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueColors {
    /// Color of queues not listed in `colors`.
    pub fallback_color: String,
    /// Exact-match entries, first match wins.
    pub colors: Vec<QueueColor>,
}

impl Default for QueueColors {
    fn default() -> Self {
        Self {
            fallback_color: "#003399".to_string(),
            colors: vec![
                QueueColor::new("high.q", "#DF00FF"),
                QueueColor::new("all.q", "#8C92AC"),
                QueueColor::new("low.q", "#534B4F"),
            ],
        }
    }
}

impl QueueColors {
    /// Color for jobs and edges of the named queue.
    pub fn color_for(&self, queue: &str) -> &str {
        self.colors
            .iter()
            .find(|entry| entry.queue == queue)
            .map_or(self.fallback_color.as_str(), |entry| entry.color.as_str())
    }
}
