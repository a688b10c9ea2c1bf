//! Loading of scheduler snapshots.
//!
//! Both listings are read fully into owned, immutable records before any
//! mapping happens. A document that cannot be read or parsed aborts the run.

mod file;
mod snapshot;

pub use file::{executable_dir, load_hosts, load_queues, parse_hosts, parse_queues, SnapshotFiles};
pub use snapshot::{HostRecord, HostSnapshot, JobRecord, QueueRecord, QueueSnapshot};
