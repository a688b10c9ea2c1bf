//! Queue instance names.

use crate::error::{GraphError, Result};

/// A queue instance name split into its parts.
///
/// `all.q@hpcnode3a.bos1.vrtx.com` has queue `all.q` and host `hpcnode3a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueInstance<'a> {
    /// Cluster queue name.
    pub queue: &'a str,
    /// Short execution host name, domain stripped.
    pub host: &'a str,
}

impl<'a> QueueInstance<'a> {
    pub fn parse(name: &'a str) -> Result<Self> {
        let (queue, host) = name
            .split_once('@')
            .ok_or_else(|| GraphError::MalformedQueueName(name.to_string()))?;
        let host = host.split('.').next().unwrap_or(host);
        if host.is_empty() {
            return Err(GraphError::MalformedQueueName(name.to_string()));
        }
        Ok(Self { queue, host })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fully_qualified() {
        let instance = QueueInstance::parse("all.q@hpcnode3a.bos1.vrtx.com").unwrap();
        assert_eq!(instance.queue, "all.q");
        assert_eq!(instance.host, "hpcnode3a");
    }

    #[test]
    fn test_parse_short_host() {
        let instance = QueueInstance::parse("high.q@fileserver").unwrap();
        assert_eq!(instance.queue, "high.q");
        assert_eq!(instance.host, "fileserver");
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let instance = QueueInstance::parse("q@host@other.domain").unwrap();
        assert_eq!(instance.queue, "q");
        assert_eq!(instance.host, "host@other");
    }

    #[test]
    fn test_parse_without_separator() {
        let err = QueueInstance::parse("all.q").unwrap_err();
        assert!(matches!(err, GraphError::MalformedQueueName(ref n) if n == "all.q"));
    }

    #[test]
    fn test_parse_without_host() {
        assert!(QueueInstance::parse("all.q@").is_err());
        assert!(QueueInstance::parse("all.q@.bos1.vrtx.com").is_err());
    }
}
