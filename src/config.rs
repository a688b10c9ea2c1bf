//! Site configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `GRIDGRAPH_` (nested keys separated by
//! `__`, e.g. `GRIDGRAPH_SITE__DOMAIN_SUFFIX=cluster.example.org`).
//!
//! ```toml
//! [site]
//! domain_suffix = "bos1.vrtx.com"
//! host_prefix = "hpcnode"
//!
//! [queues]
//! fallback_color = "#003399"
//! colors = [
//!     { queue = "high.q", color = "#DF00FF" },
//!     { queue = "all.q", color = "#8C92AC" },
//!     { queue = "low.q", color = "#534B4F" },
//! ]
//!
//! [graph]
//! title = "HPC Cluster Activity"
//! background = "black"
//! ```

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::QueueColors;
use crate::render::GraphStyle;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "GRIDGRAPH";

/// All tunable values for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteSettings,
    pub queues: QueueColors,
    pub graph: GraphStyle,
}

/// Naming conventions of the cluster being drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Appended to a short host name to find it in the host listing.
    pub domain_suffix: String,
    /// Stripped from host names for display.
    pub host_prefix: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            domain_suffix: "bos1.vrtx.com".to_string(),
            host_prefix: "hpcnode".to_string(),
        }
    }
}

impl SiteSettings {
    /// Fully-qualified name of a short host name.
    pub fn fqdn(&self, short_name: &str) -> String {
        if self.domain_suffix.is_empty() {
            short_name.to_string()
        } else {
            format!("{}.{}", short_name, self.domain_suffix)
        }
    }

    /// Display label for a short host name.
    ///
    /// `hpcnode3a` becomes `3a`; names without the prefix are kept whole.
    pub fn host_label<'a>(&self, short_name: &'a str) -> &'a str {
        match short_name.strip_prefix(self.host_prefix.as_str()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => short_name,
        }
    }
}

impl Settings {
    /// Build settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_fqdn() {
        let site = SiteSettings::default();
        assert_eq!(site.fqdn("hpcnode3a"), "hpcnode3a.bos1.vrtx.com");

        let bare = SiteSettings {
            domain_suffix: String::new(),
            ..SiteSettings::default()
        };
        assert_eq!(bare.fqdn("hpcnode3a"), "hpcnode3a");
    }

    #[test]
    fn test_host_label_strips_prefix() {
        let site = SiteSettings::default();
        assert_eq!(site.host_label("hpcnode3a"), "3a");
        assert_eq!(site.host_label("hpcnode12b"), "12b");
    }

    #[test]
    fn test_host_label_keeps_other_names() {
        let site = SiteSettings::default();
        assert_eq!(site.host_label("fileserver"), "fileserver");
        assert_eq!(site.host_label("xhpcnode1"), "xhpcnode1");
        // nothing left after the prefix
        assert_eq!(site.host_label("hpcnode"), "hpcnode");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r##"
[site]
domain_suffix = "cluster.example.org"

[queues]
fallback_color = "#123456"
colors = [{{ queue = "gpu.q", color = "#00FF00" }}]

[graph]
title = "Lab Grid"
"##
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.site.domain_suffix, "cluster.example.org");
        assert_eq!(settings.site.host_prefix, "hpcnode");
        assert_eq!(settings.queues.color_for("gpu.q"), "#00FF00");
        assert_eq!(settings.queues.color_for("all.q"), "#123456");
        assert_eq!(settings.graph.title, "Lab Grid");
        assert_eq!(settings.graph.background, "black");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Settings::load(Some(Path::new("/nonexistent/gridgraph.toml")));
        assert!(result.is_err());
    }
}
