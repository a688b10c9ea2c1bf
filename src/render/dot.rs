//! Graphviz DOT emission.
//!
//! The output is an undirected graph meant for `neato`: one box per job,
//! one regular polygon per execution host, and an edge for each placement.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use super::GraphStyle;
use crate::data::{ClusterGraph, JobPlacement};

/// C `ctime` layout, e.g. `Mon Oct 19 17:28:00 2026`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const DOT_KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Write the complete document for `graph`.
pub fn write_graph<W: Write>(
    out: &mut W,
    graph: &ClusterGraph,
    style: &GraphStyle,
    generated_at: NaiveDateTime,
) -> io::Result<()> {
    write_header(out, style, generated_at)?;
    for placement in &graph.placements {
        write_placement(out, placement)?;
    }
    writeln!(out, "}}")
}

fn write_header<W: Write>(
    out: &mut W,
    style: &GraphStyle,
    generated_at: NaiveDateTime,
) -> io::Result<()> {
    writeln!(out, "graph G {{")?;
    writeln!(out, "\tstart=\"regular\";")?;
    writeln!(out, "\toutputorder=\"edgesfirst\";")?;
    writeln!(out, "\tmodel=\"mds\";")?;
    writeln!(out, "\tsep=\"{}\";", escape(&style.separation))?;
    writeln!(out, "\tesep=\"{}\";", escape(&style.edge_separation))?;
    writeln!(out, "\tbgcolor=\"{}\";", escape(&style.background))?;
    writeln!(out, "\tsplines=\"true\";")?;
    writeln!(out, "\toverlap=\"false\";")?;
    writeln!(out, "\tsize=\"{}\";", escape(&style.size))?;

    // Timestamp shows whether the graph is still being refreshed
    writeln!(out, "\tlabelloc=\"t\";")?;
    writeln!(
        out,
        "\tlabel=\"{} - {}\";",
        escape(&style.title),
        generated_at.format(CTIME_FORMAT)
    )?;
    writeln!(out, "\tfontcolor={};", id(&style.font_color))?;
    writeln!(out, "\tfontsize={};", number(style.font_size))
}

/// A DOT number that keeps one decimal for whole values (`24.0`).
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn write_placement<W: Write>(out: &mut W, placement: &JobPlacement) -> io::Result<()> {
    // Node ids must start with a letter, hence the "J"
    let job_id = format!("J{}", placement.job_number);
    let host = &placement.host;
    let edge = &placement.edge;
    let host_id = id(&host.id);

    writeln!(
        out,
        "\t{job_id} [style=filled,penwidth=8,label=\"{}\\n{}\",shape=box,color=\"{}\",fontcolor=\"white\"];",
        placement.job_number,
        escape(&placement.owner),
        escape(&edge.color),
    )?;
    writeln!(
        out,
        "\t{host_id} [style=filled,penwidth=4,label=\"{}\",shape=polygon,regular=\"true\",sides=\"{}\",fillcolor=\"{}\",color=\"white\"];",
        escape(&host.label),
        host.sides,
        escape(&host.fill_color),
    )?;
    writeln!(
        out,
        "\t{job_id} -- {host_id} [penwidth=\"{}\",len=1.0,color=\"{}\",style=\"{}\"];",
        edge.width,
        escape(&edge.color),
        edge.style,
    )
}

/// Escape text for a double-quoted DOT string.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// A DOT identifier: bare when it is a plain alphanumeric name, quoted otherwise.
pub fn id(name: &str) -> String {
    let mut chars = name.chars();
    let plain = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !DOT_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name));
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HostNode, JobEdge, LineStyle, PALETTE};
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2011, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    fn render_graph(
        graph: &ClusterGraph,
        style: &GraphStyle,
        generated_at: NaiveDateTime,
    ) -> String {
        let mut buf = Vec::new();
        write_graph(&mut buf, graph, style, generated_at).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn placement(host_id: &str, owner: &str) -> JobPlacement {
        JobPlacement {
            job_number: 1042,
            owner: owner.to_string(),
            state: "r".to_string(),
            queue: "all.q".to_string(),
            host: HostNode {
                id: host_id.to_string(),
                label: "3a".to_string(),
                sides: 8,
                load_avg: 4.0,
                fill_color: PALETTE[5].to_string(),
            },
            edge: JobEdge {
                width: 8,
                color: "#8C92AC".to_string(),
                style: LineStyle::Solid,
            },
        }
    }

    #[test]
    fn test_empty_graph() {
        let out = render_graph(&ClusterGraph::default(), &GraphStyle::default(), generated_at());
        let expected = "graph G {\n\
            \tstart=\"regular\";\n\
            \toutputorder=\"edgesfirst\";\n\
            \tmodel=\"mds\";\n\
            \tsep=\"0.7\";\n\
            \tesep=\"0.5\";\n\
            \tbgcolor=\"black\";\n\
            \tsplines=\"true\";\n\
            \toverlap=\"false\";\n\
            \tsize=\"13.0,9.75\";\n\
            \tlabelloc=\"t\";\n\
            \tlabel=\"HPC Cluster Activity - Mon Mar  7 09:05:03 2011\";\n\
            \tfontcolor=white;\n\
            \tfontsize=24.0;\n\
            }\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_placement_lines() {
        let graph = ClusterGraph {
            placements: vec![placement("hpcnode3a", "alice")],
        };
        let out = render_graph(&graph, &GraphStyle::default(), generated_at());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 14 + 3);
        assert_eq!(
            lines[13],
            "\tJ1042 [style=filled,penwidth=8,label=\"1042\\nalice\",shape=box,color=\"#8C92AC\",fontcolor=\"white\"];"
        );
        assert_eq!(
            lines[14],
            "\thpcnode3a [style=filled,penwidth=4,label=\"3a\",shape=polygon,regular=\"true\",sides=\"8\",fillcolor=\"#FE2C00\",color=\"white\"];"
        );
        assert_eq!(
            lines[15],
            "\tJ1042 -- hpcnode3a [penwidth=\"8\",len=1.0,color=\"#8C92AC\",style=\"solid\"];"
        );
        assert_eq!(lines[16], "}");
    }

    #[test]
    fn test_label_escaping() {
        let graph = ClusterGraph {
            placements: vec![placement("node-1", "o\"brien")],
        };
        let out = render_graph(&graph, &GraphStyle::default(), generated_at());
        assert!(out.contains("label=\"1042\\no\\\"brien\""));
        assert!(out.contains("\tJ1042 -- \"node-1\" ["));
    }

    #[test]
    fn test_custom_style() {
        let style = GraphStyle {
            title: "Lab Grid".to_string(),
            background: "white".to_string(),
            font_color: "#000000".to_string(),
            font_size: 18.0,
            ..GraphStyle::default()
        };
        let out = render_graph(&ClusterGraph::default(), &style, generated_at());
        assert!(out.contains("\tbgcolor=\"white\";\n"));
        assert!(out.contains("\tlabel=\"Lab Grid - Mon Mar  7 09:05:03 2011\";\n"));
        assert!(out.contains("\tfontcolor=\"#000000\";\n"));
        assert!(out.contains("\tfontsize=18.0;\n"));
    }

    #[test]
    fn test_fractional_font_size_is_not_rounded() {
        let style = GraphStyle {
            font_size: 13.25,
            ..GraphStyle::default()
        };
        let out = render_graph(&ClusterGraph::default(), &style, generated_at());
        assert!(out.contains("\tfontsize=13.25;\n"));
    }

    #[test]
    fn test_number() {
        assert_eq!(number(24.0), "24.0");
        assert_eq!(number(13.25), "13.25");
        assert_eq!(number(0.5), "0.5");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape("two\nlines"), "two\\nlines");
    }

    #[test]
    fn test_id() {
        assert_eq!(id("hpcnode3a"), "hpcnode3a");
        assert_eq!(id("_x"), "_x");
        assert_eq!(id("node-1"), "\"node-1\"");
        assert_eq!(id("3node"), "\"3node\"");
        assert_eq!(id("Node"), "\"Node\"");
        assert_eq!(id(""), "\"\"");
    }
}
