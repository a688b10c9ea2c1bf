use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridgraph::source::executable_dir;
use gridgraph::{export_to_file, App, Settings, SnapshotFiles};

#[derive(Parser, Debug)]
#[command(name = "gridgraph")]
#[command(about = "Render Grid Engine cluster activity as a Graphviz graph")]
struct Args {
    /// Job listing from `qstat -f -u "*" -ne -xml` (default: qstat.xml next to the executable)
    #[arg(long)]
    qstat: Option<PathBuf>,

    /// Host listing from `qhost -xml` (default: qhost.xml next to the executable)
    #[arg(long)]
    qhost: Option<PathBuf>,

    /// TOML file with site, queue color and graph settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the resolved graph as JSON to this file instead of printing DOT
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    // stdout carries the graph, keep logs on stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let files = SnapshotFiles::with_defaults(args.qstat, args.qhost, executable_dir)
        .context("cannot locate executable")?;
    let settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;

    let app = App::new(files, settings);
    let graph = app.load_graph()?;

    // Handle export mode
    if let Some(export_path) = args.export {
        export_to_file(&graph, &export_path)?;
        println!("Exported cluster graph to: {}", export_path.display());
        return Ok(());
    }

    app.write_dot(io::stdout().lock(), &graph, chrono::Local::now().naive_local())
}
