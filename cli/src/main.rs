//! Trellis CLI: run graph algorithms over a JSON snapshot file
//!
//! Node identifiers are strings. Logs go to stderr, results to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, Level};
use trellis::GraphStore;

#[derive(Parser)]
#[command(name = "trellis", version, about = "Trellis graph algorithms CLI")]
struct Cli {
    /// Graph snapshot (JSON)
    #[arg(long, short, global = true, env = "TRELLIS_INPUT")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log at DEBUG level
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Count nodes, edges and arrows
    Stats,
    /// List the neighbors of a node in insertion order
    Neighbors { node: String },
    /// Depth-first search (whole graph unless --root is given)
    Dfs {
        #[arg(long)]
        root: Option<String>,
    },
    /// Breadth-first search (whole graph unless --root is given)
    Bfs {
        #[arg(long)]
        root: Option<String>,
    },
    /// Transitive closure
    Reach,
    /// Strongly connected components
    Scc,
    /// Connected components (undirected graphs)
    Components,
    /// Topological ordering (directed acyclic graphs)
    Topo,
    /// Minimum spanning tree / forest (weighted undirected graphs)
    Mst,
    /// Shortest paths from a source (Dijkstra)
    Paths {
        source: String,
        /// Print only the path to this node
        #[arg(long)]
        target: Option<String>,
    },
}

/// Tabular result plus its JSON rendering
#[derive(Debug)]
struct Report {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    json: Value,
}

impl Report {
    fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>, json: Value) -> Self {
        Report {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            json,
        }
    }

    fn row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = load(cli.input.as_ref())
        .and_then(|graph| run(&graph, &cli.command))
        .and_then(|report| print_report(&report, cli.format));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load(input: Option<&PathBuf>) -> Result<GraphStore<String>> {
    let path = input.context("no snapshot given (use --input or TRELLIS_INPUT)")?;
    let mut graph = GraphStore::new();
    graph
        .load_snapshot(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    debug!("Loaded {}", graph);
    Ok(graph)
}

fn parent_cell(parent: &Option<String>) -> String {
    parent.clone().unwrap_or_else(|| "-".to_string())
}

fn run(graph: &GraphStore<String>, command: &Commands) -> Result<Report> {
    let report = match command {
        Commands::Stats => {
            let snapshot = graph.snapshot();
            let json = json!({
                "nodes": snapshot.nodes.len(),
                "edges": snapshot.edges.len(),
                "arrows": snapshot.arrows.len(),
            });
            let mut report = Report::new(["nodes", "edges", "arrows"], json);
            report.row([
                snapshot.nodes.len().to_string(),
                snapshot.edges.len().to_string(),
                snapshot.arrows.len().to_string(),
            ]);
            report
        }
        Commands::Neighbors { node } => {
            let neighbors = graph.neighbors(node)?;
            let mut report = Report::new(["neighbor", "kind", "weight"], json!(neighbors));
            for neighbor in &neighbors {
                let kind = graph.link_kind(node, neighbor).map(|k| k.to_string()).unwrap_or_default();
                let weight = graph.arrow_weight(node, neighbor)?;
                report.row([neighbor.clone(), kind, weight.to_string()]);
            }
            report
        }
        Commands::Dfs { root } => {
            let dfs = graph.depth_first_search(root.as_ref())?;
            let mut report = Report::new(["node", "parent", "pre", "post"], serde_json::to_value(&dfs)?);
            for (node, parent) in &dfs.spanning_tree {
                let pre = dfs.preorder.iter().position(|n| n == node).unwrap_or_default();
                let post = dfs.postorder.iter().position(|n| n == node).unwrap_or_default();
                report.row([node.clone(), parent_cell(parent), pre.to_string(), post.to_string()]);
            }
            report
        }
        Commands::Bfs { root } => {
            let tree = graph.breadth_first_search(root.as_ref())?;
            let mut report = Report::new(["node", "parent"], serde_json::to_value(&tree)?);
            for (node, parent) in &tree {
                report.row([node.clone(), parent_cell(parent)]);
            }
            report
        }
        Commands::Reach => {
            let closure = graph.accessibility();
            let mut report = Report::new(["node", "reaches"], serde_json::to_value(&closure)?);
            for (node, reached) in &closure {
                let reached: Vec<&str> = reached.iter().map(String::as_str).collect();
                report.row([node.clone(), reached.join(" ")]);
            }
            report
        }
        Commands::Scc => {
            let scc = graph.mutual_accessibility();
            let mut report = Report::new(["component", "members"], serde_json::to_value(&scc)?);
            for (id, members) in scc.components.iter().enumerate() {
                report.row([id.to_string(), members.join(" ")]);
            }
            report
        }
        Commands::Components => {
            let components = graph.connected_components();
            let mut report = Report::new(["node", "component"], serde_json::to_value(&components)?);
            for (node, id) in &components {
                report.row([node.clone(), id.to_string()]);
            }
            report
        }
        Commands::Topo => {
            let order = graph.topological_sorting()?;
            let mut report = Report::new(["position", "node"], json!(order));
            for (position, node) in order.iter().enumerate() {
                report.row([position.to_string(), node.clone()]);
            }
            report
        }
        Commands::Mst => {
            let mst = graph.minimal_spanning_tree();
            let json = json!({
                "spanning_tree": mst.spanning_tree,
                "total_weight": mst.total_weight,
                "trees": mst.roots().count(),
            });
            let mut report = Report::new(["node", "parent", "weight"], json);
            for (node, parent) in &mst.spanning_tree {
                let weight = match parent {
                    Some(p) => graph.arrow_weight(p, node)?.to_string(),
                    None => "-".to_string(),
                };
                report.row([node.clone(), parent_cell(parent), weight]);
            }
            report.row(["total".to_string(), "-".to_string(), mst.total_weight.to_string()]);
            report
        }
        Commands::Paths { source, target } => {
            let paths = graph.shortest_path(source)?;
            match target {
                Some(target) => {
                    let path = paths
                        .path_to(target)
                        .with_context(|| format!("{} is not reachable from {}", target, source))?;
                    let distance = paths.distance_to(target).unwrap_or_default();
                    let json = json!({ "path": path, "distance": distance });
                    let mut report = Report::new(["path", "distance"], json);
                    report.row([path.join(" -> "), distance.to_string()]);
                    report
                }
                None => {
                    let mut report =
                        Report::new(["node", "predecessor", "distance"], serde_json::to_value(&paths)?);
                    for (node, distance) in &paths.distances {
                        let prev = paths.predecessors.get(node).cloned();
                        report.row([node.clone(), parent_cell(&prev), distance.to_string()]);
                    }
                    report
                }
            }
        }
    };
    Ok(report)
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.json)?);
        }
        OutputFormat::Csv => {
            println!("{}", report.columns.join(","));
            for row in &report.rows {
                let cells: Vec<String> = row.iter().map(|c| format_csv_value(c)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if report.rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&report.columns);
            for row in &report.rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", report.rows.len());
        }
    }
    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
