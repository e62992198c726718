//! CLI entry point for the `ugraph` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use undigraph::cli::commands;
use undigraph::graph::SearchOrder;
use undigraph::GraphError;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph — query undirected graphs described in JSON files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Echo every visited vertex to stderr during traversals
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts
    Info {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Path to the graph description
        file: PathBuf,
        /// Starting vertex label
        start: String,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Path to the graph description
        file: PathBuf,
        /// Starting vertex label
        start: String,
    },
    /// Check whether two vertices are connected
    Connected {
        /// Path to the graph description
        file: PathBuf,
        /// First vertex label
        a: String,
        /// Second vertex label
        b: String,
        /// Search strategy: dfs or bfs
        #[arg(long, default_value = "bfs")]
        strategy: String,
    },
    /// Number of edges on a shortest path
    Path {
        /// Path to the graph description
        file: PathBuf,
        /// Source vertex label
        a: String,
        /// Target vertex label
        b: String,
    },
    /// List the neighbours of a vertex
    Neighbors {
        /// Path to the graph description
        file: PathBuf,
        /// Vertex label
        vertex: String,
    },
    /// Print the normalised description
    Export {
        /// Path to the graph description
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let mut out = io::stdout().lock();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
        Commands::Dfs { file, start } => commands::cmd_traverse(
            &file,
            &start,
            SearchOrder::DepthFirst,
            cli.verbose,
            json,
            &mut out,
        ),
        Commands::Bfs { file, start } => commands::cmd_traverse(
            &file,
            &start,
            SearchOrder::BreadthFirst,
            cli.verbose,
            json,
            &mut out,
        ),
        Commands::Connected {
            file,
            a,
            b,
            strategy,
        } => {
            let order = match SearchOrder::from_name(&strategy) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid strategy: {}", strategy);
                    process::exit(3);
                }
            };
            commands::cmd_connected(&file, &a, &b, order, json, &mut out)
        }
        Commands::Path { file, a, b } => commands::cmd_path(&file, &a, &b, json, &mut out),
        Commands::Neighbors { file, vertex } => {
            commands::cmd_neighbors(&file, &vertex, json, &mut out)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::UnknownLabel(_)
            | GraphError::NotOnGraph
            | GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
