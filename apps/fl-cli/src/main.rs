use clap::{Args, Parser, Subcommand};
use fl_app::{AppError, AppResult};
use fl_project::{Catalog, GraphDef};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowlab")]
#[command(about = "FlowLab - practice and check maximum flows", long_about = None)]
struct Cli {
    /// Log every augmenting path and verification step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Level catalog file (JSON or YAML list); defaults to the built-in levels
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog levels
    Levels,
    /// Print a level definition as JSON
    Level {
        /// Level ID
        id: u32,
    },
    /// Print the hint for a level
    Hint {
        /// Level ID
        id: u32,
    },
    /// Compute the maximum flow of a level or graph file
    Solve {
        #[command(flatten)]
        source: GraphSource,
        /// Include edge flows, augmenting paths and the minimum cut
        #[arg(long)]
        details: bool,
    },
    /// Check a flow map against a level or graph file
    Verify {
        #[command(flatten)]
        source: GraphSource,
        /// Flow map file: {"from-to": flow, ...}
        #[arg(long)]
        flows: PathBuf,
    },
    /// Verify a list of requests ({level_id, flows, level_data?}) in parallel
    Batch {
        /// Requests file (JSON or YAML list)
        requests: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct GraphSource {
    /// Catalog level ID
    #[arg(long)]
    level: Option<u32>,
    /// Graph file: {nodes, edges: [{from, to, capacity}], source, sink}
    #[arg(long)]
    graph: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> AppResult<ExitCode> {
    let catalog = match &cli.catalog {
        Some(path) => fl_project::load_catalog(path)?,
        None => Catalog::builtin(),
    };
    debug!(levels = catalog.levels().len(), "catalog loaded");

    match cli.command {
        Commands::Levels => cmd_levels(&catalog),
        Commands::Level { id } => print_json(&fl_app::get_level(&catalog, id)?),
        Commands::Hint { id } => {
            println!("{}", fl_app::get_hint(&catalog, id));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Solve { source, details } => {
            let graph = load_graph(&catalog, &source)?;
            print_json(&fl_app::solve_graph(&graph, details)?)
        }
        Commands::Verify { source, flows } => cmd_verify(&catalog, &source, &flows),
        Commands::Batch { requests } => cmd_batch(&catalog, &requests),
    }
}

fn cmd_levels(catalog: &Catalog) -> AppResult<ExitCode> {
    let levels = fl_app::list_levels(catalog);
    if levels.is_empty() {
        println!("No levels in catalog.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{:<4} {:<20} {:>5} {:>5}  Description", "ID", "Name", "Nodes", "Edges");
    for level in levels {
        println!(
            "{:<4} {:<20} {:>5} {:>5}  {}",
            level.id, level.name, level.node_count, level.edge_count, level.description
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(catalog: &Catalog, source: &GraphSource, flows_path: &Path) -> AppResult<ExitCode> {
    let graph = load_graph(catalog, source)?;
    let flows = fl_project::load_flows(flows_path)?;
    let response = fl_app::verify_flows(&graph, &flows)?;

    print_json(&response)?;
    Ok(if response.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_batch(catalog: &Catalog, requests_path: &Path) -> AppResult<ExitCode> {
    #[derive(Serialize)]
    #[serde(untagged)]
    enum Outcome {
        Response(fl_project::VerifyResponseDef),
        Error { error: String },
    }

    let requests = fl_project::load_verify_requests(requests_path)?;
    let outcomes: Vec<Outcome> = fl_app::verify_batch(catalog, &requests)
        .into_iter()
        .map(|result| match result {
            Ok(response) => Outcome::Response(response),
            Err(err) => Outcome::Error {
                error: err.to_string(),
            },
        })
        .collect();

    print_json(&outcomes)
}

fn load_graph(catalog: &Catalog, source: &GraphSource) -> AppResult<GraphDef> {
    match (&source.graph, source.level) {
        (Some(path), _) => Ok(fl_project::load_graph(path)?),
        (None, Some(id)) => Ok(fl_app::get_level(catalog, id)?.graph),
        (None, None) => Err(AppError::InvalidInput(
            "either --level or --graph is required".to_string(),
        )),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<ExitCode> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Project(format!("Failed to serialize output: {}", e)))?;
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}
