//! nemograph CLI — drives the analytics engine over graph description
//! files: all-pairs shortest paths and network motif enumeration.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use nemograph::{algo, display, io as graph_io, DistanceTable, GraphStore, VertexId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nemograph", version, about = "Graph analytics: shortest paths and network motifs")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "plain", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the all-pairs shortest-path table of a weighted graph file
    Paths {
        /// Weighted graph description file
        file: PathBuf,

        /// Source vertex (1-based); requires --target
        #[arg(long)]
        source: Option<usize>,

        /// Target vertex (1-based); requires --source
        #[arg(long)]
        target: Option<usize>,
    },
    /// Enumerate connected k-vertex subgraphs (network motifs)
    Motifs {
        /// Graph description file
        file: PathBuf,

        /// Subgraph size k
        #[arg(short = 'k', long, default_value_t = 3)]
        size: usize,

        /// Read the unweighted (source, destination) pair format
        #[arg(long)]
        pairs: bool,

        /// Print only the number of motifs
        #[arg(long)]
        count_only: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Paths {
            file,
            source,
            target,
        } => run_paths(&file, source, target, &cli.format),
        Commands::Motifs {
            file,
            size,
            pairs,
            count_only,
        } => run_motifs(&file, size, pairs, count_only, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_paths(
    file: &PathBuf,
    source: Option<usize>,
    target: Option<usize>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = graph_io::read_graph_file(file)?;
    let table = algo::shortest_paths(&store);

    match (source, target) {
        (Some(source), Some(target)) => {
            let source = VertexId::from_external(source).ok_or("vertex ids are 1-based")?;
            let target = VertexId::from_external(target).ok_or("vertex ids are 1-based")?;
            match format {
                OutputFormat::Json => {
                    let value = pair_json(&table, source.index(), target.index());
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                _ => print!("{}", display::render_path(&store, &table, source, target)),
            }
        }
        (None, None) => match format {
            OutputFormat::Plain => print!("{}", display::render_all_paths(&store, &table)),
            OutputFormat::Table => print_paths_table(&store, &table),
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = all_pairs(&table)
                    .map(|(s, t)| pair_json(&table, s, t))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
        },
        _ => return Err("--source and --target must be given together".into()),
    }
    Ok(())
}

fn run_motifs(
    file: &PathBuf,
    size: usize,
    pairs: bool,
    count_only: bool,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if count_only {
        let count = if pairs {
            algo::count_motifs_undirected(&graph_io::read_pairs_file(file)?, size)
        } else {
            algo::count_motifs(&graph_io::read_graph_file(file)?, size)
        };
        match format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "count": count })),
            _ => println!("{count}"),
        }
        return Ok(());
    }

    let motifs = if pairs {
        algo::enumerate_motifs_undirected(&graph_io::read_pairs_file(file)?, size)
    } else {
        algo::enumerate_motifs(&graph_io::read_graph_file(file)?, size)
    };

    match format {
        OutputFormat::Plain => print!("{}", display::render_motifs(&motifs)),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Motif"]);
            for motif in &motifs {
                let ids: Vec<String> = motif.iter().map(|v| v.external().to_string()).collect();
                table.add_row(vec![ids.join(" ")]);
            }
            println!("{table}");
            println!("{} motifs", motifs.len());
        }
        OutputFormat::Json => {
            let listed: Vec<Vec<usize>> = motifs
                .iter()
                .map(|motif| motif.iter().map(|v| v.external()).collect())
                .collect();
            let value = serde_json::json!({ "motifs": listed, "count": listed.len() });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn all_pairs(table: &DistanceTable) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = table.vertex_count();
    (0..n).flat_map(move |s| (0..n).filter(move |&t| t != s).map(move |t| (s, t)))
}

fn pair_json(table: &DistanceTable, source: usize, target: usize) -> serde_json::Value {
    let path = table
        .path(source, target)
        .map(|path| path.into_iter().map(|v| v + 1).collect::<Vec<_>>());
    serde_json::json!({
        "source": source + 1,
        "target": target + 1,
        "distance": table.distance(source, target),
        "path": path,
    })
}

fn print_paths_table(store: &GraphStore, table: &DistanceTable) {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Description", "From", "To", "Distance", "Path"]);

    for (source, target) in all_pairs(table) {
        let distance = table
            .distance(source, target)
            .map(|d| d.to_string())
            .unwrap_or_else(|| display::UNREACHABLE.to_string());
        let path = table
            .path(source, target)
            .map(|path| {
                path.into_iter()
                    .map(|v| (v + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_else(|| display::UNREACHABLE.to_string());
        out.add_row(vec![
            store.label(VertexId::new(source)).unwrap_or("").to_string(),
            (source + 1).to_string(),
            (target + 1).to_string(),
            distance,
            path,
        ]);
    }
    println!("{out}");
}
