use clap::{Parser, Subcommand};
use graph_properties::dimacs;
use graph_properties::generator::random_graph;
use graph_properties::maximum_flow::capacity::Capacities;
use graph_properties::maximum_flow::edmonds_karp::EdmondsKarp;
use graph_properties::minimum_spanning_tree::prim::Prim;
use graph_properties::shortest_path::dijkstra::Dijkstra;
use graph_properties::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graph-properties")]
#[command(about = "Shortest path, minimum spanning tree and maximum flow over DIMACS graphs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run all three algorithms on every input file
    Run {
        /// DIMACS graph files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report file
        #[arg(short, long, default_value = "results.txt")]
        output: PathBuf,

        /// Source node, 0-indexed
        #[arg(short, long, default_value_t = 0)]
        source: usize,

        /// Sink/target node, 0-indexed (defaults to the last node)
        #[arg(short = 't', long)]
        sink: Option<usize>,
    },
    /// Write a random graph in DIMACS format
    Generate {
        #[arg(short, long)]
        nodes: usize,

        #[arg(short, long)]
        edges: usize,

        #[arg(short, long)]
        output: PathBuf,

        /// Seed for reproducible graphs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();

    match Args::parse().command {
        Command::Run { files, output, source, sink } => run(&files, &output, source, sink),
        Command::Generate { nodes, edges, output, seed } => generate(nodes, edges, &output, seed),
    }
}

fn run(files: &[PathBuf], output: &Path, source: usize, sink: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(File::create(output)?);

    for file in files {
        tracing::info!(file = %file.display(), "processing");
        let graph = match dimacs::read_graph(file) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::error!(file = %file.display(), error = %e, "skipping file");
                continue;
            }
        };

        writeln!(writer, "\nResults for {}:", file.display())?;
        if let Err(e) = report(&mut writer, &graph, source, sink) {
            tracing::error!(file = %file.display(), error = %e, "algorithm failed");
            writeln!(writer, "Error: {e}")?;
        }
    }

    writer.flush()?;
    tracing::info!(output = %output.display(), "results written");
    Ok(())
}

fn report<W: Write>(writer: &mut W, graph: &Graph<i64>, source: usize, sink: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let n = graph.num_nodes();
    let m = graph.num_edges();
    let sink = sink.unwrap_or(n.saturating_sub(1));
    tracing::info!(n, m, "graph loaded");
    writeln!(writer, "Graph: n = {n}, m = {m}")?;

    tracing::info!("running shortest path (dijkstra)");
    let start = Instant::now();
    let cost = Dijkstra::default().solve(source, sink, graph)?;
    let elapsed = start.elapsed().as_secs_f64();
    let cost = cost.map_or_else(|| "unreachable".to_string(), |c| c.to_string());
    writeln!(writer, "Shortest path cost: {cost}, time (s): {elapsed:.5}")?;

    tracing::info!("running minimum spanning tree (prim)");
    let start = Instant::now();
    let tree = Prim::default().solve(graph)?;
    let elapsed = start.elapsed().as_secs_f64();
    if !tree.is_spanning(n) {
        tracing::warn!(spanned = tree.num_spanned, n, "graph is disconnected, only the component of node 0 was spanned");
    }
    writeln!(writer, "MST cost: {}, time (s): {elapsed:.5}", tree.total_weight)?;

    tracing::info!("running maximum flow (edmonds-karp)");
    let capacities = Capacities::from_graph(graph)?;
    let start = Instant::now();
    let flow = EdmondsKarp::default().solve(source, sink, &capacities)?;
    let elapsed = start.elapsed().as_secs_f64();
    writeln!(writer, "Maximum flow: {}, time (s): {elapsed:.5}", flow.value)?;

    Ok(())
}

fn generate(nodes: usize, edges: usize, output: &Path, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = random_graph(nodes, edges, &mut rng)?;

    let mut writer = BufWriter::new(File::create(output)?);
    dimacs::write_graph(&mut writer, &graph)?;
    writer.flush()?;

    tracing::info!(output = %output.display(), nodes, edges, "graph generated");
    Ok(())
}
