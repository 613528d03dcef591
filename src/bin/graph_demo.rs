use adjacency_graph::{Graph, GraphError, Weight};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Walk-through of the dual matrix/list graph.
///
/// Without `--vertices` this builds the two sample graphs (an undirected
/// unweighted graph on 5 vertices and a directed weighted graph on 4), prints
/// both views of each, removes one edge and queries the result.
///
/// With `--vertices N` it instead fills an N-vertex graph with random edges:
///
/// - every ordered pair (undirected: unordered pair) receives an edge with
///   probability `density`
/// - weighted graphs draw an integer weight uniformly from [1, max_weight]
#[derive(Parser, Debug)]
#[command(author, version, about = "Build and print small graphs in both adjacency views")]
struct Args {
    /// Number of vertices for a random graph (omit to run the sample walk-through)
    #[arg(long, allow_negative_numbers = true)]
    vertices: Option<i64>,

    /// Treat edges as directed
    #[arg(long)]
    directed: bool,

    /// Keep caller weights instead of forcing every weight to 1
    #[arg(long)]
    weighted: bool,

    /// Probability of an edge between two distinct vertices
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Largest random weight (weighted graphs only)
    #[arg(long, default_value_t = 9)]
    max_weight: u32,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Verify that the matrix and list views agree before exiting
    #[arg(long)]
    check: bool,

    /// Log every edge mutation
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Prints the summary line and both views of a graph
fn show(graph: &Graph) {
    println!("{}", graph);
    print!("{}", graph.display_matrix());
    println!();
    print!("{}", graph.display_list());
}

/// The two sample graphs and the follow-up queries
fn run_walkthrough(check: bool) -> Result<(), GraphError> {
    println!("=== Undirected, unweighted ===");
    let mut first = Graph::new(5, false, false);
    for (u, v) in [(0, 1), (0, 2), (1, 3), (3, 4)] {
        first.add_unit_edge(u, v)?;
    }
    show(&first);

    println!();
    println!("=== Directed, weighted ===");
    let mut second = Graph::new(4, true, true);
    for (u, v, w) in [(0, 1, 5.0), (0, 2, 3.0), (1, 3, 2.0), (2, 3, 7.0)] {
        second.add_edge(u, v, w)?;
    }
    show(&second);

    println!();
    println!("Removing edge 0 -> 2");
    first.remove_edge(0, 2)?;
    print!("{}", first.display_list());

    println!();
    println!("Queries:");
    println!("  neighbors of 1: {:?}", first.neighbors(1)?);
    println!("  degree of 1: {}", first.degree(1)?);
    println!("  edge 1 -> 3 present: {}", first.has_edge(1, 3)?);

    if check {
        first.check_consistency()?;
        second.check_consistency()?;
        info!("both sample graphs are consistent");
    }
    Ok(())
}

/// Fills `graph` with random edges; returns how many `add_edge` calls were made
fn fill_random<R: Rng>(
    graph: &mut Graph,
    density: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<usize, GraphError> {
    let n = graph.vertex_count();
    let mut added = 0;
    for u in 0..n {
        for v in 0..n {
            if u == v || (!graph.is_directed() && v < u) {
                continue;
            }
            if rng.gen::<f64>() < density {
                let weight = Weight::from(rng.gen_range(1..=max_weight.max(1)));
                graph.add_edge(u, v, weight)?;
                added += 1;
            }
        }
    }
    Ok(added)
}

fn run_random(args: &Args, n: i64) -> Result<(), GraphError> {
    let mut graph = Graph::try_new(n, args.directed, args.weighted)?;

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::thread_rng().gen();
            info!(seed, "no seed given, drew one from entropy");
            StdRng::seed_from_u64(seed)
        }
    };

    let added = fill_random(&mut graph, args.density, args.max_weight, &mut rng)?;
    info!(added, density = args.density, "generated random graph");
    show(&graph);

    if args.check {
        graph.check_consistency()?;
        info!("matrix and list views are consistent");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if !(0.0..=1.0).contains(&args.density) {
        eprintln!("Error: density must be in [0,1].");
        std::process::exit(1);
    }

    let result = match args.vertices {
        Some(n) => run_random(&args, n),
        None => run_walkthrough(args.check),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
