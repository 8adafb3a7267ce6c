use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use social_graph_core::{breadth_first_traversal, shortest_path, Graph, PathOutcome};
use social_graph_network::{Scenario, SocialNetwork};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "social-graph-bench")]
#[command(about = "Benchmarks and demo for the social-graph workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic graphs and time BFS and shortest path on each
    Graph {
        /// Topology to generate
        #[arg(value_enum, default_value_t = Topology::All)]
        topology: Topology,

        /// Number of vertices per generated graph
        #[arg(short, long, default_value_t = 200_000)]
        nodes: u64,

        /// Seed for the generators
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Load a scenario file and walk through the social-network queries
    Demo {
        /// Scenario JSON (users, friendships, settings)
        #[arg(short, long)]
        scenario: PathBuf,

        /// User index (position in the scenario's user list) to start from
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Print a JSON summary instead of the profile listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Topology {
    All,
    Tree,
    Scalefree,
    Smallworld,
    Barbell,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Graph {
            topology,
            nodes,
            seed,
        } => run_graph_bench(topology, nodes, seed),
        Commands::Demo {
            scenario,
            start,
            json,
        } => run_demo(&scenario, start, json),
    }
}

fn run_graph_bench(topology: Topology, nodes: u64, seed: u64) -> Result<()> {
    if nodes < 16 {
        bail!("--nodes must be at least 16, got {}", nodes);
    }

    let generators: Vec<(&str, fn(u64, u64) -> Graph<u64>)> = match topology {
        Topology::Tree => vec![("Branching tree", gen_tree)],
        Topology::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Topology::Smallworld => vec![("Small-world ring", gen_small_world)],
        Topology::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Topology::All => vec![
            ("Branching tree", gen_tree as fn(u64, u64) -> Graph<u64>),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world ring", gen_small_world),
            ("Barbell (clique-bridge-clique)", gen_barbell),
        ],
    };

    for (name, generator) in generators {
        bench_topology(name, generator, nodes, seed);
    }
    Ok(())
}

fn bench_topology(name: &str, generator: fn(u64, u64) -> Graph<u64>, nodes: u64, seed: u64) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let mut graph = generator(nodes, seed);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "generated in {:.2}s",
        t.elapsed().as_secs_f64()
    );

    let t = Instant::now();
    let reached = breadth_first_traversal(&mut graph, &0).map_or(0, |order| order.len());
    println!(
        "BFS from 0: {} of {} vertices in {:.1}ms",
        reached,
        graph.vertex_count(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let far = nodes - 1;
    let t = Instant::now();
    let outcome = shortest_path(&mut graph, &0, &far);
    let elapsed_ms = t.elapsed().as_secs_f64() * 1000.0;
    match outcome {
        PathOutcome::Found { hops, .. } => {
            println!("Shortest path 0 → {}: {} hops in {:.1}ms", far, hops, elapsed_ms)
        }
        _ => println!("Shortest path 0 → {}: no path ({:.1}ms)", far, elapsed_ms),
    }
    println!();
}

fn run_demo(path: &Path, start: usize, json: bool) -> Result<()> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    let loaded = scenario.build()?;
    let mut network: SocialNetwork = loaded.network;

    let Some(start_id) = loaded.ids.get(start).copied().flatten() else {
        bail!("user index {} is not a loaded user", start);
    };

    let suggestions: Vec<String> = network
        .friend_suggestion(start_id)
        .map(|ps| ps.iter().map(|p| p.name().to_string()).collect())
        .unwrap_or_default();

    let mut distances = Vec::new();
    for id in loaded.ids.iter().flatten().copied() {
        let hops = network.friendship_distance(start_id, id);
        let name = network.profile(id).map(|p| p.name().to_string()).unwrap_or_default();
        distances.push((name, hops));
    }

    if json {
        let summary = serde_json::json!({
            "start": network.profile(start_id),
            "users": network.user_count(),
            "friendships": network.friendship_count(),
            "suggestions": suggestions,
            "distances": distances
                .iter()
                .map(|(name, hops)| serde_json::json!({ "name": name, "hops": hops }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    network.display_traversal(start_id, &mut out)?;

    writeln!(out, "Suggestions: {}", suggestions.join(", "))?;
    for (name, hops) in &distances {
        match hops {
            -1 => writeln!(out, "Distance to {}: not connected", name)?,
            h => writeln!(out, "Distance to {}: {}", name, h)?,
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic per seed, single-threaded
// ---------------------------------------------------------------------------

/// Linear congruential generator; fast and reproducible, not for anything else.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn with_vertices(nodes: u64) -> Graph<u64> {
    let mut graph = Graph::with_capacity(nodes as usize);
    for id in 0..nodes {
        graph.add_vertex(id);
    }
    graph
}

/// Every vertex gets three children in id order: deep BFS, long paths.
fn gen_tree(nodes: u64, _seed: u64) -> Graph<u64> {
    let mut graph = with_vertices(nodes);
    for child in 1..nodes {
        graph.add_edge(&((child - 1) / 3), &child);
    }
    graph
}

/// Preferential attachment by sampling endpoints of existing edges, so
/// high-degree vertices keep attracting new friends.
fn gen_scale_free(nodes: u64, seed: u64) -> Graph<u64> {
    let per_vertex = 8u64;
    let mut graph = with_vertices(nodes);
    let mut rng = FastRng::new(seed);
    let mut endpoints: Vec<u64> = Vec::with_capacity((nodes * per_vertex * 2) as usize);

    let clique = 5u64;
    for a in 0..clique {
        for b in (a + 1)..clique {
            graph.add_edge(&a, &b);
            endpoints.extend([a, b]);
        }
    }

    for v in clique..nodes {
        for _ in 0..per_vertex {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            // Duplicate picks fail on the existing edge and are just skipped.
            if graph.add_edge(&v, &target) {
                endpoints.extend([v, target]);
            }
        }
    }
    graph
}

/// Ring lattice with `k` neighbors per side and a few random shortcuts.
fn gen_small_world(nodes: u64, seed: u64) -> Graph<u64> {
    let k = 4u64;
    let rewire = 0.05f64;
    let mut graph = with_vertices(nodes);
    let mut rng = FastRng::new(seed);

    for v in 0..nodes {
        for step in 1..=k {
            let target = if rng.next_f64() < rewire {
                rng.next(nodes)
            } else {
                (v + step) % nodes
            };
            graph.add_edge(&v, &target);
        }
    }
    graph
}

/// Two dense clusters joined by a ten-vertex chain: the only route between
/// them runs through the bridge.
fn gen_barbell(nodes: u64, seed: u64) -> Graph<u64> {
    let bridge = 10u64;
    let cluster = (nodes - bridge) / 2;
    let mut graph = with_vertices(nodes);
    let mut rng = FastRng::new(seed);

    for base in [0, cluster + bridge] {
        for v in 0..cluster {
            for _ in 0..10 {
                graph.add_edge(&(base + v), &(base + rng.next(cluster)));
            }
        }
    }

    let mut prev = cluster - 1;
    for v in cluster..=(cluster + bridge) {
        graph.add_edge(&prev, &v);
        prev = v;
    }

    // Leftover vertex when the split is uneven joins the second cluster.
    for v in (2 * cluster + bridge)..nodes {
        graph.add_edge(&(cluster + bridge), &v);
    }
    graph
}
