//! geodist CLI - distance fields on triangle meshes.
//!
//! Usage: geodist <COMMAND> [OPTIONS] <INPUT>
//!
//! Run `geodist --help` for available commands. Set `RUST_LOG=debug` for
//! loader and algorithm diagnostics.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use geodist::algo::{propagate_many, DistanceAlgorithm, Metric, UNREACHABLE};
use geodist::io;
use geodist::mesh::{TriangleMesh, VertexId};

#[derive(Parser)]
#[command(name = "geodist")]
#[command(author, version, about = "Per-vertex distance fields on triangle meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Compute distances from a source vertex
    Distance {
        /// Input mesh file
        input: PathBuf,

        /// Source vertex index
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        source: i64,

        /// Distance metric: dijkstra (0) or euclidean (1)
        #[arg(short, long, default_value = "dijkstra")]
        metric: Metric,

        /// Highlight radius used for the summary and the output colors
        #[arg(short, long, default_value = "1.0")]
        radius: f64,

        /// Write a colored PLY file with the distance field
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the distance of every vertex
        #[arg(long)]
        print: bool,
    },

    /// Compare surface (graph) distance against straight-line distance
    Compare {
        /// Input mesh file
        input: PathBuf,

        /// Source vertex index
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        source: i64,

        /// Additionally sample this many evenly spaced sources in parallel
        #[arg(long, default_value = "0")]
        samples: usize,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,

        Commands::Distance {
            input,
            source,
            metric,
            radius,
            output,
            print,
        } => cmd_distance(&input, source, metric, radius, output.as_deref(), print)?,

        Commands::Compare {
            input,
            source,
            samples,
        } => cmd_compare(&input, source, samples)?,
    }

    Ok(())
}

fn load_mesh(input: &Path) -> Result<TriangleMesh, Box<dyn std::error::Error>> {
    log::info!("Loading mesh from: {}", input.display());
    let start = Instant::now();
    let mesh = io::load(input)?;
    log::info!(
        "Loaded {} vertices, {} triangles ({:.2?})",
        mesh.num_vertices(),
        mesh.num_triangles(),
        start.elapsed()
    );
    Ok(mesh)
}

fn load_algorithm(
    metric: Metric,
    mesh: &TriangleMesh,
) -> Result<Box<dyn DistanceAlgorithm>, Box<dyn std::error::Error>> {
    let mut algorithm = metric.create();
    let start = Instant::now();
    algorithm.load_mesh(mesh)?;
    log::info!("Prepared {} metric ({:.2?})", metric, start.elapsed());
    Ok(algorithm)
}

/// Count connected components with repeated graph sweeps.
fn count_components(algorithm: &dyn DistanceAlgorithm, n: usize) -> geodist::error::Result<usize> {
    let mut seen = vec![false; n];
    let mut components = 0;

    for start in 0..n {
        if seen[start] {
            continue;
        }
        components += 1;
        let field = algorithm.propagate(VertexId::new(start))?;
        for (v, _) in field.reachable_iter() {
            seen[v.index()] = true;
        }
    }

    Ok(components)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load_mesh(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.num_triangles());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    if let Some(stats) = mesh.edge_length_stats() {
        println!(
            "Edge length: min={:.6}, mean={:.6}, max={:.6}",
            stats.min, stats.mean, stats.max
        );
    }

    let isolated = mesh.num_isolated_vertices();
    if isolated > 0 {
        println!("Isolated vertices: {}", isolated);
    }

    let graph = load_algorithm(Metric::Dijkstra, &mesh)?;
    let components = count_components(graph.as_ref(), mesh.num_vertices())?;
    println!("Connected components: {}", components);

    Ok(())
}

fn cmd_distance(
    input: &Path,
    source: i64,
    metric: Metric,
    radius: f64,
    output: Option<&Path>,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load_mesh(input)?;
    let algorithm = load_algorithm(metric, &mesh)?;

    let start = Instant::now();
    let field = algorithm.propagate_index(source)?;
    let elapsed = start.elapsed();

    if print {
        for (v, d) in field.iter() {
            println!("{}: {}", v, d);
        }
    }

    println!("Metric: {}", metric);
    println!("Source: {}", field.source());
    println!(
        "Reached: {}/{} vertices ({:.2?})",
        field.reachable_count(),
        field.len(),
        elapsed
    );
    if let Some((v, d)) = field.farthest_vertex() {
        println!("Farthest: vertex {} at {:.6}", v, d);
    }
    println!(
        "Within radius {}: {} vertices",
        radius,
        field.within_radius(radius).len()
    );

    if let Some(output) = output {
        io::ply::save_distance_field(&mesh, &field, radius, output)?;
        println!("Saved: {}", output.display());
    }

    Ok(())
}

fn cmd_compare(input: &Path, source: i64, samples: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load_mesh(input)?;
    let graph = load_algorithm(Metric::Dijkstra, &mesh)?;
    let direct = load_algorithm(Metric::Euclidean, &mesh)?;

    let g = graph.propagate_index(source)?;
    let d = direct.propagate_index(source)?;

    let ratios: Vec<f64> = g
        .iter()
        .filter(|&(v, gd)| gd != UNREACHABLE && d.distance(v) > 0.0)
        .map(|(v, gd)| gd / d.distance(v))
        .collect();

    println!("Source: {}", g.source());
    println!(
        "Unreachable along the surface: {}",
        g.len() - g.reachable_count()
    );
    if ratios.is_empty() {
        println!("No vertex has both a surface and a nonzero straight-line distance");
    } else {
        let max = ratios.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
        println!("Surface / straight-line ratio: mean={:.4}, max={:.4}", mean, max);
    }

    if samples > 0 {
        let n = mesh.num_vertices();
        let step = (n / samples).max(1);
        let sources: Vec<VertexId> = (0..n).step_by(step).take(samples).map(VertexId::new).collect();

        log::info!("Sampling {} sources in parallel", sources.len());
        let start = Instant::now();
        let graph_fields = propagate_many(graph.as_ref(), &sources)?;
        let direct_fields = propagate_many(direct.as_ref(), &sources)?;

        let mut worst = (VertexId::new(0), VertexId::new(0), 1.0_f64);
        for (gf, df) in graph_fields.iter().zip(&direct_fields) {
            for (v, gd) in gf.reachable_iter() {
                let dd = df.distance(v);
                if dd > 0.0 && gd / dd > worst.2 {
                    worst = (gf.source(), v, gd / dd);
                }
            }
        }

        println!(
            "Sampled {} sources ({:.2?}); largest ratio {:.4} from {} to {}",
            sources.len(),
            start.elapsed(),
            worst.2,
            worst.0,
            worst.1
        );
    }

    Ok(())
}
