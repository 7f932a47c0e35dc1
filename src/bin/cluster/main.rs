use std::{fs, path::PathBuf, io::Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use ljmd::{generator::ClusterGenerator, writers::positions::PositionWriter};

/// Writes a random, well-separated starting configuration as positions.txt and velocities.txt
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(short, long, default_value_t = 12)]
    n_particles: usize,

    #[arg(long, default_value_t = 4.0)]
    half_width: f64,

    #[arg(long, default_value_t = 2.0)]
    min_separation: f64,

    #[arg(long, default_value_t = 1.0)]
    max_speed: f64,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, LevelFilter::Info)
        .init();

    let args = Args::parse();
    let generator = ClusterGenerator {
        n_particles: args.n_particles,
        half_width: args.half_width,
        min_separation: args.min_separation,
        max_speed: args.max_speed,
        seed: args.seed,
        ..ClusterGenerator::default()
    };
    let (positions, velocities) = generator.generate()?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let positions_path = args.out_dir.join("positions.txt");
    let velocities_path = args.out_dir.join("velocities.txt");

    PositionWriter::new(positions_path.to_string_lossy())?.write_vectors(&positions)?;
    PositionWriter::new(velocities_path.to_string_lossy())?.write_vectors(&velocities)?;

    info!(
        "Wrote {} particles to {} and {}",
        positions.len(),
        positions_path.display(),
        velocities_path.display()
    );
    Ok(())
}
