use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use electrostatics::{scenario_by_name, AppSettings, ParticlePool};

/// Runs the particle simulation headless and logs population statistics.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults apply when it does not exist
    #[arg(short, long, default_value = AppSettings::SETTINGS_FILE)]
    settings: PathBuf,

    /// Overrides the number of frames to simulate
    #[arg(short, long)]
    frames: Option<u64>,

    /// Overrides the initial scenario
    #[arg(long)]
    scenario: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = AppSettings::load_from(&args.settings)
        .with_context(|| format!("loading {}", args.settings.display()))?;
    if let Some(frames) = args.frames {
        settings.frames = frames;
    }
    if let Some(scenario) = args.scenario {
        settings.scenario = scenario;
    }

    let scenario = scenario_by_name(&settings.scenario, settings.scenario_particles, settings.seed)?;
    let mut pool = ParticlePool::with_settings(settings.capacity, &settings.physics);
    scenario.populate(&mut pool, settings.world_width, settings.world_height);

    info!(
        "scenario '{}': {} particles in a {}x{} world, {} slots",
        settings.scenario,
        pool.live_count(),
        settings.world_width,
        settings.world_height,
        pool.capacity()
    );

    let started = Instant::now();
    for frame in 1..=settings.frames {
        let report = pool.tick(settings.world_width, settings.world_height);

        if settings.report_interval > 0 && frame % settings.report_interval == 0 {
            let snapshot = pool.snapshot();
            info!(
                "frame {}: {} live, {} in contact, kinetic energy {:.4e}",
                frame,
                report.live,
                report.colliding,
                snapshot.kinetic_energy()
            );
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    info!(
        "simulated {} frames in {:.3}s ({:.1} frames/s), {} particles remain",
        settings.frames,
        elapsed,
        settings.frames as f64 / elapsed.max(f64::EPSILON),
        pool.live_count()
    );

    Ok(())
}
