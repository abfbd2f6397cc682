use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, Local};
use clap::Parser;
use log::info;
use serde::Serialize;

use projectile_motion::core::ballistics::TrajectoryResult;
use projectile_motion::core::chart::{ChartView, Readout, export_svg};
use projectile_motion::core::help::equations_text;
use projectile_motion::core::playback::{FrameQueue, PlaybackDriver, TickOutcome};
use projectile_motion::core::session::{DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS, on_parameter_change};
use projectile_motion::core::units::SpeedUnit;

#[derive(Debug, Parser)]
#[command(name = "projectile_motion")]
#[command(about = "Sample and play back a projectile's flight under constant gravity")]
struct Cli {
    /// Launch angle in degrees
    #[arg(default_value_t = DEFAULT_ANGLE_DEG, allow_negative_numbers = true)]
    angle_deg: f64,

    /// Launch speed, expressed in --unit
    #[arg(default_value_t = DEFAULT_SPEED_MPS, allow_negative_numbers = true)]
    speed: f64,

    /// Speed unit: mps or kmph
    #[arg(long, default_value = "mps")]
    unit: SpeedUnit,

    /// Print the result as JSON instead of the readout
    #[arg(long)]
    json: bool,

    /// Play the flight frame by frame in the terminal
    #[arg(long, conflicts_with = "json")]
    animate: bool,

    /// Playback rate for --animate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write an SVG chart of the trajectory to this path
    #[arg(long, conflicts_with = "export_default")]
    export: Option<PathBuf>,

    /// Write an SVG chart to a timestamped file in the working directory
    #[arg(long)]
    export_default: bool,

    /// Print the projectile motion equations and exit
    #[arg(long)]
    equations: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    angle_deg: f64,
    speed: f64,
    unit: SpeedUnit,
    speed_mps: f64,
    readout: Readout,
    result: &'a TrajectoryResult,
}

/// Rejects inputs the sampler cannot turn into a bounded path: non-finite
/// values, and speeds past the top of the slider for the chosen unit.
fn validate_inputs(cli: &Cli) -> Result<()> {
    ensure!(
        cli.angle_deg.is_finite(),
        "Invalid angle: '{}'. Expected a finite number.",
        cli.angle_deg
    );
    ensure!(
        cli.speed.is_finite(),
        "Invalid velocity: '{}'. Expected a finite number.",
        cli.speed
    );
    let max_speed = cli.unit.slider_max();
    ensure!(
        cli.speed <= max_speed,
        "Velocity {} {} exceeds the maximum of {max_speed} {}.",
        cli.speed,
        cli.unit,
        cli.unit
    );
    Ok(())
}

fn default_export_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(now.format("trajectory_%Y%m%d_%H%M%S.svg").to_string())
}

fn print_readout(out: &mut impl Write, cli: &Cli, result: &TrajectoryResult) -> io::Result<()> {
    let readout = Readout::from_result(result);
    writeln!(
        out,
        "Angle: {:.1} deg | Velocity: {:.1} {}",
        cli.angle_deg, cli.speed, cli.unit
    )?;
    writeln!(out, "Range: {} m", readout.range)?;
    writeln!(out, "Max height: {} m", readout.max_height)?;
    writeln!(out, "Time of flight: {} s", readout.time_of_flight)?;
    writeln!(out, "Samples: {}", result.points.len())
}

fn print_json(out: &mut impl Write, cli: &Cli, result: &TrajectoryResult) -> Result<()> {
    let report = Report {
        angle_deg: cli.angle_deg,
        speed: cli.speed,
        unit: cli.unit,
        speed_mps: cli.unit.to_mps(cli.speed),
        readout: Readout::from_result(result),
        result,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}

fn animate(out: &mut impl Write, result: &TrajectoryResult, fps: u32) -> Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps));
    let mut view = ChartView::new();
    view.apply(result);

    let mut driver = PlaybackDriver::new(FrameQueue::new());
    driver.start(result.points.clone());

    while let Some(outcome) = driver.advance_frame(&mut view) {
        if outcome != TickOutcome::Presented {
            continue;
        }
        if let Some(marker) = view.marker {
            writeln!(
                out,
                "frame {:>4}  x = {:>8.2}  y = {:>8.2}",
                view.path.len() - 1,
                marker.x,
                marker.y
            )?;
            out.flush()?;
        }
        thread::sleep(frame_time);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.equations {
        write!(out, "{}", equations_text())?;
        return Ok(());
    }

    validate_inputs(&cli)?;
    let result = on_parameter_change(cli.angle_deg, cli.speed, cli.unit);
    info!(
        "Computed trajectory for {} deg at {} {}",
        cli.angle_deg, cli.speed, cli.unit
    );

    if cli.animate {
        animate(&mut out, &result, cli.fps).context("Failed to play back trajectory")?;
    }

    if cli.json {
        print_json(&mut out, &cli, &result)?;
    } else {
        print_readout(&mut out, &cli, &result).context("Failed to write readout")?;
    }

    let export_path = match (cli.export.clone(), cli.export_default) {
        (Some(path), _) => Some(path),
        (None, true) => Some(default_export_path(Local::now())),
        (None, false) => None,
    };
    if let Some(path) = export_path {
        export_svg(&result, &path)?;
        writeln!(out, "Chart written to {}", path.display())?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run()
}
