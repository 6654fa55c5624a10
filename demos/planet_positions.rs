//! Print heliocentric planet positions at a given date.
//!
//! Usage:
//!   cargo run --example planet_positions -- --date 2024-03-20T00:00:00
//!   cargo run --example planet_positions -- --jd 2451545.0 --body mars --samples 687
//!   RUST_LOG=heliopos=debug cargo run --example planet_positions -- --display
use clap::Parser;
use heliopos::{
    display::compress_distance,
    time::{date_to_jd, format_jd_date, jd_now},
    Body, EphemParams, HelioposError, SolarSystem,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "planet_positions")]
#[command(about = "Heliocentric ecliptic positions of the planets")]
struct Cli {
    /// Calendar date, YYYY-MM-DDTHH:MM:SS (UTC)
    #[arg(long, conflicts_with = "jd")]
    date: Option<String>,

    /// Julian Date (defaults to now)
    #[arg(long)]
    jd: Option<f64>,

    /// Restrict output to one planet
    #[arg(long)]
    body: Option<String>,

    /// Also sample a daily trajectory of this many points (needs --body)
    #[arg(long, requires = "body")]
    samples: Option<usize>,

    /// Print display-compressed coordinates instead of AU
    #[arg(long, default_value = "false")]
    display: bool,

    /// Kepler solver tolerance (radians)
    #[arg(long, default_value = "1e-6")]
    tolerance: f64,
}

fn main() -> Result<(), HelioposError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let jd = match (&cli.date, cli.jd) {
        (Some(date), _) => date_to_jd(date)?,
        (None, Some(jd)) => jd,
        (None, None) => jd_now()?,
    };

    let params = EphemParams::builder()
        .kepler_tolerance(cli.tolerance)
        .build()?;
    let scale = params.display_scale;
    let system = SolarSystem::new(params);

    println!("{} (JD {jd:.5})", format_jd_date(jd));

    let bodies: Vec<Body> = match &cli.body {
        Some(name) => vec![name.parse()?],
        None => Body::ALL.to_vec(),
    };

    for body in &bodies {
        let mut p = system.position_of(*body, jd)?;
        if cli.display {
            p = compress_distance(&p, &scale);
        }
        println!(
            "{:<8} x={:>12.6} y={:>12.6} z={:>12.6}  r={:.6}",
            body.name(),
            p.x,
            p.y,
            p.z,
            p.norm()
        );
    }

    if let (Some(samples), [body]) = (cli.samples, bodies.as_slice()) {
        let path = system.trajectory_of(*body, jd, samples)?;
        let (r_min, r_max) = path
            .iter()
            .map(|p| p.norm())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            });
        println!(
            "{} samples of {body} until {}: r in [{r_min:.6}, {r_max:.6}] AU",
            path.len(),
            format_jd_date(path.jd_of(path.len().saturating_sub(1)))
        );
    }

    Ok(())
}
