//! Command-line front end: extract the dominant planes of an XYZ point file.
//!
//! ```text
//! plane-ransac cloud.xyz 0.99 0.2 0.05 --planes 3
//! ```
//!
//! writes `cloud_p1.xyz`, `cloud_p2.xyz`, `cloud_p3.xyz` with each plane's
//! inliers and `cloud_p0.xyz` with the remaining points.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use plane_ransac::io::{read_xyz, write_xyz};
use plane_ransac::{DominantPlaneDetector, RansacSettings, Result};

/// Dominant plane detection with a concurrent RANSAC pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XYZ file (header line, then one `x y z` point per line)
    input: PathBuf,

    /// Confidence of drawing at least one all-inlier sample, in (0, 1)
    confidence: f64,

    /// Expected fraction of points on the dominant plane, in (0, 1)
    inlier_ratio: f64,

    /// Distance below which a point supports a plane
    epsilon: f64,

    /// Number of dominant planes to extract
    #[arg(short, long)]
    planes: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Size of the scoring thread pool
    #[arg(short, long)]
    threads: Option<usize>,

    /// TOML settings file; positional values override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<RansacSettings> {
        let mut settings = match &self.config {
            Some(path) => RansacSettings::from_toml_file(path)?,
            None => RansacSettings::default(),
        };
        settings.confidence = self.confidence;
        settings.inlier_ratio = self.inlier_ratio;
        settings.inlier_threshold = self.epsilon;
        if let Some(planes) = self.planes {
            settings.plane_count = planes;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }
}

/// `<stem>_p<index>.xyz` next to the input, where `<stem>` drops a `.xyz`
/// extension.
fn output_path(input: &Path, index: usize) -> PathBuf {
    let stem = match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("xyz") => input.with_extension(""),
        _ => input.to_path_buf(),
    };
    let mut name = stem.into_os_string();
    name.push(format!("_p{}.xyz", index));
    PathBuf::from(name)
}

fn run(args: &Args) -> Result<()> {
    let settings = args.settings()?;
    let mut detector = DominantPlaneDetector::new(&settings)?;
    log::info!(
        "confidence {}, inlier ratio {}, epsilon {}: {} iterations per plane",
        settings.confidence,
        settings.inlier_ratio,
        settings.inlier_threshold,
        detector.iterations()
    );

    let cloud = read_xyz(&args.input)?;
    log::info!("{} points read from {}", cloud.len(), args.input.display());

    let detection = detector.detect(cloud)?;

    for (k, plane) in detection.planes.iter().enumerate() {
        let path = output_path(&args.input, k + 1);
        write_xyz(&path, &plane.inliers)?;
        log::info!("{} inliers written to {}", plane.inliers.len(), path.display());
    }
    let path = output_path(&args.input, 0);
    write_xyz(&path, &detection.remainder)?;
    log::info!(
        "{} remaining points written to {}",
        detection.remainder.len(),
        path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::error!("could not size the thread pool: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let start = Instant::now();
    let result = run(&args);
    let elapsed = start.elapsed();

    match result {
        Ok(()) => {
            println!("Execution time: {:?}", elapsed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_drop_the_xyz_extension() {
        let input = Path::new("data/scan.xyz");
        assert_eq!(output_path(input, 1), PathBuf::from("data/scan_p1.xyz"));
        assert_eq!(output_path(input, 0), PathBuf::from("data/scan_p0.xyz"));
    }

    #[test]
    fn output_names_keep_other_extensions() {
        assert_eq!(
            output_path(Path::new("scan.txt"), 2),
            PathBuf::from("scan.txt_p2.xyz")
        );
        assert_eq!(output_path(Path::new("scan"), 3), PathBuf::from("scan_p3.xyz"));
    }

    #[test]
    fn positional_values_override_config_defaults() {
        let args = Args::parse_from(["plane-ransac", "in.xyz", "0.9", "0.3", "0.05", "-p", "2"]);
        let settings = args.settings().unwrap();
        assert_eq!(settings.confidence, 0.9);
        assert_eq!(settings.inlier_ratio, 0.3);
        assert_eq!(settings.inlier_threshold, 0.05);
        assert_eq!(settings.plane_count, 2);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn missing_positionals_are_a_usage_error() {
        assert!(Args::try_parse_from(["plane-ransac", "in.xyz", "0.9"]).is_err());
    }
}
