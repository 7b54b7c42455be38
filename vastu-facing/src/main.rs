//! vastu-facing - property orientation report generator
//!
//! Loads a YAML dataset of property points and road lines, assigns each
//! property a facing direction from its nearest road, and writes a CSV report.
//!
//! # Usage
//!
//! ```bash
//! vastu-facing --data data/sample.yaml
//! vastu-facing --data data/sample.yaml --config configs/config.yaml --output report.csv
//! vastu-facing --data data/sample.yaml --max-distance 0.002 --drop-unmatched
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use vastu_facing::dataset::Dataset;
use vastu_facing::{
    FacingConfig, FacingError, MatchSummary, OrientationEngine, ReportBuilder, RoadIndex,
};

/// Assign compass facing directions to properties from nearby road geometry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset YAML with `points` and `roads`
    #[arg(short, long)]
    data: PathBuf,

    /// Configuration file path (defaults apply when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output CSV path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override matching.max_distance
    #[arg(long)]
    max_distance: Option<f64>,

    /// Leave properties with no nearby road out of the report
    #[arg(long)]
    drop_unmatched: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Using config: {}", path.display());
            FacingConfig::load(path)?
        }
        None => FacingConfig::load_default()?,
    };
    if let Some(max_distance) = args.max_distance {
        config.matching.max_distance = max_distance;
    }
    if args.drop_unmatched {
        config.report.include_unmatched = false;
    }
    config.validate()?;

    info!("Loading dataset: {}", args.data.display());
    let (points, roads) = Dataset::load(&args.data)?.into_parts()?;
    info!("Loaded {} point(s) and {} road(s)", points.len(), roads.len());

    let index = RoadIndex::build(roads)?;
    let engine = OrientationEngine::new(&index, config.matching.clone())?;
    let results = engine.run(&points);
    let summary = MatchSummary::from_results(&results);

    let report = match ReportBuilder::new(config.report.clone()).build(&points, &results) {
        Ok(report) => report,
        Err(e @ FacingError::EmptyResultSet { .. }) => {
            error!(
                "Check that the properties lie within {} units of a road and share its coordinate frame",
                config.matching.max_distance
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            report.write_csv(&mut writer)?;
            info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            report.write_csv(&mut writer)?;
        }
    }

    info!("Done: {}", summary);
    Ok(())
}
