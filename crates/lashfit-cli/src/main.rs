use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lashfit_core::{catalog, classifier, EyeShape, LandmarkMap, LandmarkPoint, Side};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "lashfit", about = "Eye-shape analysis and lash-styling recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze face landmarks and print the styling recommendation
    Analyze {
        /// Landmark JSON file, or "-" for stdin: an object keyed by landmark
        /// index or a dense array of {x, y} points in index order
        file: PathBuf,
        /// Analyze a single eye instead of the whole face
        #[arg(short, long, value_enum)]
        side: Option<SideArg>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the recommendation catalog
    Catalog {
        /// Single shape code to look up; unknown codes get the fallback entry
        #[arg(short, long)]
        shape: Option<String>,
    },
    /// List the shape codes and their classification thresholds
    Shapes,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Side {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

/// Landmark JSON as emitted by upstream face-mesh services: either an object
/// keyed by landmark index or a dense array in index order.
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkInput {
    Indexed(HashMap<u32, LandmarkPoint>),
    Dense(Vec<LandmarkPoint>),
}

impl LandmarkInput {
    fn into_map(self) -> LandmarkMap {
        match self {
            LandmarkInput::Indexed(map) => map,
            LandmarkInput::Dense(points) => points
                .into_iter()
                .enumerate()
                .map(|(i, p)| (i as u32, p))
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, side, pretty } => analyze(&file, side, pretty),
        Commands::Catalog { shape } => print_catalog(shape.as_deref()),
        Commands::Shapes => {
            print_shapes();
            Ok(())
        }
    }
}

fn analyze(file: &Path, side: Option<SideArg>, pretty: bool) -> Result<()> {
    let raw = read_input(file)?;
    let landmarks = serde_json::from_str::<LandmarkInput>(&raw)
        .context("malformed landmark JSON")?
        .into_map();
    tracing::debug!(count = landmarks.len(), "landmarks loaded");

    let output = match side {
        Some(side) => serde_json::to_value(lashfit_core::analyze_eye(&landmarks, side.into())?)?,
        None => serde_json::to_value(lashfit_core::analyze_face(&landmarks)?)?,
    };
    print_json(&output, pretty)
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read landmarks from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))
    }
}

fn print_catalog(shape: Option<&str>) -> Result<()> {
    let output = match shape {
        Some(code) => serde_json::to_value(catalog::lookup_code(code))?,
        None => {
            let mut entries = serde_json::Map::new();
            for shape in EyeShape::ALL {
                entries.insert(shape.code().into(), serde_json::to_value(catalog::lookup(shape))?);
            }
            serde_json::Value::Object(entries)
        }
    };
    print_json(&output, true)
}

fn print_shapes() {
    println!(
        "monolid     open_ratio < {} and tilt_angle < {}",
        classifier::NARROW_OPEN_RATIO,
        classifier::DOWNWARD_TILT
    );
    println!(
        "round       open_ratio > {} and tilt_angle > {}",
        classifier::WIDE_OPEN_RATIO,
        classifier::UPWARD_TILT
    );
    println!("downturned  tilt_angle < {}", classifier::DOWNWARD_TILT);
    println!("upturned    tilt_angle > {}", classifier::UPWARD_TILT);
    println!("almond      otherwise");
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
