//! Clinical zone classification from the command line.
//!
//! # Commands
//!
//! - `mesh-zones classify -i head.json -o zones.json` - Classify vertices and write a zone report
//! - `mesh-zones list-zones` - Print the zone names in canonical order
//!
//! Set `RUST_LOG=info` (or `debug`) for progress output.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mesh_zones::{classify_zones, ClinicalZone, EyeSkinFallback, SubdivideParams, ZoneReport};
use tracing::info;

use crate::input::HeadInput;

/// Classify head mesh vertices into clinical zones
#[derive(Parser)]
#[command(name = "mesh-zones")]
#[command(about = "Classify head mesh vertices into clinical zones", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the vertices of a head mesh and write a zone report
    Classify(ClassifyArgs),

    /// Print the zone names in canonical order
    ListZones,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Head mesh JSON with `vertices` and optional `regions`
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the zone report
    #[arg(short, long)]
    output: PathBuf,

    /// Ignore supplied masks and classify by position alone
    #[arg(long)]
    position_only: bool,

    /// Fail on malformed masks instead of treating them as absent
    #[arg(long)]
    strict: bool,

    /// Eye skin when the eyeball mask covers the whole eye region
    #[arg(long, value_enum, default_value_t = EyeFallback::Never)]
    eye_fallback: EyeFallback,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EyeFallback {
    /// Leave the eye skin zones empty
    Never,
    /// Use the whole eye region as skin
    Always,
}

impl From<EyeFallback> for EyeSkinFallback {
    fn from(value: EyeFallback) -> Self {
        match value {
            EyeFallback::Never => Self::Never,
            EyeFallback::Always => Self::Always,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => classify(&args),
        Commands::ListZones => {
            list_zones();
            Ok(())
        }
    }
}

fn classify(args: &ClassifyArgs) -> Result<()> {
    let head = HeadInput::read(&args.input)?;
    let positions = head.positions();
    let regions = if args.position_only {
        None
    } else {
        head.region_map(args.strict)?
    };
    info!(
        input = %args.input.display(),
        vertices = positions.len(),
        masks = regions.as_ref().map_or(0, |r| r.len()),
        "Loaded head mesh"
    );

    let params = SubdivideParams::new().with_eye_skin_fallback(args.eye_fallback.into());
    let (zones, method) = classify_zones(&positions, regions.as_ref(), &params);

    let report =
        ZoneReport::from_classification(&zones, positions.len(), regions.as_ref(), method);
    report
        .write_json(&args.output, args.pretty)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("{:?}: {}", method, zones.coverage());
    Ok(())
}

fn list_zones() {
    for zone in ClinicalZone::ALL {
        println!("{zone}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_flags() {
        let cli = Cli::try_parse_from([
            "mesh-zones",
            "classify",
            "-i",
            "head.json",
            "-o",
            "zones.json",
            "--eye-fallback",
            "always",
            "--pretty",
        ])
        .unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.eye_fallback, EyeFallback::Always);
        assert!(args.pretty);
        assert!(!args.position_only);
    }

    #[test]
    fn classify_requires_output() {
        assert!(Cli::try_parse_from(["mesh-zones", "classify", "-i", "head.json"]).is_err());
    }

    fn write_head(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("head.json");
        let json = r#"{
            "vertices": [[0.0, 0.0, 1.0], [0.0, 5.0, 1.0], [0.0, 10.0, 1.0]],
            "regions": { "neck": [0], "forehead": [2] }
        }"#;
        std::fs::write(&path, json).unwrap();
        path
    }

    fn args(input: PathBuf, output: PathBuf, position_only: bool) -> ClassifyArgs {
        ClassifyArgs {
            input,
            output,
            position_only,
            strict: false,
            eye_fallback: EyeFallback::Never,
            pretty: false,
        }
    }

    #[test]
    fn classify_writes_mask_guided_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zones.json");
        classify(&args(write_head(dir.path()), output.clone(), false)).unwrap();

        let report = ZoneReport::read_json(&output).unwrap();
        assert_eq!(report.vertex_count, 3);
        assert_eq!(report.mask_names, vec!["forehead", "neck"]);
        assert!(report.note.is_none());
        assert_eq!(
            report.entry(ClinicalZone::Neck).unwrap().vertex_indices,
            vec![0]
        );
    }

    #[test]
    fn classify_position_only_adds_note() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zones.json");
        classify(&args(write_head(dir.path()), output.clone(), true)).unwrap();

        let report = ZoneReport::read_json(&output).unwrap();
        assert!(report.mask_names.is_empty());
        assert!(report.note.is_some());
    }

    #[test]
    fn classify_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = classify(&args(
            dir.path().join("missing.json"),
            dir.path().join("zones.json"),
            false,
        ));
        assert!(result.is_err());
    }
}
