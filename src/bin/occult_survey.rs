use anyhow::{Context, Result};
use serde::Serialize;

use occulting::algorithms::limb_velocity;
use occulting::config::SurveyConfig;
use occulting::models::{Camera, OccultingBody};
use occulting::services::{run_survey, FeasibilitySurvey};

/// Report artifact consumed by the external plotting/report layer.
#[derive(Debug, Serialize)]
struct SurveyReport {
    generated_at: chrono::DateTime<chrono::Utc>,
    camera: Camera,
    body: OccultingBody,
    survey: FeasibilitySurvey,
}

fn run(config_path: Option<&str>, output_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => SurveyConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => SurveyConfig::from_default_location()?,
    };

    let camera = config.camera();
    let body = config.body();
    let band = config.band()?;
    let grid = config.grid()?;

    let rate = limb_velocity(&config.limb_velocity_source())
        .context("Failed to resolve the limb rate")?;
    let apparent_diameter = body
        .apparent_diameter()
        .with_context(|| format!("Bad geometry for body '{}'", body.name))?;

    println!("=== Occultation Feasibility Survey ===");
    println!("Camera: {} ({} fps)", camera.name, camera.frames_per_second);
    println!(
        "The {} moves at {:.2} arcsec/s relative to the stars",
        body.name,
        body.mean_motion()?.value()
    );
    println!(
        "The apparent diameter of the {} is {:.2} arcsec",
        body.name,
        apparent_diameter.value()
    );
    println!("Effective limb rate: {:.4} arcsec/s", rate.value());
    println!();

    let survey = run_survey(&grid, rate, &camera, band)?;

    let summary = &survey.summary;
    println!("Grid cells evaluated: {}", summary.total_cells);
    println!(
        "  resolvable:   {:>6}  ({:.1}%)",
        summary.resolvable,
        summary.resolvable_fraction * 100.0
    );
    println!("  marginal:     {:>6}", summary.marginal);
    println!("  unresolvable: {:>6}", summary.unresolvable);
    if summary.skipped > 0 {
        println!("  skipped:      {:>6}", summary.skipped);
    }
    if let (Some(shortest), Some(longest)) =
        (summary.shortest_duration, summary.longest_duration)
    {
        println!(
            "Partial-phase durations span {:.3} ms to {:.1} ms",
            shortest.value() * 1e3,
            longest.value() * 1e3
        );
    }

    let report = SurveyReport {
        generated_at: chrono::Utc::now(),
        camera,
        body,
        survey,
    };

    if let Some(path) = output_path {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize the report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path))?;
        println!();
        println!("✓ Report written to {}", path);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(|s| s.as_str());
    let output_path = args.get(2).map(|s| s.as_str());

    match run(config_path, output_path) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("✗ Survey failed: {:#}", e);
            Err(e)
        }
    }
}
