//! End-to-end checks of the forward model, the inverse solver, and the
//! configuration layer working together.

use approx::assert_relative_eq;
use qtty::angular::{Arcsecond, MilliArcseconds};
use qtty::length::{Kilometer, Parsecs};
use qtty::time::Seconds;

use occulting::algorithms::{
    evaluate_sampling, limb_velocity, partial_phase_duration, recover_angular_diameter,
    recover_physical_radius,
};
use occulting::config::SurveyConfig;
use occulting::models::{Camera, OccultingBody, Star};
use occulting::services::{assess_star, run_survey};
use occulting::{FeasibilityVerdict, LimbVelocity, MarginalBand};

/// The question the model was built for: a 1 mas star, the lunar limb at
/// 0.55 arcsec/s, and a 450 Hz camera. The answer is no.
#[test]
fn motivating_scenario_is_unresolvable() {
    let diameter = MilliArcseconds::new(1.0).to::<Arcsecond>();
    let rate = LimbVelocity::new(0.55);

    let duration = partial_phase_duration(diameter, rate).unwrap();
    assert_relative_eq!(duration.value(), 1.82e-3, max_relative = 1e-2);

    let frame_period = Camera::default().frame_period().unwrap();
    assert_relative_eq!(frame_period.value(), 2.22e-3, max_relative = 1e-2);

    let assessment = evaluate_sampling(duration, frame_period, MarginalBand::default()).unwrap();
    assert_eq!(assessment.frame_count, 0);
    assert_eq!(assessment.verdict, FeasibilityVerdict::Unresolvable);
}

/// Ten times the angular diameter is comfortably resolvable with the same
/// camera: eight frames inside the partial phase.
#[test]
fn ten_milliarcsecond_scenario_is_resolvable() {
    let diameter = MilliArcseconds::new(10.0).to::<Arcsecond>();
    let rate = LimbVelocity::new(0.55);

    let duration = partial_phase_duration(diameter, rate).unwrap();
    assert_relative_eq!(duration.value(), 18.2e-3, max_relative = 1e-2);

    let frame_period = Camera::default().frame_period().unwrap();
    let assessment = evaluate_sampling(duration, frame_period, MarginalBand::default()).unwrap();
    assert_eq!(assessment.frame_count, 8);
    assert_eq!(assessment.verdict, FeasibilityVerdict::Resolvable);
}

/// A timed event plus the limb rate and distance gives back the star.
#[test]
fn measured_duration_recovers_the_star() {
    let star = Star::new(
        "target",
        qtty::length::nominal::SolarRadiuses::new(3.0),
        Parsecs::new(25.0),
    );
    let moon = OccultingBody::moon();
    let rate = moon.limb_velocity(0.8).unwrap();

    // Forward: what the camera would time.
    let diameter = star.angular_diameter().unwrap();
    let measured = partial_phase_duration(diameter, rate).unwrap();

    // Inverse: what an observer would conclude.
    let recovered_diameter = recover_angular_diameter(measured, rate).unwrap();
    assert_relative_eq!(
        recovered_diameter.value(),
        diameter.value(),
        max_relative = 1e-12
    );

    let recovered_radius =
        recover_physical_radius(measured, rate, star.distance.to::<Kilometer>()).unwrap();
    assert_relative_eq!(
        recovered_radius.value(),
        star.radius.to::<Kilometer>().value(),
        max_relative = 1e-12
    );
}

/// The grazing factor stretches the partial phase without changing what the
/// camera can resolve per frame.
#[test]
fn oblique_graze_lengthens_the_phase() {
    let moon = OccultingBody::moon();
    let star = Star::new(
        "graze target",
        qtty::length::nominal::SolarRadiuses::new(5.0),
        Parsecs::new(20.0),
    );
    let camera = Camera::default();
    let band = MarginalBand::default();

    let central = assess_star(&star, moon.limb_velocity(1.0).unwrap(), &camera, band).unwrap();
    let grazing = assess_star(&star, moon.limb_velocity(0.1).unwrap(), &camera, band).unwrap();

    assert!(grazing.duration.value() > central.duration.value());
    assert!(grazing.frame_count >= central.frame_count);
}

/// Configuration defaults drive the whole pipeline to the same answer as the
/// hand-built scenario.
#[test]
fn default_config_runs_the_canonical_survey() {
    let config = SurveyConfig::default();
    let rate = limb_velocity(&config.limb_velocity_source()).unwrap();
    assert_relative_eq!(rate.value(), 0.5494, max_relative = 1e-3);

    let survey = run_survey(
        &config.grid().unwrap(),
        rate,
        &config.camera(),
        config.band().unwrap(),
    )
    .unwrap();

    assert_eq!(survey.summary.total_cells, 10_000);
    assert_eq!(survey.summary.skipped, 0);
    // The sweep must contain both outcomes, or the question answers itself.
    assert!(survey.summary.resolvable > 0);
    assert!(survey.summary.unresolvable > 0);
}

/// Degenerate and invalid inputs fail loudly at every stage.
#[test]
fn failures_are_typed_not_silent() {
    use occulting::algorithms::LimbVelocitySource;
    use occulting::ModelError;
    use qtty::time::Days;

    let zero_rate = partial_phase_duration(
        MilliArcseconds::new(1.0).to::<Arcsecond>(),
        LimbVelocity::new(0.0),
    );
    assert!(matches!(zero_rate, Err(ModelError::InvalidInput(_))));

    let tangential = limb_velocity(&LimbVelocitySource::MeanOrbital {
        period: Days::new(27.3),
        grazing_factor: 0.0,
    });
    assert!(matches!(tangential, Err(ModelError::DegenerateGeometry(_))));

    let negative_duration = evaluate_sampling(
        Seconds::new(-1.0),
        Seconds::new(0.01),
        MarginalBand::default(),
    );
    assert!(matches!(
        negative_duration,
        Err(ModelError::InvalidInput(_))
    ));
}
