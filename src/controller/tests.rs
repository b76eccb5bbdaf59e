//! Tests for the rate controller.
use super::rate::{RateController, State};
use crate::config::{Config, EngineConfig, PacingConfig};
use crate::error::Error;
use crate::feedback::FeedbackSample;
use crate::fuzzy::{InferenceEngine, LinguisticVariable, OutputVariable};
use crate::tuning;
use std::time::Duration;

fn fuzzy_config() -> Config {
    Config::default()
}

fn aimd_config() -> Config {
    Config {
        pacing: PacingConfig {
            enable_fuzzy: false,
            initial_interval: Duration::from_millis(10),
            ..PacingConfig::default()
        },
        ..Config::default()
    }
}

/// An engine whose only rule covers drops in [0, 20] and delays in
/// [0, 100] us, leaving everything else as a zero-mass region.
fn narrow_engine() -> InferenceEngine {
    let mut drops = LinguisticVariable::new("drops", 0.0, 100.0).unwrap();
    drops.add_set("lo", 0.0, 10.0, 20.0).unwrap();
    let mut delay = LinguisticVariable::new("delay", 0.0, 1000.0).unwrap();
    delay.add_set("fast", 0.0, 50.0, 100.0).unwrap();
    let mut interval = OutputVariable::new("interval", 0.0, 100.0).unwrap();
    interval.add_set("mid", 0.0, 50.0, 100.0).unwrap();

    let mut engine =
        InferenceEngine::new(drops, delay, interval, &EngineConfig::default()).unwrap();
    engine.add_rule("lo", "fast", "mid").unwrap();
    engine
}

#[test]
fn test_controller_starts_idle_at_the_initial_interval() {
    let controller = RateController::new(fuzzy_config()).unwrap();
    assert_eq!(controller.state, State::Idle);
    assert_eq!(controller.current_interval(), Duration::from_millis(10));
    assert_eq!(controller.minimum_delay(), None);
}

#[test]
fn test_with_engine_rejects_an_empty_rule_base() {
    let in1 = LinguisticVariable::new("in1", 0.0, 100.0).unwrap();
    let in2 = LinguisticVariable::new("in2", 0.0, 100.0).unwrap();
    let out = OutputVariable::new("out", 0.0, 100.0).unwrap();
    let engine = InferenceEngine::new(in1, in2, out, &EngineConfig::default()).unwrap();

    assert_eq!(
        RateController::with_engine(engine, fuzzy_config()).err(),
        Some(Error::EngineNotConfigured)
    );
}

#[test]
fn test_aimd_fallback_speeds_up_without_drops() {
    let mut controller = RateController::new(aimd_config()).unwrap();
    let interval = controller.on_sample(FeedbackSample::new(0, Duration::from_millis(5)));
    assert_eq!(interval, Duration::from_millis(10).mul_f64(0.75));
    assert_eq!(controller.current_interval(), interval);
}

#[test]
fn test_aimd_fallback_slows_down_on_drops() {
    let mut controller = RateController::new(aimd_config()).unwrap();
    let interval = controller.on_sample(FeedbackSample::new(42, Duration::from_millis(5)));
    assert_eq!(interval, Duration::from_millis(20));
}

#[test]
fn test_fuzzy_interval_crosses_the_unit_boundary_both_ways() {
    let mut controller = RateController::new(fuzzy_config()).unwrap();
    let delay = Duration::from_micros(100);

    // The engine works in microseconds; a clean sample must come back as a
    // sub-millisecond Duration, matching a direct engine evaluation of the
    // same sample converted by hand.
    let interval = controller.on_sample(FeedbackSample::new(0, delay));
    assert!(interval < Duration::from_micros(1000), "got {interval:?}");

    let mut engine = tuning::reference_engine(&EngineConfig::default()).unwrap();
    let delay_us = delay.as_secs_f64() * 1_000_000.0;
    let expected_us = engine.evaluate(0.0, delay_us).unwrap();
    assert_eq!(interval, Duration::from_secs_f64(expected_us / 1_000_000.0));
}

#[test]
fn test_congested_samples_stretch_the_interval() {
    let mut controller = RateController::new(fuzzy_config()).unwrap();
    let interval = controller.on_sample(FeedbackSample::new(50_000, Duration::from_secs(4)));
    assert!(interval > Duration::from_millis(500), "got {interval:?}");
}

#[test]
fn test_minimum_delay_trails_the_feedback_by_one_sample() {
    let mut controller = RateController::new(fuzzy_config()).unwrap();

    controller.on_sample(FeedbackSample::new(0, Duration::from_millis(5)));
    assert_eq!(controller.minimum_delay(), None);

    controller.on_sample(FeedbackSample::new(0, Duration::from_millis(3)));
    assert_eq!(controller.minimum_delay(), Some(Duration::from_millis(5)));

    controller.on_sample(FeedbackSample::new(0, Duration::from_millis(7)));
    assert_eq!(controller.minimum_delay(), Some(Duration::from_millis(3)));

    // A larger previous delay must not raise the minimum back up.
    controller.on_sample(FeedbackSample::new(0, Duration::from_millis(9)));
    assert_eq!(controller.minimum_delay(), Some(Duration::from_millis(3)));
}

#[test]
fn test_zero_mass_holds_the_previous_interval() {
    let mut controller =
        RateController::with_engine(narrow_engine(), fuzzy_config()).unwrap();

    // Both inputs on their peaks: full-strength firing, symmetric triangle.
    let good = controller.on_sample(FeedbackSample::new(10, Duration::from_micros(50)));

    // A delay far outside the only delay set fires nothing; the controller
    // must hold rather than emit an undefined interval.
    let held = controller.on_sample(FeedbackSample::new(10, Duration::from_micros(500)));
    assert_eq!(held, good);
    assert_eq!(controller.current_interval(), good);
}

#[test]
fn test_previous_sample_fields_are_updated_each_pass() {
    let mut controller = RateController::new(fuzzy_config()).unwrap();
    controller.on_sample(FeedbackSample::new(7, Duration::from_millis(2)));
    assert_eq!(controller.state, State::Active);
    assert_eq!(controller.previous_drops, 7);
    assert_eq!(controller.previous_delay, Duration::from_millis(2));

    controller.on_sample(FeedbackSample::new(0, Duration::from_millis(1)));
    assert_eq!(controller.previous_drops, 0);
    assert_eq!(controller.previous_delay, Duration::from_millis(1));
}
