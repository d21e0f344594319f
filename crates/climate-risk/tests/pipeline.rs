//! Tests for the `Pipeline`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use climate_risk::{assemble, Bands, ModelSlot, Pipeline, PipelineError, Request, RiskTier};

mod common;

fn constant_pipeline(climate: f64, severity: f64) -> Pipeline {
    Pipeline::new(
        ModelSlot::new(common::Constant {
            name: "climate",
            score: climate,
        }),
        ModelSlot::new(common::Constant {
            name: "severity",
            score: severity,
        }),
    )
}

#[test]
fn moderate_request_gets_base_recommendations() -> Result<(), String> {
    let pipeline = constant_pipeline(120.0, 40.0);
    assert!(pipeline.is_available());

    let features = assemble(20.0, 415.0, 3.3, 100.0, 60.0, 15.0)?;
    let scores = pipeline.predict(&features)?;
    assert!(float_cmp::approx_eq!(f64, scores.climate, 120.0));
    assert!(float_cmp::approx_eq!(f64, scores.severity, 40.0));

    let assessment = pipeline.classify(&scores);
    assert_eq!(assessment.climate_tier, RiskTier::Moderate);
    assert_eq!(assessment.severity_tier, RiskTier::Moderate);
    assert_eq!(
        assessment.recommendations,
        vec!["Monitor local weather patterns", "Prepare for potential disruptions"]
    );
    assert_eq!(assessment.climate_label(), "Moderate Risk");
    assert_eq!(assessment.severity_label(), "Moderate");

    Ok(())
}

#[test]
fn run_chains_every_stage() -> Result<(), String> {
    let pipeline = constant_pipeline(250.0, 10.0);
    let request = Request {
        temperature: 35.0,
        co2_emissions: 480.0,
        sea_level_rise: 8.0,
        precipitation: 20.0,
        humidity: 30.0,
        wind_speed: 5.0,
    };

    let report = pipeline.run(&request)?;
    assert_eq!(report.features, request.features()?);
    assert_eq!(report.assessment.climate_tier, RiskTier::Severe);
    assert_eq!(report.assessment.severity_tier, RiskTier::Low);
    assert_eq!(report.assessment.recommendations.len(), 5);

    Ok(())
}

#[test]
fn unavailable_model_produces_no_score() -> Result<(), String> {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = Pipeline::new(
        ModelSlot::new(common::Counting {
            score: 120.0,
            calls: Arc::clone(&calls),
        }),
        ModelSlot::unavailable("WeatherSeverityPredictor", "file not found"),
    );
    assert!(!pipeline.is_available());

    let features = assemble(20.0, 415.0, 3.3, 100.0, 60.0, 15.0)?;
    let err = pipeline.predict(&features).unwrap_err();
    assert!(err.is_unavailable());
    assert_eq!(
        err,
        PipelineError::ModelUnavailable {
            model: "WeatherSeverityPredictor".to_string(),
            reason: "file not found".to_string(),
        }
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    Ok(())
}

#[test]
fn unavailable_climate_model_is_reported_first() -> Result<(), String> {
    let pipeline = Pipeline::new(
        ModelSlot::unavailable("ClimateRiskPredictor", "corrupt"),
        ModelSlot::unavailable("WeatherSeverityPredictor", "missing"),
    );
    let features = assemble(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)?;
    match pipeline.predict(&features) {
        Err(PipelineError::ModelUnavailable { model, .. }) => assert_eq!(model, "ClimateRiskPredictor"),
        r => return Err(format!("Expected ModelUnavailable, got {r:?}")),
    }
    Ok(())
}

#[test]
fn failing_models_surface_inference_errors() -> Result<(), String> {
    let features = assemble(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)?;

    let pipeline = Pipeline::new(ModelSlot::new(common::Broken), ModelSlot::new(common::WeightedSum([1.0; 6])));
    assert!(matches!(
        pipeline.predict(&features),
        Err(PipelineError::Inference { model, .. }) if model == "Broken"
    ));

    let pipeline = Pipeline::new(ModelSlot::new(common::WeightedSum([1.0; 6])), ModelSlot::new(common::NotANumber));
    assert!(matches!(
        pipeline.predict(&features),
        Err(PipelineError::Inference { model, .. }) if model == "NotANumber"
    ));

    Ok(())
}

#[test]
fn invalid_request_is_rejected_before_scoring() {
    let pipeline = constant_pipeline(0.0, 0.0);
    let request = Request {
        temperature: f64::NAN,
        co2_emissions: 0.0,
        sea_level_rise: 0.0,
        precipitation: 0.0,
        humidity: 0.0,
        wind_speed: 0.0,
    };
    assert!(matches!(pipeline.run(&request), Err(PipelineError::InvalidInput { .. })));
}

#[test]
fn custom_bands_are_used() -> Result<(), String> {
    let pipeline = constant_pipeline(120.0, 40.0).with_bands(Bands::new(50.0, 100.0, 110.0)?, Bands::WEATHER_SEVERITY);
    let assessment = pipeline.classify(&pipeline.predict(&assemble(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)?)?);
    assert_eq!(assessment.climate_tier, RiskTier::Severe);
    assert_eq!(assessment.severity_tier, RiskTier::Moderate);
    Ok(())
}

#[test]
fn par_batch_keeps_input_order() -> Result<(), String> {
    // Climate index is the temperature, severity index is the wind speed.
    let pipeline = Pipeline::new(
        ModelSlot::new(common::WeightedSum([1.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
        ModelSlot::new(common::WeightedSum([0.0, 0.0, 0.0, 0.0, 0.0, 1.0])),
    );

    let batch = common::gen_rows(1_000, 42)
        .into_iter()
        .map(|row| climate_risk::FeatureVector::parse(&row.iter().map(ToString::to_string).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;

    let reports = pipeline.par_run_batch(&batch);
    assert_eq!(reports.len(), batch.len());
    for (features, report) in batch.iter().zip(reports) {
        let report = report?;
        assert_eq!(&report.features, features);
        assert!(float_cmp::approx_eq!(f64, report.scores.climate, features.as_slice()[0]));
        assert!(float_cmp::approx_eq!(f64, report.scores.severity, features.as_slice()[5]));
    }

    Ok(())
}

#[test]
fn par_batch_reports_unavailable_for_every_row() -> Result<(), String> {
    let pipeline = Pipeline::new(
        ModelSlot::unavailable("ClimateRiskPredictor", "missing"),
        ModelSlot::new(common::WeightedSum([1.0; 6])),
    );
    let batch = vec![assemble(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)?; 8];
    assert!(pipeline
        .par_run_batch(&batch)
        .into_iter()
        .all(|r| r.is_err_and(|e| e.is_unavailable())));
    Ok(())
}
