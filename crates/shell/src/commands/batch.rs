//! Scoring every row of a CSV file.

use std::path::Path;

use climate_risk::{Axis, Config, FeatureVector, PipelineError};

/// Read the records of a CSV source, keyed by their line number.
///
/// Blank lines are skipped. Every other record yields either its features or
/// the reason it could not be read.
fn parse_rows<R: std::io::Read>(reader: R, has_headers: bool) -> Vec<(u64, Result<FeatureVector, PipelineError>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .records()
        .map(|record| match record {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                (line, FeatureVector::parse(&record.iter().collect::<Vec<_>>()))
            }
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                let reason = PipelineError::InvalidInput {
                    feature: "features".to_string(),
                    reason: e.to_string(),
                };
                (line, Err(reason))
            }
        })
        .collect()
}

/// Score every row of `input` in parallel and print one line per row.
///
/// A row that fails to parse or score is reported without stopping the
/// batch.
pub fn run(config: &Config, input: &Path, has_headers: bool) -> Result<(), String> {
    let pipeline = super::load_pipeline(config)?;

    let file = std::fs::File::open(input).map_err(|e| format!("Failed to open {input:?}: {e}"))?;
    let rows = parse_rows(std::io::BufReader::new(file), has_headers);
    ftlog::info!("Read {} rows from {input:?}", rows.len());

    let features = rows
        .iter()
        .filter_map(|(_, row)| row.as_ref().ok().copied())
        .collect::<Vec<_>>();
    let mut reports = pipeline.par_run_batch(&features).into_iter();

    let mut num_failed = 0_usize;
    for (line, row) in rows {
        let outcome = match row {
            Ok(_) => reports
                .next()
                .ok_or_else(|| format!("No result for line {line}"))?,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(report) => println!(
                "line {line}: {} {:.4} ({}), {} {:.4} ({})",
                Axis::ClimateRisk.name(),
                report.scores.climate,
                report.assessment.climate_label(),
                Axis::WeatherSeverity.name(),
                report.scores.severity,
                report.assessment.severity_label(),
            ),
            Err(e) => {
                num_failed += 1;
                ftlog::error!("line {line}: {e}");
                println!("line {line}: error: {e}");
            }
        }
    }
    ftlog::info!("Finished batch with {num_failed} failed rows.");

    Ok(())
}
