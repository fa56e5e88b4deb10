use super::report::{AppraisalReport, OVERALL_KEY};
use std::io::Write;

const HEADER: [&str; 4] = [
    "Domain",
    "Study Level Outcome",
    "Policy Recommendations Outcome",
    "Domain Combined Outcome",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes one row per domain followed by the overall row. Every field is
/// quoted and embedded quotes are doubled.
pub fn write_csv<W: Write>(report: &AppraisalReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for (domain, result) in report.domains() {
        csv_writer.write_record([
            domain.label(),
            result.study_level.label(),
            result.policy_level.label(),
            result.domain_outcome.label(),
        ])?;
    }
    csv_writer.write_record([OVERALL_KEY, "", "", report.overall_outcome().label()])?;
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(report: &AppraisalReport) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
