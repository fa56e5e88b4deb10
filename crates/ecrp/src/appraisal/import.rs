use super::domain::{AnswerLevel, AnswerSheet, AppraisalDomain};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: unknown domain '{value}'")]
    UnknownDomain { row: usize, value: String },
    #[error("row {row}: unknown question level '{value}'")]
    UnknownLevel { row: usize, value: String },
}

/// Loads answer sheets exported by the questionnaire or prepared by hand.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    /// Files ending in `.csv` are read as answer rows, anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSheet, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<AnswerSheet, AnswerImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads `domain,level,question_id,answer` rows. Blank answers are kept as
    /// unanswered; unknown domains or levels are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<AnswerSheet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut sheet = AnswerSheet::new();

        for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let row = record?;
            let line = index + 2;

            let domain = AppraisalDomain::parse(&row.domain).ok_or_else(|| {
                AnswerImportError::UnknownDomain {
                    row: line,
                    value: row.domain.clone(),
                }
            })?;
            let level =
                AnswerLevel::parse(&row.level).ok_or_else(|| AnswerImportError::UnknownLevel {
                    row: line,
                    value: row.level.clone(),
                })?;

            sheet.record(domain, level, row.question_id, row.answer.unwrap_or_default());
        }

        Ok(sheet)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    domain: String,
    level: String,
    question_id: String,
    #[serde(default)]
    answer: Option<String>,
}
