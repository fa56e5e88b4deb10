use serde::{Deserialize, Serialize};
use std::fmt;

const YES_WORDS: [&str; 2] = ["yes", "probably yes"];
const NO_WORDS: [&str; 2] = ["no", "probably no"];
const NO_INFORMATION: &str = "no information";

/// Literal written back by the questionnaire for skipped follow-up questions.
pub const NOT_FILLED_IN: &str = "not filled in";

/// Options offered for every question.
pub const ANSWER_OPTIONS: [&str; 5] = [
    "yes",
    "probably yes",
    "no",
    "probably no",
    "no information",
];

/// Raw categorical answer to one question.
///
/// The original text is kept verbatim; classification normalises case and
/// surrounding whitespace at comparison time. Strings outside the vocabulary
/// are neither yes-like nor no-like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(String);

impl Answer {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn unanswered() -> Self {
        Self::default()
    }

    pub(crate) fn not_filled_in() -> Self {
        Self(NOT_FILLED_IN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    pub fn is_yes(&self) -> bool {
        YES_WORDS.contains(&self.normalized().as_str())
    }

    pub fn is_no(&self) -> bool {
        NO_WORDS.contains(&self.normalized().as_str())
    }

    pub fn is_no_information(&self) -> bool {
        self.normalized() == NO_INFORMATION
    }

    pub fn is_no_like(&self) -> bool {
        self.is_no() || self.is_no_information()
    }

    /// Blank, whitespace, or the "not filled in" literal.
    pub fn is_empty(&self) -> bool {
        let normalized = self.normalized();
        normalized.is_empty() || normalized == NOT_FILLED_IN
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub fn all_yes(answers: &[&Answer]) -> bool {
    answers.iter().all(|answer| answer.is_yes())
}

pub fn any_yes(answers: &[&Answer]) -> bool {
    answers.iter().any(|answer| answer.is_yes())
}

pub fn any_no_like(answers: &[&Answer]) -> bool {
    answers.iter().any(|answer| answer.is_no_like())
}

pub fn any_empty(answers: &[&Answer]) -> bool {
    answers.iter().any(|answer| answer.is_empty())
}
