use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Risk-of-bias classification produced at every stage of the appraisal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    LowRisk,
    SomeConcerns,
    HighRisk,
    /// A rule could not classify because required answers are missing.
    NotFilledIn,
    /// A combiner received an incomplete input; rendered as an empty string.
    Blank,
    /// Combination the rule table does not classify.
    Review,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowRisk => "low risk",
            Self::SomeConcerns => "some concerns",
            Self::HighRisk => "high risk",
            Self::NotFilledIn => "not filled in",
            Self::Blank => "",
            Self::Review => "Error: Review",
        }
    }

    /// Ranking of the three risk levels; sentinels have no severity.
    pub const fn severity(self) -> Option<u8> {
        match self {
            Self::LowRisk => Some(1),
            Self::SomeConcerns => Some(2),
            Self::HighRisk => Some(3),
            Self::NotFilledIn | Self::Blank | Self::Review => None,
        }
    }

    pub const fn is_incomplete(self) -> bool {
        matches!(self, Self::NotFilledIn | Self::Blank)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised outcome label '{0}'")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low risk" => Ok(Self::LowRisk),
            "some concerns" => Ok(Self::SomeConcerns),
            "high risk" => Ok(Self::HighRisk),
            "not filled in" => Ok(Self::NotFilledIn),
            "" => Ok(Self::Blank),
            "error: review" => Ok(Self::Review),
            _ => Err(UnknownOutcome(value.to_string())),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn all_low_risk(outcomes: &[Outcome]) -> bool {
    outcomes.iter().all(|outcome| *outcome == Outcome::LowRisk)
}

pub fn any_high_risk(outcomes: &[Outcome]) -> bool {
    outcomes.contains(&Outcome::HighRisk)
}

pub fn any_some_concerns(outcomes: &[Outcome]) -> bool {
    outcomes.contains(&Outcome::SomeConcerns)
}

pub fn any_empty_outcome(outcomes: &[Outcome]) -> bool {
    outcomes.iter().any(|outcome| outcome.is_incomplete())
}
