use super::domain::AppraisalDomain;
use super::outcome::{Outcome, UnknownOutcome};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Key under which the overall outcome is published.
pub const OVERALL_KEY: &str = "Overall Risk of Bias assessment";

/// Study, policy and combined outcome of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResult {
    pub study_level: Outcome,
    pub policy_level: Outcome,
    pub domain_outcome: Outcome,
}

/// Result of one evaluation. Built once and never mutated.
///
/// Serialises to the questionnaire's output document: one object per domain
/// keyed by the domain label, plus the overall outcome under [`OVERALL_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppraisalReport {
    domains: BTreeMap<AppraisalDomain, DomainResult>,
    overall_outcome: Outcome,
}

impl AppraisalReport {
    pub(crate) fn new(
        domains: BTreeMap<AppraisalDomain, DomainResult>,
        overall_outcome: Outcome,
    ) -> Self {
        Self {
            domains,
            overall_outcome,
        }
    }

    pub fn domain(&self, domain: AppraisalDomain) -> Option<&DomainResult> {
        self.domains.get(&domain)
    }

    /// Domain results in domain order.
    pub fn domains(&self) -> impl Iterator<Item = (AppraisalDomain, &DomainResult)> {
        self.domains.iter().map(|(domain, result)| (*domain, result))
    }

    pub fn overall_outcome(&self) -> Outcome {
        self.overall_outcome
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ReportParseError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(&value)
    }

    /// Reads a previously published output document.
    ///
    /// Domain entries are matched by label, then by "Domain N" prefix. The
    /// overall entry is the key mentioning "overall" or "final"; failing
    /// that, the only entry that is not an object.
    pub fn from_json_value(value: &Value) -> Result<Self, ReportParseError> {
        let Value::Object(entries) = value else {
            return Err(ReportParseError::NotAnObject);
        };

        let mut domains = BTreeMap::new();
        for domain in AppraisalDomain::ordered() {
            let entry = find_domain_entry(entries, domain)
                .ok_or(ReportParseError::MissingDomain(domain.label()))?;
            let result = DomainResult::deserialize(entry).map_err(|source| {
                ReportParseError::InvalidDomain {
                    domain: domain.label(),
                    source,
                }
            })?;
            domains.insert(domain, result);
        }

        let overall = find_overall_entry(entries).ok_or(ReportParseError::MissingOverall)?;
        let overall_outcome = match overall {
            Value::String(label) => label.parse()?,
            Value::Null => Outcome::Blank,
            other => return Err(UnknownOutcome(other.to_string()).into()),
        };

        Ok(Self::new(domains, overall_outcome))
    }
}

impl Serialize for AppraisalReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.domains.len() + 1))?;
        for (domain, result) in &self.domains {
            map.serialize_entry(domain.label(), result)?;
        }
        map.serialize_entry(OVERALL_KEY, &self.overall_outcome)?;
        map.end()
    }
}

fn find_domain_entry(entries: &Map<String, Value>, domain: AppraisalDomain) -> Option<&Value> {
    entries.get(domain.label()).or_else(|| {
        entries
            .iter()
            .filter(|(_, value)| value.is_object())
            .find(|(key, _)| AppraisalDomain::parse(key) == Some(domain))
            .map(|(_, value)| value)
    })
}

fn find_overall_entry(entries: &Map<String, Value>) -> Option<&Value> {
    if let Some(value) = entries.get(OVERALL_KEY) {
        return Some(value);
    }

    let named = entries.iter().find(|(key, _)| {
        let lowered = key.to_lowercase();
        lowered.contains("overall") || lowered.contains("final")
    });
    if let Some((_, value)) = named {
        return Some(value);
    }

    let mut scalars = entries.values().filter(|value| !value.is_object());
    match (scalars.next(), scalars.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportParseError {
    #[error("report must be a JSON object")]
    NotAnObject,
    #[error("report has no entry for '{0}'")]
    MissingDomain(&'static str),
    #[error("report entry for '{domain}' is malformed: {source}")]
    InvalidDomain {
        domain: &'static str,
        source: serde_json::Error,
    },
    #[error("report has no overall outcome")]
    MissingOverall,
    #[error(transparent)]
    Outcome(#[from] UnknownOutcome),
    #[error("invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),
}
