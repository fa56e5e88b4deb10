use super::answer::Answer;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The five fixed ECR-P appraisal domains, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppraisalDomain {
    InformNotPersuade,
    OfferBalance,
    DiscloseUncertainties,
    StateEvidenceQuality,
    PreemptMisunderstandings,
}

impl AppraisalDomain {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::InformNotPersuade,
            Self::OfferBalance,
            Self::DiscloseUncertainties,
            Self::StateEvidenceQuality,
            Self::PreemptMisunderstandings,
        ]
    }

    /// Key used for the domain in answer sheets and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::InformNotPersuade => "Domain 1: Inform not persuade",
            Self::OfferBalance => "Domain 2: Offer balance, not false balance",
            Self::DiscloseUncertainties => "Domain 3: Disclose uncertainties",
            Self::StateEvidenceQuality => "Domain 4: State evidence quality",
            Self::PreemptMisunderstandings => "Domain 5: Pre-empt misunderstandings",
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::InformNotPersuade => 1,
            Self::OfferBalance => 2,
            Self::DiscloseUncertainties => 3,
            Self::StateEvidenceQuality => 4,
            Self::PreemptMisunderstandings => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|domain| domain.number() == number)
    }

    /// Resolves a domain from its full label, a bare number ("3"), or a
    /// "Domain 3" prefix.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if let Some(domain) = Self::ordered()
            .into_iter()
            .find(|domain| domain.label().eq_ignore_ascii_case(trimmed))
        {
            return Some(domain);
        }

        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let rest = lowered.strip_prefix("domain")?.trim_start();
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        digits.parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for AppraisalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Question group within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLevel {
    #[serde(rename = "study_level")]
    Study,
    #[serde(rename = "policy_level")]
    Policy,
}

impl AnswerLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Study => "Study Level",
            Self::Policy => "Policy Recommendations Level",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "study" | "study_level" | "study level" => Some(Self::Study),
            "policy" | "policy_level" | "policy level" => Some(Self::Policy),
            _ => None,
        }
    }
}

/// Answers recorded for one domain, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAnswers {
    #[serde(default, deserialize_with = "lenient_answers")]
    pub study_level: BTreeMap<String, Answer>,
    #[serde(default, deserialize_with = "lenient_answers")]
    pub policy_level: BTreeMap<String, Answer>,
}

impl DomainAnswers {
    pub fn level(&self, level: AnswerLevel) -> &BTreeMap<String, Answer> {
        match level {
            AnswerLevel::Study => &self.study_level,
            AnswerLevel::Policy => &self.policy_level,
        }
    }

    fn level_mut(&mut self, level: AnswerLevel) -> &mut BTreeMap<String, Answer> {
        match level {
            AnswerLevel::Study => &mut self.study_level,
            AnswerLevel::Policy => &mut self.policy_level,
        }
    }
}

/// Snapshot of every answer given in the questionnaire.
///
/// Deserialisation never fails on content: non-object domains, null levels
/// and non-string answers are all read as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    domains: BTreeMap<String, DomainAnswers>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        domain: AppraisalDomain,
        level: AnswerLevel,
        question_id: impl Into<String>,
        answer: impl Into<Answer>,
    ) -> &mut Self {
        self.domains
            .entry(domain.label().to_string())
            .or_default()
            .level_mut(level)
            .insert(question_id.into(), answer.into());
        self
    }

    /// Looks up a domain by exact label, then by case-insensitive label.
    pub fn domain(&self, domain: AppraisalDomain) -> Option<&DomainAnswers> {
        self.domains.get(domain.label()).or_else(|| {
            self.domains
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(domain.label()))
                .map(|(_, answers)| answers)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<'de> Deserialize<'de> for AnswerSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        let domains = raw
            .into_iter()
            .map(|(key, value)| {
                let answers: DomainAnswers = serde_json::from_value(value).unwrap_or_default();
                (key, answers)
            })
            .collect();
        Ok(Self { domains })
    }
}

fn lenient_answers<'de, D>(deserializer: D) -> Result<BTreeMap<String, Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(entries)) = raw else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .map(|(question_id, value)| {
            let answer = match value {
                Value::String(text) => Answer::new(text),
                _ => Answer::unanswered(),
            };
            (question_id, answer)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_domain_from_label_number_or_prefix() {
        assert_eq!(
            AppraisalDomain::parse("domain 2: offer balance, not false balance"),
            Some(AppraisalDomain::OfferBalance)
        );
        assert_eq!(
            AppraisalDomain::parse(" 4 "),
            Some(AppraisalDomain::StateEvidenceQuality)
        );
        assert_eq!(
            AppraisalDomain::parse("Domain 5"),
            Some(AppraisalDomain::PreemptMisunderstandings)
        );
        assert_eq!(AppraisalDomain::parse("Domain 9"), None);
        assert_eq!(AppraisalDomain::parse("balance"), None);
    }

    #[test]
    fn malformed_entries_read_as_unanswered() {
        let sheet: AnswerSheet = serde_json::from_value(json!({
            "Domain 1: Inform not persuade": {
                "study_level": { "1.1": "yes", "1.2": null, "1.3": 7 },
                "policy_level": null
            },
            "Domain 2: Offer balance, not false balance": "garbage"
        }))
        .expect("sheet deserializes");

        let domain1 = sheet
            .domain(AppraisalDomain::InformNotPersuade)
            .expect("domain 1 present");
        assert_eq!(domain1.study_level["1.1"], Answer::from("yes"));
        assert!(domain1.study_level["1.2"].is_empty());
        assert!(domain1.study_level["1.3"].is_empty());
        assert!(domain1.policy_level.is_empty());

        let domain2 = sheet
            .domain(AppraisalDomain::OfferBalance)
            .expect("domain 2 present");
        assert_eq!(domain2, &DomainAnswers::default());
    }

    #[test]
    fn record_builds_nested_levels() {
        let mut sheet = AnswerSheet::new();
        sheet
            .record(AppraisalDomain::DiscloseUncertainties, AnswerLevel::Study, "3.1", "yes")
            .record(AppraisalDomain::DiscloseUncertainties, AnswerLevel::Policy, "3.2", "no");

        let answers = sheet
            .domain(AppraisalDomain::DiscloseUncertainties)
            .expect("recorded");
        assert_eq!(answers.level(AnswerLevel::Study)["3.1"].as_str(), "yes");
        assert_eq!(answers.level(AnswerLevel::Policy)["3.2"].as_str(), "no");
    }

    #[test]
    fn domain_lookup_tolerates_case() {
        let sheet: AnswerSheet = serde_json::from_value(json!({
            "domain 4: state evidence quality": { "policy_level": { "4.2": "yes" } }
        }))
        .expect("sheet deserializes");
        assert!(sheet.domain(AppraisalDomain::StateEvidenceQuality).is_some());
    }
}
