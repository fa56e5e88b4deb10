use super::domain::AppraisalDomain;
use super::outcome::{
    all_low_risk, any_empty_outcome, any_high_risk, any_some_concerns, Outcome,
};

/// How a domain merges its study and policy outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinerKind {
    /// Any high risk input makes the domain high risk.
    Escalating,
    /// High risk only when both levels are high risk; a single high risk
    /// input is reported as some concerns.
    Tempered,
}

impl AppraisalDomain {
    pub const fn combiner(self) -> CombinerKind {
        match self {
            Self::InformNotPersuade | Self::OfferBalance | Self::DiscloseUncertainties => {
                CombinerKind::Escalating
            }
            Self::StateEvidenceQuality | Self::PreemptMisunderstandings => CombinerKind::Tempered,
        }
    }
}

pub fn combine_domain(domain: AppraisalDomain, study: Outcome, policy: Outcome) -> Outcome {
    match domain.combiner() {
        CombinerKind::Escalating => escalate(&[study, policy]),
        CombinerKind::Tempered => temper(study, policy),
    }
}

/// Overall outcome across the five domain outcomes, in domain order.
pub fn aggregate_overall(domain_outcomes: &[Outcome; 5]) -> Outcome {
    escalate(domain_outcomes)
}

/// Worst-case merge shared by the escalating combiner and the overall
/// aggregator.
fn escalate(outcomes: &[Outcome]) -> Outcome {
    if any_empty_outcome(outcomes) {
        Outcome::Blank
    } else if any_high_risk(outcomes) {
        Outcome::HighRisk
    } else if any_some_concerns(outcomes) {
        Outcome::SomeConcerns
    } else if all_low_risk(outcomes) {
        Outcome::LowRisk
    } else {
        Outcome::Review
    }
}

fn temper(study: Outcome, policy: Outcome) -> Outcome {
    let pair = [study, policy];
    if any_empty_outcome(&pair) {
        Outcome::Blank
    } else if study == Outcome::HighRisk && policy == Outcome::HighRisk {
        Outcome::HighRisk
    } else if any_high_risk(&pair) || any_some_concerns(&pair) {
        Outcome::SomeConcerns
    } else if all_low_risk(&pair) {
        Outcome::LowRisk
    } else {
        Outcome::Review
    }
}
