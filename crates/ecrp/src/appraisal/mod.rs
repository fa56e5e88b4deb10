//! ECR-P risk-of-bias decision engine.
//!
//! Raw answers flow strictly forward: the mapper renames question ids to rule
//! roles, each domain's study and policy tables classify them, the domain
//! combiner merges the pair, and the overall aggregator merges the five
//! domain outcomes. Every step is a total, pure function.

pub mod answer;
pub mod catalog;
pub mod combine;
pub mod domain;
pub mod export;
pub mod import;
pub mod mapping;
pub mod outcome;
pub mod report;
pub mod rules;

#[cfg(test)]
mod tests;

pub use answer::{Answer, ANSWER_OPTIONS, NOT_FILLED_IN};
pub use catalog::{DomainQuestions, Question, QuestionCatalog, CATALOG};
pub use combine::{aggregate_overall, combine_domain, CombinerKind};
pub use domain::{AnswerLevel, AnswerSheet, AppraisalDomain, DomainAnswers};
pub use export::{to_csv_string, write_csv, ExportError};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use mapping::{map_domain, MappedDomain};
pub use outcome::{Outcome, UnknownOutcome};
pub use report::{AppraisalReport, DomainResult, ReportParseError, OVERALL_KEY};

use tracing::debug;

/// Stateless evaluator turning an answer snapshot into a fresh report.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeEvaluator;

impl OutcomeEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, sheet: &AnswerSheet) -> AppraisalReport {
        let unanswered = DomainAnswers::default();
        let results = AppraisalDomain::ordered().map(|domain| {
            let answers = sheet.domain(domain).unwrap_or(&unanswered);
            let result = evaluate_domain(&map_domain(domain, answers));
            debug!(
                domain = domain.number(),
                study = %result.study_level,
                policy = %result.policy_level,
                combined = %result.domain_outcome,
                "domain evaluated"
            );
            (domain, result)
        });

        let overall = aggregate_overall(&results.map(|(_, result)| result.domain_outcome));
        debug!(overall = %overall, "appraisal evaluated");

        AppraisalReport::new(results.into_iter().collect(), overall)
    }
}

/// Runs a mapped domain through its study table, policy table and combiner.
pub fn evaluate_domain(mapped: &MappedDomain) -> DomainResult {
    let (study_level, policy_level) = match mapped {
        MappedDomain::InformNotPersuade { study, policy } => {
            (rules::domain1_study(study), rules::domain1_policy(policy))
        }
        MappedDomain::OfferBalance { study, policy } => {
            (rules::domain2_study(study), rules::domain2_policy(policy))
        }
        MappedDomain::DiscloseUncertainties { study, policy } => {
            (rules::domain3_study(study), rules::domain3_policy(policy))
        }
        MappedDomain::StateEvidenceQuality { study, policy } => {
            (rules::domain4_study(study), rules::domain4_policy(policy))
        }
        MappedDomain::PreemptMisunderstandings { study, policy } => {
            (rules::domain5_study(study), rules::domain5_policy(policy))
        }
    };

    DomainResult {
        study_level,
        policy_level,
        domain_outcome: combine_domain(mapped.domain(), study_level, policy_level),
    }
}
