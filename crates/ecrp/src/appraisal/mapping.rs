//! Answer mapper: renames question ids to the role names the rule tables use.
//!
//! The mapper never rewrites an answer. Derivations for conditional follow-up
//! questions live in the `effective` methods and run just before evaluation.

use super::answer::Answer;
use super::domain::{AppraisalDomain, DomainAnswers};
use std::collections::BTreeMap;

/// (role, question id) pairs per domain and level.
const DOMAIN1_STUDY_ROLES: [(&str, &str); 5] = [
    ("B", "1.1"),
    ("C", "1.2"),
    ("D", "1.2.1"),
    ("E", "1.3"),
    ("F", "1.4"),
];
const DOMAIN1_POLICY_ROLES: [(&str, &str); 5] = [
    ("G", "1.5"),
    ("H", "1.6"),
    ("I", "1.7"),
    ("J", "1.8"),
    ("K", "1.9"),
];
const DOMAIN2_STUDY_ROLES: [(&str, &str); 2] = [("O", "2.1"), ("P", "2.2")];
const DOMAIN2_POLICY_ROLES: [(&str, &str); 3] = [("R", "2.3"), ("S", "2.4"), ("T", "2.4.1")];
const DOMAIN3_STUDY_ROLES: [(&str, &str); 2] = [("W", "3.1"), ("X", "3.1.1")];
const DOMAIN3_POLICY_ROLES: [(&str, &str); 2] = [("Z", "3.2"), ("AA", "3.2.1")];
const DOMAIN4_STUDY_ROLES: [(&str, &str); 2] = [("AD", "4.1"), ("AE", "4.1.1")];
const DOMAIN4_POLICY_ROLES: [(&str, &str); 1] = [("AG", "4.2")];
const DOMAIN5_STUDY_ROLES: [(&str, &str); 1] = [("AJ", "5.1")];
const DOMAIN5_POLICY_ROLES: [(&str, &str); 2] = [("AL", "5.2"), ("AM", "5.3")];

/// Study-level roles of domain 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformStudyAnswers {
    pub b: Answer,
    pub c: Answer,
    /// Follow-up to `c`.
    pub d: Answer,
    pub e: Answer,
    pub f: Answer,
}

impl InformStudyAnswers {
    /// When 1.2 is no-like the follow-up 1.2.1 is skipped, so a blank `d`
    /// reads as "not filled in" instead of blocking the domain.
    pub fn effective(&self) -> Self {
        let mut effective = self.clone();
        if self.c.is_no_like() && self.d.as_str().trim().is_empty() {
            effective.d = Answer::not_filled_in();
        }
        effective
    }
}

/// Policy-level roles of domain 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformPolicyAnswers {
    pub g: Answer,
    pub h: Answer,
    pub i: Answer,
    pub j: Answer,
    pub k: Answer,
}

/// Policy-level roles of domain 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancePolicyAnswers {
    pub r: Answer,
    pub s: Answer,
    /// Follow-up to `s`.
    pub t: Answer,
}

impl BalancePolicyAnswers {
    /// 2.4.1 is only asked after an affirmative 2.4; otherwise it is skipped.
    pub fn effective(&self) -> Self {
        let mut effective = self.clone();
        if !self.s.is_yes() {
            effective.t = Answer::not_filled_in();
        }
        effective
    }
}

/// Two-question level: a lead question and its companion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairedAnswers {
    pub first: Answer,
    pub second: Answer,
}

/// Level with a single question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleAnswer {
    pub answer: Answer,
}

/// Answers of one domain after renaming to rule roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedDomain {
    InformNotPersuade {
        study: InformStudyAnswers,
        policy: InformPolicyAnswers,
    },
    OfferBalance {
        study: PairedAnswers,
        policy: BalancePolicyAnswers,
    },
    DiscloseUncertainties {
        study: PairedAnswers,
        policy: PairedAnswers,
    },
    StateEvidenceQuality {
        study: PairedAnswers,
        policy: SingleAnswer,
    },
    PreemptMisunderstandings {
        study: SingleAnswer,
        policy: PairedAnswers,
    },
}

impl MappedDomain {
    pub fn domain(&self) -> AppraisalDomain {
        match self {
            Self::InformNotPersuade { .. } => AppraisalDomain::InformNotPersuade,
            Self::OfferBalance { .. } => AppraisalDomain::OfferBalance,
            Self::DiscloseUncertainties { .. } => AppraisalDomain::DiscloseUncertainties,
            Self::StateEvidenceQuality { .. } => AppraisalDomain::StateEvidenceQuality,
            Self::PreemptMisunderstandings { .. } => AppraisalDomain::PreemptMisunderstandings,
        }
    }

    /// Every mapped answer as (role, question id, answer), study level first.
    pub fn roles(&self) -> Vec<(&'static str, &'static str, &Answer)> {
        let (study_roles, policy_roles) = role_table(self.domain());
        let answers: Vec<&Answer> = match self {
            Self::InformNotPersuade { study, policy } => vec![
                &study.b, &study.c, &study.d, &study.e, &study.f, &policy.g, &policy.h,
                &policy.i, &policy.j, &policy.k,
            ],
            Self::OfferBalance { study, policy } => vec![
                &study.first,
                &study.second,
                &policy.r,
                &policy.s,
                &policy.t,
            ],
            Self::DiscloseUncertainties { study, policy } => vec![
                &study.first,
                &study.second,
                &policy.first,
                &policy.second,
            ],
            Self::StateEvidenceQuality { study, policy } => {
                vec![&study.first, &study.second, &policy.answer]
            }
            Self::PreemptMisunderstandings { study, policy } => {
                vec![&study.answer, &policy.first, &policy.second]
            }
        };

        study_roles
            .iter()
            .chain(policy_roles.iter())
            .zip(answers)
            .map(|((role, question_id), answer)| (*role, *question_id, answer))
            .collect()
    }
}

type RoleTable = &'static [(&'static str, &'static str)];

/// Role tables for a domain, as (study, policy).
pub fn role_table(domain: AppraisalDomain) -> (RoleTable, RoleTable) {
    match domain {
        AppraisalDomain::InformNotPersuade => tables(&DOMAIN1_STUDY_ROLES, &DOMAIN1_POLICY_ROLES),
        AppraisalDomain::OfferBalance => tables(&DOMAIN2_STUDY_ROLES, &DOMAIN2_POLICY_ROLES),
        AppraisalDomain::DiscloseUncertainties => {
            tables(&DOMAIN3_STUDY_ROLES, &DOMAIN3_POLICY_ROLES)
        }
        AppraisalDomain::StateEvidenceQuality => {
            tables(&DOMAIN4_STUDY_ROLES, &DOMAIN4_POLICY_ROLES)
        }
        AppraisalDomain::PreemptMisunderstandings => {
            tables(&DOMAIN5_STUDY_ROLES, &DOMAIN5_POLICY_ROLES)
        }
    }
}

fn tables<const S: usize, const P: usize>(
    study: &'static [(&'static str, &'static str); S],
    policy: &'static [(&'static str, &'static str); P],
) -> (RoleTable, RoleTable) {
    (study, policy)
}

pub fn map_domain(domain: AppraisalDomain, answers: &DomainAnswers) -> MappedDomain {
    let study = &answers.study_level;
    let policy = &answers.policy_level;

    match domain {
        AppraisalDomain::InformNotPersuade => {
            let [b, c, d, e, f] = lookup(study, &DOMAIN1_STUDY_ROLES);
            let [g, h, i, j, k] = lookup(policy, &DOMAIN1_POLICY_ROLES);
            MappedDomain::InformNotPersuade {
                study: InformStudyAnswers { b, c, d, e, f },
                policy: InformPolicyAnswers { g, h, i, j, k },
            }
        }
        AppraisalDomain::OfferBalance => {
            let [r, s, t] = lookup(policy, &DOMAIN2_POLICY_ROLES);
            MappedDomain::OfferBalance {
                study: paired(lookup(study, &DOMAIN2_STUDY_ROLES)),
                policy: BalancePolicyAnswers { r, s, t },
            }
        }
        AppraisalDomain::DiscloseUncertainties => MappedDomain::DiscloseUncertainties {
            study: paired(lookup(study, &DOMAIN3_STUDY_ROLES)),
            policy: paired(lookup(policy, &DOMAIN3_POLICY_ROLES)),
        },
        AppraisalDomain::StateEvidenceQuality => {
            let [answer] = lookup(policy, &DOMAIN4_POLICY_ROLES);
            MappedDomain::StateEvidenceQuality {
                study: paired(lookup(study, &DOMAIN4_STUDY_ROLES)),
                policy: SingleAnswer { answer },
            }
        }
        AppraisalDomain::PreemptMisunderstandings => {
            let [answer] = lookup(study, &DOMAIN5_STUDY_ROLES);
            MappedDomain::PreemptMisunderstandings {
                study: SingleAnswer { answer },
                policy: paired(lookup(policy, &DOMAIN5_POLICY_ROLES)),
            }
        }
    }
}

fn lookup<const N: usize>(
    level: &BTreeMap<String, Answer>,
    roles: &[(&str, &str); N],
) -> [Answer; N] {
    roles.map(|(_, question_id)| level.get(question_id).cloned().unwrap_or_default())
}

fn paired([first, second]: [Answer; 2]) -> PairedAnswers {
    PairedAnswers { first, second }
}
