use super::answer::ANSWER_OPTIONS;
use super::domain::AppraisalDomain;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    /// Question that must be answered yes or probably yes for this one to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DomainQuestions {
    #[serde(serialize_with = "serialize_domain")]
    pub domain: AppraisalDomain,
    pub study_level: &'static [Question],
    pub policy_level: &'static [Question],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionCatalog {
    pub answer_options: [&'static str; 5],
    pub domains: [DomainQuestions; 5],
}

const fn question(id: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        depends_on: None,
    }
}

const fn follow_up(id: &'static str, parent: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        depends_on: Some(parent),
    }
}

pub const CATALOG: QuestionCatalog = QuestionCatalog {
    answer_options: ANSWER_OPTIONS,
    domains: [
        DomainQuestions {
            domain: AppraisalDomain::InformNotPersuade,
            study_level: &[
                question("1.1", "Were the aims/objectives for the study defined?"),
                question("1.2", "Were the limitations of the study findings reported?"),
                follow_up(
                    "1.2.1",
                    "1.2",
                    "Did the study propose ways to reduce limitations?",
                ),
                question(
                    "1.3",
                    "Were the study conclusions clearly connected to the findings?",
                ),
                question(
                    "1.4",
                    "Was emotive language avoided in communicating study findings?",
                ),
            ],
            policy_level: &[
                question(
                    "1.5",
                    "Were the aims/objectives for the policy recommendations defined?",
                ),
                question(
                    "1.6",
                    "Were the limitations of the policy recommendations reported?",
                ),
                question(
                    "1.7",
                    "Were the policy recommendations clearly connected to the findings?",
                ),
                question(
                    "1.8",
                    "Was accessible language used for the policy recommendations?",
                ),
                question(
                    "1.9",
                    "Was emotive language avoided in policy recommendations?",
                ),
            ],
        },
        DomainQuestions {
            domain: AppraisalDomain::OfferBalance,
            study_level: &[
                question("2.1", "Were all aspects of the study findings reported?"),
                question("2.2", "Was an appropriate reporting guideline used?"),
            ],
            policy_level: &[
                question(
                    "2.3",
                    "Were multiple implications of the policy recommendations considered?",
                ),
                question("2.4", "Was the existence of a current policy discussed?"),
                follow_up(
                    "2.4.1",
                    "2.4",
                    "Was not changing the current policy considered?",
                ),
            ],
        },
        DomainQuestions {
            domain: AppraisalDomain::DiscloseUncertainties,
            study_level: &[
                question("3.1", "Were uncertainties of the study findings reported?"),
                follow_up(
                    "3.1.1",
                    "3.1",
                    "Did the study propose ways to reduce uncertainties?",
                ),
            ],
            policy_level: &[
                question(
                    "3.2",
                    "Were uncertainties of the policy recommendations reported?",
                ),
                follow_up(
                    "3.2.1",
                    "3.2",
                    "Did the study adopt a precautionary principle perspective?",
                ),
            ],
        },
        DomainQuestions {
            domain: AppraisalDomain::StateEvidenceQuality,
            study_level: &[
                question(
                    "4.1",
                    "Was the quality of the evidence used in the analysis considered?",
                ),
                follow_up(
                    "4.1.1",
                    "4.1",
                    "Were specific metrics of evidence quality used?",
                ),
            ],
            policy_level: &[question(
                "4.2",
                "Was the quality of the study findings, that formulated the evidence base for \
                 the policy recommendations, considered?",
            )],
        },
        DomainQuestions {
            domain: AppraisalDomain::PreemptMisunderstandings,
            study_level: &[question(
                "5.1",
                "Were potential misunderstandings about the study findings and conclusions \
                 pre-emptively addressed?",
            )],
            policy_level: &[
                question(
                    "5.2",
                    "Was the targeted audience for policy recommendations defined?",
                ),
                question(
                    "5.3",
                    "Were potential misunderstandings for policy recommendations and potential \
                     concerns of the policy makers pre-emptively addressed?",
                ),
            ],
        },
    ],
};

impl QuestionCatalog {
    pub fn domain(&self, domain: AppraisalDomain) -> &DomainQuestions {
        &self.domains[usize::from(domain.number() - 1)]
    }
}

fn serialize_domain<S: serde::Serializer>(
    domain: &AppraisalDomain,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(domain.label())
}
