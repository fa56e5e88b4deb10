use crate::appraisal::answer::Answer;
use crate::appraisal::domain::{AnswerLevel, AnswerSheet, AppraisalDomain};
use crate::appraisal::mapping::{
    BalancePolicyAnswers, InformPolicyAnswers, InformStudyAnswers, PairedAnswers, SingleAnswer,
};
use crate::appraisal::outcome::Outcome;

/// Every kind of value a rule can see: the vocabulary, blanks, the skipped
/// literal, odd casing and an unrecognised word.
pub(super) const ANSWER_SPACE: [&str; 9] = [
    "yes",
    "probably yes",
    "no",
    "probably no",
    "no information",
    "",
    "not filled in",
    " Probably Yes ",
    "maybe",
];

pub(super) const RULE_OUTCOMES: [Outcome; 4] = [
    Outcome::LowRisk,
    Outcome::SomeConcerns,
    Outcome::HighRisk,
    Outcome::NotFilledIn,
];

pub(super) fn inform_study(b: &str, c: &str, d: &str, e: &str, f: &str) -> InformStudyAnswers {
    InformStudyAnswers {
        b: Answer::from(b),
        c: Answer::from(c),
        d: Answer::from(d),
        e: Answer::from(e),
        f: Answer::from(f),
    }
}

pub(super) fn inform_policy(g: &str, h: &str, i: &str, j: &str, k: &str) -> InformPolicyAnswers {
    InformPolicyAnswers {
        g: Answer::from(g),
        h: Answer::from(h),
        i: Answer::from(i),
        j: Answer::from(j),
        k: Answer::from(k),
    }
}

pub(super) fn balance_policy(r: &str, s: &str, t: &str) -> BalancePolicyAnswers {
    BalancePolicyAnswers {
        r: Answer::from(r),
        s: Answer::from(s),
        t: Answer::from(t),
    }
}

pub(super) fn paired(first: &str, second: &str) -> PairedAnswers {
    PairedAnswers {
        first: Answer::from(first),
        second: Answer::from(second),
    }
}

pub(super) fn single(answer: &str) -> SingleAnswer {
    SingleAnswer {
        answer: Answer::from(answer),
    }
}

/// Answer sheet with every catalogued question answered `answer`.
pub(super) fn uniform_sheet(answer: &str) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for entry in &crate::appraisal::CATALOG.domains {
        for question in entry.study_level {
            sheet.record(entry.domain, AnswerLevel::Study, question.id, answer);
        }
        for question in entry.policy_level {
            sheet.record(entry.domain, AnswerLevel::Policy, question.id, answer);
        }
    }
    sheet
}

pub(super) fn with_answer(
    mut sheet: AnswerSheet,
    domain: AppraisalDomain,
    level: AnswerLevel,
    question_id: &str,
    answer: &str,
) -> AnswerSheet {
    sheet.record(domain, level, question_id, answer);
    sheet
}
