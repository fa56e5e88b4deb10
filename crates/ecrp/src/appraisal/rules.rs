//! Study- and policy-level decision tables.
//!
//! Each table is evaluated top to bottom and the first matching rule wins.
//! Rules overlap in coverage, so their order is part of the semantics.

use super::answer::{all_yes, any_empty, any_no_like, any_yes};
use super::mapping::{
    BalancePolicyAnswers, InformPolicyAnswers, InformStudyAnswers, PairedAnswers, SingleAnswer,
};
use super::outcome::Outcome;
use tracing::trace;

pub(crate) struct Rule<I: 'static> {
    name: &'static str,
    when: fn(&I) -> bool,
    then: Outcome,
}

pub(crate) struct RuleTable<I: 'static> {
    name: &'static str,
    rules: &'static [Rule<I>],
    fallback: Outcome,
}

impl<I: 'static> RuleTable<I> {
    pub(crate) fn evaluate(&self, input: &I) -> Outcome {
        for rule in self.rules {
            if (rule.when)(input) {
                trace!(table = self.name, rule = rule.name, outcome = %rule.then, "rule matched");
                return rule.then;
            }
        }

        trace!(table = self.name, outcome = %self.fallback, "no rule matched");
        self.fallback
    }

    #[cfg(test)]
    pub(crate) fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }
}

static INFORM_STUDY: RuleTable<InformStudyAnswers> = RuleTable {
    name: "domain 1 study",
    rules: &[
        Rule {
            name: "limitations affirmed but mitigation unanswered",
            when: |s| s.c.is_yes() && s.d.is_empty(),
            then: Outcome::NotFilledIn,
        },
        Rule {
            name: "emotive language not avoided",
            when: |s| s.f.is_no_like(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "conclusions disconnected from findings",
            when: |s| s.e.is_no_like() && s.f.is_yes(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "aims undefined",
            when: |s| s.b.is_no_like() && all_yes(&[&s.c, &s.d, &s.e, &s.f]),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "limitations or mitigation missing",
            when: |s| any_no_like(&[&s.c, &s.d]) && all_yes(&[&s.e, &s.f]),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "affirmative reporting",
            when: |s| any_yes(&[&s.b, &s.c, &s.d, &s.e, &s.f]),
            then: Outcome::LowRisk,
        },
    ],
    fallback: Outcome::NotFilledIn,
};

static INFORM_POLICY: RuleTable<InformPolicyAnswers> = RuleTable {
    name: "domain 1 policy",
    rules: &[
        Rule {
            name: "unanswered question",
            when: |p| any_empty(&[&p.g, &p.h, &p.i, &p.j, &p.k]),
            then: Outcome::NotFilledIn,
        },
        Rule {
            name: "emotive language in recommendations",
            when: |p| p.k.is_no_like(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "recommendations disconnected from findings",
            when: |p| p.k.is_yes() && p.i.is_no_like(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "inaccessible language",
            when: |p| p.k.is_yes() && p.j.is_no_like(),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "all affirmative",
            when: |p| all_yes(&[&p.g, &p.h, &p.i, &p.j, &p.k]),
            then: Outcome::LowRisk,
        },
    ],
    fallback: Outcome::SomeConcerns,
};

// "single implication considered" places no requirement on 2.4.1.
static BALANCE_POLICY: RuleTable<BalancePolicyAnswers> = RuleTable {
    name: "domain 2 policy",
    rules: &[
        Rule {
            name: "implications or current policy unanswered",
            when: |p| p.r.is_empty() || p.s.is_empty(),
            then: Outcome::NotFilledIn,
        },
        Rule {
            name: "current policy discussed but status quo unanswered",
            when: |p| p.s.is_yes() && p.t.is_empty(),
            then: Outcome::NotFilledIn,
        },
        Rule {
            name: "all affirmative",
            when: |p| all_yes(&[&p.r, &p.s, &p.t]),
            then: Outcome::LowRisk,
        },
        Rule {
            name: "status quo not considered",
            when: |p| p.r.is_yes() && p.s.is_yes() && p.t.is_no_like(),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "current policy not discussed",
            when: |p| p.r.is_yes() && p.s.is_no_like(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "single implication considered",
            when: |p| p.r.is_no_like() && p.s.is_yes(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "no balance offered",
            when: |p| p.r.is_no_like() && p.s.is_no_like(),
            then: Outcome::HighRisk,
        },
    ],
    fallback: Outcome::NotFilledIn,
};

/// Lead question decides high risk; the companion can only lower to concerns.
static PAIRED: RuleTable<PairedAnswers> = RuleTable {
    name: "paired",
    rules: &[
        Rule {
            name: "both affirmative",
            when: |p| all_yes(&[&p.first, &p.second]),
            then: Outcome::LowRisk,
        },
        Rule {
            name: "lead question negative",
            when: |p| p.first.is_no_like(),
            then: Outcome::HighRisk,
        },
        Rule {
            name: "companion question negative",
            when: |p| p.first.is_yes() && p.second.is_no_like(),
            then: Outcome::SomeConcerns,
        },
    ],
    fallback: Outcome::NotFilledIn,
};

static SINGLE: RuleTable<SingleAnswer> = RuleTable {
    name: "single",
    rules: &[
        Rule {
            name: "no information",
            when: |s| s.answer.is_no_information(),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "affirmative",
            when: |s| s.answer.is_yes(),
            then: Outcome::LowRisk,
        },
        Rule {
            name: "negative",
            when: |s| s.answer.is_no(),
            then: Outcome::HighRisk,
        },
    ],
    fallback: Outcome::NotFilledIn,
};

static AUDIENCE_POLICY: RuleTable<PairedAnswers> = RuleTable {
    name: "domain 5 policy",
    rules: &[
        Rule {
            name: "both affirmative",
            when: |p| all_yes(&[&p.first, &p.second]),
            then: Outcome::LowRisk,
        },
        Rule {
            name: "misunderstandings not addressed",
            when: |p| p.first.is_yes() && p.second.is_no_like(),
            then: Outcome::SomeConcerns,
        },
        Rule {
            name: "audience undefined",
            when: |p| p.first.is_no_like(),
            then: Outcome::HighRisk,
        },
    ],
    fallback: Outcome::NotFilledIn,
};

/// Domain 1 study level (roles B..F). Applies the 1.2.1 follow-up derivation.
pub fn domain1_study(answers: &InformStudyAnswers) -> Outcome {
    INFORM_STUDY.evaluate(&answers.effective())
}

/// Domain 1 policy level (roles G..K).
pub fn domain1_policy(answers: &InformPolicyAnswers) -> Outcome {
    INFORM_POLICY.evaluate(answers)
}

/// Domain 2 study level (roles O, P).
pub fn domain2_study(answers: &PairedAnswers) -> Outcome {
    PAIRED.evaluate(answers)
}

/// Domain 2 policy level (roles R, S, T). Applies the 2.4.1 follow-up derivation.
pub fn domain2_policy(answers: &BalancePolicyAnswers) -> Outcome {
    BALANCE_POLICY.evaluate(&answers.effective())
}

/// Domain 3 study level (roles W, X).
pub fn domain3_study(answers: &PairedAnswers) -> Outcome {
    PAIRED.evaluate(answers)
}

/// Domain 3 policy level (roles Z, AA).
pub fn domain3_policy(answers: &PairedAnswers) -> Outcome {
    PAIRED.evaluate(answers)
}

/// Domain 4 study level (roles AD, AE).
pub fn domain4_study(answers: &PairedAnswers) -> Outcome {
    PAIRED.evaluate(answers)
}

/// Domain 4 policy level (role AG).
pub fn domain4_policy(answer: &SingleAnswer) -> Outcome {
    SINGLE.evaluate(answer)
}

/// Domain 5 study level (role AJ).
pub fn domain5_study(answer: &SingleAnswer) -> Outcome {
    SINGLE.evaluate(answer)
}

/// Domain 5 policy level (roles AL, AM).
pub fn domain5_policy(answers: &PairedAnswers) -> Outcome {
    AUDIENCE_POLICY.evaluate(answers)
}

#[cfg(test)]
pub(crate) fn table_rule_names() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (INFORM_STUDY.name, INFORM_STUDY.rule_names()),
        (INFORM_POLICY.name, INFORM_POLICY.rule_names()),
        (BALANCE_POLICY.name, BALANCE_POLICY.rule_names()),
        (PAIRED.name, PAIRED.rule_names()),
        (SINGLE.name, SINGLE.rule_names()),
        (AUDIENCE_POLICY.name, AUDIENCE_POLICY.rule_names()),
    ]
}
