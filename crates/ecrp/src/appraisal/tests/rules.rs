use super::common::{
    balance_policy, inform_policy, inform_study, paired, single, ANSWER_SPACE, RULE_OUTCOMES,
};
use crate::appraisal::outcome::Outcome;
use crate::appraisal::rules::{self, table_rule_names};
use std::collections::HashSet;

#[test]
fn rule_names_are_unique_within_each_table() {
    for (table, names) in table_rule_names() {
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate rule name in {table}");
        assert!(!names.is_empty(), "{table} has no rules");
    }
}

#[test]
fn domain1_study_all_yes_is_low_risk() {
    let answers = inform_study("yes", "yes", "yes", "yes", "yes");
    assert_eq!(rules::domain1_study(&answers), Outcome::LowRisk);
}

#[test]
fn domain1_study_emotive_language_is_high_risk() {
    let answers = inform_study("yes", "yes", "yes", "yes", "no");
    assert_eq!(rules::domain1_study(&answers), Outcome::HighRisk);

    let answers = inform_study("yes", "yes", "yes", "yes", "no information");
    assert_eq!(rules::domain1_study(&answers), Outcome::HighRisk);
}

#[test]
fn domain1_study_disconnected_conclusions_are_high_risk() {
    let answers = inform_study("yes", "yes", "yes", "probably no", "probably yes");
    assert_eq!(rules::domain1_study(&answers), Outcome::HighRisk);
}

#[test]
fn domain1_study_requires_mitigation_answer_when_limitations_reported() {
    let answers = inform_study("yes", "yes", "", "yes", "yes");
    assert_eq!(rules::domain1_study(&answers), Outcome::NotFilledIn);

    let answers = inform_study("yes", "probably yes", "not filled in", "yes", "no");
    assert_eq!(rules::domain1_study(&answers), Outcome::NotFilledIn);
}

#[test]
fn domain1_study_skipped_mitigation_counts_against_limitations() {
    let answers = inform_study("yes", "no", "", "yes", "yes");
    assert_eq!(rules::domain1_study(&answers), Outcome::SomeConcerns);
}

#[test]
fn domain1_study_undefined_aims_raise_concerns() {
    let answers = inform_study("no", "yes", "yes", "yes", "yes");
    assert_eq!(rules::domain1_study(&answers), Outcome::SomeConcerns);
}

#[test]
fn domain1_study_partial_answers() {
    let answers = inform_study("yes", "", "", "", "");
    assert_eq!(rules::domain1_study(&answers), Outcome::LowRisk);

    let answers = inform_study("", "", "", "", "");
    assert_eq!(rules::domain1_study(&answers), Outcome::NotFilledIn);
}

#[test]
fn domain1_policy_table() {
    let cases = [
        (["yes", "yes", "yes", "yes", "yes"], Outcome::LowRisk),
        (["probably yes", "yes", "yes", "yes", "yes"], Outcome::LowRisk),
        (["yes", "yes", "yes", "yes", ""], Outcome::NotFilledIn),
        (["", "no", "no", "no", "no"], Outcome::NotFilledIn),
        (["yes", "yes", "yes", "yes", "no"], Outcome::HighRisk),
        (["yes", "yes", "yes", "yes", "no information"], Outcome::HighRisk),
        (["yes", "yes", "no", "yes", "yes"], Outcome::HighRisk),
        (["yes", "yes", "yes", "probably no", "yes"], Outcome::SomeConcerns),
        (["no", "yes", "yes", "yes", "yes"], Outcome::SomeConcerns),
        (["yes", "yes", "yes", "yes", "maybe"], Outcome::SomeConcerns),
    ];

    for ([g, h, i, j, k], expected) in cases {
        let answers = inform_policy(g, h, i, j, k);
        assert_eq!(
            rules::domain1_policy(&answers),
            expected,
            "{g}/{h}/{i}/{j}/{k}"
        );
    }
}

#[test]
fn paired_study_tables() {
    let cases = [
        ("yes", "yes", Outcome::LowRisk),
        ("probably yes", "yes", Outcome::LowRisk),
        ("yes", "probably yes", Outcome::LowRisk),
        ("no", "yes", Outcome::HighRisk),
        ("no information", "", Outcome::HighRisk),
        ("yes", "no information", Outcome::SomeConcerns),
        ("yes", "probably no", Outcome::SomeConcerns),
        ("yes", "", Outcome::NotFilledIn),
        ("", "yes", Outcome::NotFilledIn),
        ("maybe", "yes", Outcome::NotFilledIn),
    ];

    for (first, second, expected) in cases {
        let answers = paired(first, second);
        assert_eq!(rules::domain2_study(&answers), expected, "{first}/{second}");
        assert_eq!(rules::domain3_study(&answers), expected, "{first}/{second}");
        assert_eq!(rules::domain3_policy(&answers), expected, "{first}/{second}");
        assert_eq!(rules::domain4_study(&answers), expected, "{first}/{second}");
    }
}

#[test]
fn domain2_policy_table() {
    let cases = [
        ("", "yes", "yes", Outcome::NotFilledIn),
        ("yes", "not filled in", "yes", Outcome::NotFilledIn),
        ("yes", "yes", "", Outcome::NotFilledIn),
        ("yes", "yes", "yes", Outcome::LowRisk),
        ("yes", "yes", "no", Outcome::SomeConcerns),
        ("yes", "probably yes", "no information", Outcome::SomeConcerns),
        ("yes", "no", "", Outcome::HighRisk),
        ("no", "yes", "yes", Outcome::HighRisk),
        ("no", "yes", "no", Outcome::HighRisk),
        ("probably no", "no information", "", Outcome::HighRisk),
        ("maybe", "yes", "yes", Outcome::NotFilledIn),
    ];

    for (r, s, t, expected) in cases {
        let answers = balance_policy(r, s, t);
        assert_eq!(rules::domain2_policy(&answers), expected, "{r}/{s}/{t}");
    }
}

#[test]
fn follow_up_is_ignored_when_current_policy_not_discussed() {
    let skipped = balance_policy("yes", "no", "");
    let answered = balance_policy("yes", "no", "yes");
    assert_eq!(
        rules::domain2_policy(&skipped),
        rules::domain2_policy(&answered)
    );
}

#[test]
fn high_risk_takes_precedence_over_missing_or_uncertain_answers() {
    assert_eq!(
        rules::domain1_policy(&inform_policy("yes", "yes", "yes", "yes", "no information")),
        Outcome::HighRisk
    );
    assert_eq!(
        rules::domain2_study(&paired("no information", "yes")),
        Outcome::HighRisk
    );
    assert_eq!(
        rules::domain2_policy(&balance_policy("yes", "no", "yes")),
        Outcome::HighRisk
    );
    assert_eq!(
        rules::domain2_policy(&balance_policy("yes", "probably no", "")),
        Outcome::HighRisk
    );
    assert_eq!(
        rules::domain5_policy(&paired("probably no", "")),
        Outcome::HighRisk
    );
}

#[test]
fn single_answer_tables() {
    let cases = [
        ("yes", Outcome::LowRisk),
        ("Probably Yes", Outcome::LowRisk),
        ("no", Outcome::HighRisk),
        (" probably no ", Outcome::HighRisk),
        ("no information", Outcome::SomeConcerns),
        ("", Outcome::NotFilledIn),
        ("not filled in", Outcome::NotFilledIn),
        ("maybe", Outcome::NotFilledIn),
    ];

    for (raw, expected) in cases {
        let answer = single(raw);
        assert_eq!(rules::domain4_policy(&answer), expected, "{raw:?}");
        assert_eq!(rules::domain5_study(&answer), expected, "{raw:?}");
    }
}

#[test]
fn domain5_policy_table() {
    let cases = [
        ("yes", "yes", Outcome::LowRisk),
        ("probably yes", "probably yes", Outcome::LowRisk),
        ("yes", "no", Outcome::SomeConcerns),
        ("yes", "no information", Outcome::SomeConcerns),
        ("no", "yes", Outcome::HighRisk),
        ("no", "", Outcome::HighRisk),
        ("no information", "yes", Outcome::HighRisk),
        ("yes", "", Outcome::NotFilledIn),
        ("", "", Outcome::NotFilledIn),
    ];

    for (first, second, expected) in cases {
        let answers = paired(first, second);
        assert_eq!(rules::domain5_policy(&answers), expected, "{first}/{second}");
    }
}

#[test]
fn five_answer_tables_are_total() {
    for b in ANSWER_SPACE {
        for c in ANSWER_SPACE {
            for d in ANSWER_SPACE {
                for e in ANSWER_SPACE {
                    for f in ANSWER_SPACE {
                        let study = rules::domain1_study(&inform_study(b, c, d, e, f));
                        assert!(RULE_OUTCOMES.contains(&study), "{study:?}");
                        let policy = rules::domain1_policy(&inform_policy(b, c, d, e, f));
                        assert!(RULE_OUTCOMES.contains(&policy), "{policy:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn small_tables_are_total() {
    for first in ANSWER_SPACE {
        let answer = single(first);
        assert!(RULE_OUTCOMES.contains(&rules::domain4_policy(&answer)));
        assert!(RULE_OUTCOMES.contains(&rules::domain5_study(&answer)));

        for second in ANSWER_SPACE {
            let pair = paired(first, second);
            for outcome in [
                rules::domain2_study(&pair),
                rules::domain3_study(&pair),
                rules::domain3_policy(&pair),
                rules::domain4_study(&pair),
                rules::domain5_policy(&pair),
            ] {
                assert!(RULE_OUTCOMES.contains(&outcome), "{first}/{second}");
            }

            for third in ANSWER_SPACE {
                let outcome = rules::domain2_policy(&balance_policy(first, second, third));
                assert!(RULE_OUTCOMES.contains(&outcome), "{first}/{second}/{third}");
            }
        }
    }
}
