use crate::answers::AnswerSet;
use crate::builtin::ids::{
    AGE_18, CAN_WITNESS, HANDWRITE, MINOR_EXCEPTION, MINOR_KIDS, REMOTE_OPTION, SPECIFIC_GIFTS,
    SPOUSE_STATUS, STORAGE_PLAN,
};
use crate::builtin::values::{COMMON_LAW, MARRIED, NO, YES};
use crate::summary::{RouteFlag, RouteFlags, RouteKind};

/// Predicate over the answers and, for risk lines, the flags of the chosen route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// The question was answered with exactly this value.
    Is(&'static str, &'static str),
    /// The question is unanswered or answered with anything else.
    IsNot(&'static str, &'static str),
    All(&'static [Condition]),
    Any(&'static [Condition]),
    Not(&'static Condition),
    Flag(RouteFlag),
}

impl Condition {
    pub fn holds(&self, answers: &AnswerSet, flags: &RouteFlags) -> bool {
        match self {
            Condition::Always => true,
            Condition::Is(question, value) => answers.is(question, value),
            Condition::IsNot(question, value) => !answers.is(question, value),
            Condition::All(conditions) => conditions
                .iter()
                .all(|condition| condition.holds(answers, flags)),
            Condition::Any(conditions) => conditions
                .iter()
                .any(|condition| condition.holds(answers, flags)),
            Condition::Not(condition) => !condition.holds(answers, flags),
            Condition::Flag(flag) => flags.contains(flag),
        }
    }
}

/// Route choice; the first rule that holds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub kind: RouteKind,
    pub when: Condition,
}

/// A summary line emitted when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub when: Condition,
    pub text: &'static str,
}

const NO_WITNESSES_NO_REMOTE: Condition =
    Condition::All(&[Condition::Is(CAN_WITNESS, NO), Condition::IsNot(REMOTE_OPTION, YES)]);

pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        kind: RouteKind::Ineligible,
        when: Condition::Not(&Condition::Any(&[
            Condition::Is(AGE_18, YES),
            Condition::Is(MINOR_EXCEPTION, YES),
        ])),
    },
    RouteRule {
        kind: RouteKind::TwoWitness,
        when: Condition::Is(CAN_WITNESS, YES),
    },
    RouteRule {
        kind: RouteKind::Remote,
        when: Condition::All(&[Condition::Is(CAN_WITNESS, NO), Condition::Is(REMOTE_OPTION, YES)]),
    },
    RouteRule {
        kind: RouteKind::Holograph,
        when: Condition::All(&[NO_WITNESSES_NO_REMOTE, Condition::Is(HANDWRITE, YES)]),
    },
    RouteRule {
        kind: RouteKind::HighRisk,
        when: Condition::Always,
    },
];

pub const CHECKLIST: &[Line] = &[
    Line {
        when: Condition::Always,
        text: "Confirm you have testamentary capacity and are acting voluntarily.",
    },
    Line {
        when: Condition::Always,
        text: "Choose an executor (and backup) and confirm they’re willing.",
    },
    Line {
        when: Condition::Is(SPECIFIC_GIFTS, YES),
        text: "List specific gifts precisely (what, to whom) and define your residue.",
    },
    Line {
        when: Condition::IsNot(SPECIFIC_GIFTS, YES),
        text: "Use a clear residue clause (who gets what’s left).",
    },
    Line {
        when: Condition::Is(MINOR_KIDS, YES),
        text: "Include guardianship intentions for minor children and consider backups.",
    },
    Line {
        when: Condition::Always,
        text: "Sign at the end of the Will (or acknowledge your signature) as required for proper execution.",
    },
    Line {
        when: Condition::Always,
        text: "Use two witnesses present at the same time; have them sign in your presence.",
    },
    Line {
        when: Condition::Always,
        text: "Avoid beneficiaries (and their spouses) as witnesses to reduce risk that gifts are void.",
    },
    Line {
        when: Condition::Is(SPOUSE_STATUS, MARRIED),
        text: "Review after major life changes (marriage, separation, divorce). Separation can affect spousal gifts/appointments.",
    },
    Line {
        when: Condition::Is(SPOUSE_STATUS, COMMON_LAW),
        text: "Common-law partners may not inherit on intestacy in Ontario—having a Will matters.",
    },
];

pub const RISKS: &[Line] = &[
    Line {
        when: Condition::Always,
        text: "Execution errors (wrong witnesses, wrong sequence) can invalidate a Will or void gifts.",
    },
    Line {
        when: Condition::Always,
        text: "Ambiguous wording increases the chance of estate litigation and delay.",
    },
    Line {
        when: Condition::Always,
        text: "If a beneficiary (or a beneficiary’s spouse) witnesses, that beneficiary’s gift may be void.",
    },
    Line {
        when: NO_WITNESSES_NO_REMOTE,
        text: "If you’re relying on a holograph Will, it must be wholly handwritten and signed—mixed typing/handwriting can be problematic.",
    },
    Line {
        when: Condition::Flag(RouteFlag::Remote),
        text: "Remote witnessing must follow Ontario rules; consider professional supervision to prevent defects.",
    },
    Line {
        when: Condition::Is(STORAGE_PLAN, NO),
        text: "If the original Will can’t be located, administering the estate may be slower and more complicated.",
    },
    Line {
        when: Condition::Any(&[
            Condition::Flag(RouteFlag::HighRisk),
            Condition::Flag(RouteFlag::Eligibility),
        ]),
        text: "Your situation suggests a higher chance of an invalid Will—professional advice is strongly recommended.",
    },
    Line {
        when: Condition::Always,
        text: "Wills should be reviewed after major life events; rules about spouses can change based on marriage, separation, or divorce.",
    },
];

pub const STORAGE: &[Line] = &[
    Line {
        when: Condition::Is(STORAGE_PLAN, NO),
        text: "Priority: choose a storage location and document the access instructions today.",
    },
    Line {
        when: Condition::Always,
        text: "Store the original Will securely (lawyer’s office, safe deposit box, home safe).",
    },
    Line {
        when: Condition::Always,
        text: "Tell your executor where the original is and how to access it.",
    },
    Line {
        when: Condition::Always,
        text: "Keep a scanned copy for reference, but protect the original from damage or casual edits.",
    },
    Line {
        when: Condition::Always,
        text: "If you update anything significant, use a new Will or properly executed codicil (don’t hand-edit the signed original).",
    },
];

pub fn select_route(answers: &AnswerSet) -> RouteKind {
    let no_flags = RouteFlags::new();
    ROUTE_RULES
        .iter()
        .find(|rule| rule.when.holds(answers, &no_flags))
        .map(|rule| rule.kind)
        .unwrap_or(RouteKind::HighRisk)
}

pub fn collect_lines(table: &[Line], answers: &AnswerSet, flags: &RouteFlags) -> Vec<String> {
    table
        .iter()
        .filter(|line| line.when.holds(answers, flags))
        .map(|line| line.text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_ends_with_unconditional_fallback() {
        let last = ROUTE_RULES.last().expect("route rules");
        assert_eq!(last.kind, RouteKind::HighRisk);
        assert_eq!(last.when, Condition::Always);
    }

    #[test]
    fn route_priority_order_is_explicit() {
        let order: Vec<_> = ROUTE_RULES.iter().map(|rule| rule.kind).collect();
        assert_eq!(
            order,
            vec![
                RouteKind::Ineligible,
                RouteKind::TwoWitness,
                RouteKind::Remote,
                RouteKind::Holograph,
                RouteKind::HighRisk,
            ]
        );
    }

    #[test]
    fn is_not_holds_for_missing_answers() {
        let answers = AnswerSet::new();
        assert!(Condition::IsNot(REMOTE_OPTION, YES).holds(&answers, &RouteFlags::new()));
        assert!(!Condition::Is(REMOTE_OPTION, NO).holds(&answers, &RouteFlags::new()));
    }

    #[test]
    fn storage_table_has_exactly_one_conditional_line() {
        let conditional = STORAGE
            .iter()
            .filter(|line| line.when != Condition::Always)
            .count();
        assert_eq!(conditional, 1);
        assert_eq!(STORAGE.len(), 5);
    }
}
