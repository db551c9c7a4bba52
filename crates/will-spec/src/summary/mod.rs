//! Derivation of the final recommendation from a set of answers.
//!
//! The route is chosen by walking [`rules::ROUTE_RULES`] in priority order; the
//! checklist, risk and storage sections are filtered line tables. Everything here
//! is a pure function of the answer set, so deriving twice yields identical output.

pub mod rules;

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;

pub use rules::{CHECKLIST, Condition, Line, RISKS, ROUTE_RULES, RouteRule, STORAGE};

/// Tag naming the special-case branch that produced a route.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum RouteFlag {
    Eligibility,
    Remote,
    Holograph,
    HighRisk,
}

impl RouteFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteFlag::Eligibility => "eligibility",
            RouteFlag::Remote => "remote",
            RouteFlag::Holograph => "holograph",
            RouteFlag::HighRisk => "highRisk",
        }
    }
}

pub type RouteFlags = BTreeSet<RouteFlag>;

/// Recommended will-execution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Ineligible,
    TwoWitness,
    Remote,
    Holograph,
    HighRisk,
}

impl RouteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Ineligible => "ineligible",
            RouteKind::TwoWitness => "two_witness",
            RouteKind::Remote => "remote",
            RouteKind::Holograph => "holograph",
            RouteKind::HighRisk => "high_risk",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            RouteKind::Ineligible => "You may not be able to make a valid Will yet.",
            RouteKind::TwoWitness => {
                "Recommended: Standard formal Will (two-witness execution)."
            }
            RouteKind::Remote => {
                "Recommended: Formal Will using remote witnessing (where permitted)."
            }
            RouteKind::Holograph => "Possible fallback: Holograph (handwritten) Will.",
            RouteKind::HighRisk => {
                "High risk: Execution path unclear — get help before you sign."
            }
        }
    }

    pub fn advice(self) -> &'static [&'static str] {
        match self {
            RouteKind::Ineligible => &[
                "Ontario generally requires you to be 18+ to make a Will, with limited exceptions.",
                "If you need planning now, consult a licensed Ontario lawyer about your options.",
            ],
            RouteKind::TwoWitness => &[
                "Draft a clear Will, then sign in front of two independent witnesses present at the same time.",
                "Have the two witnesses sign in your presence right after you sign/acknowledge your signature.",
            ],
            RouteKind::Remote => &[
                "Use audio-visual communication technology with two witnesses present (virtually) at the same time.",
                "Typically, at least one witness should be an Ontario lawyer or paralegal (licensee).",
                "Follow a disciplined signing sequence to avoid execution defects.",
            ],
            RouteKind::Holograph => &[
                "Write the entire Will by hand (no typing) and sign it.",
                "Be extremely clear and specific—ambiguity creates litigation risk.",
                "Consider upgrading to a formal Will when you can arrange proper witnessing.",
            ],
            RouteKind::HighRisk => &[
                "If you can’t arrange two witnesses (in person or remote) and can’t create a holograph Will, you should consult a licensed professional.",
                "An invalid Will can cause intestacy and delays in administering your estate.",
            ],
        }
    }

    pub fn flags(self) -> RouteFlags {
        let flag = match self {
            RouteKind::Ineligible => Some(RouteFlag::Eligibility),
            RouteKind::TwoWitness => None,
            RouteKind::Remote => Some(RouteFlag::Remote),
            RouteKind::Holograph => Some(RouteFlag::Holograph),
            RouteKind::HighRisk => Some(RouteFlag::HighRisk),
        };
        flag.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Route {
    pub kind: RouteKind,
    pub headline: String,
    pub advice: Vec<String>,
    pub flags: RouteFlags,
}

impl From<RouteKind> for Route {
    fn from(kind: RouteKind) -> Self {
        Self {
            kind,
            headline: kind.headline().to_string(),
            advice: kind.advice().iter().map(|line| line.to_string()).collect(),
            flags: kind.flags(),
        }
    }
}

/// Read-only result of a completed questionnaire. Always rebuilt, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub route: Route,
    pub checklist: Vec<String>,
    pub risks: Vec<String>,
    pub storage: Vec<String>,
}

impl Summary {
    pub fn has_flag(&self, flag: RouteFlag) -> bool {
        self.route.flags.contains(&flag)
    }
}

/// Builds the summary for `answers`. Missing answers simply fail their conditions.
pub fn derive_summary(answers: &AnswerSet) -> Summary {
    let route = Route::from(rules::select_route(answers));
    let checklist = rules::collect_lines(CHECKLIST, answers, &route.flags);
    let risks = rules::collect_lines(RISKS, answers, &route.flags);
    let storage = rules::collect_lines(STORAGE, answers, &route.flags);

    Summary {
        route,
        checklist,
        risks,
        storage,
    }
}
