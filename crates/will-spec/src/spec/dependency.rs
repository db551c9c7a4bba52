use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::{AnswerSet, OptionValue, QuestionId};

/// A single `question == value` requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Requirement {
    pub question: QuestionId,
    pub value: OptionValue,
}

impl Requirement {
    pub fn new(question: impl Into<QuestionId>, value: impl Into<OptionValue>) -> Self {
        Self {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn is_met(&self, answers: &AnswerSet) -> bool {
        answers.is(self.question.as_str(), self.value.as_str())
    }
}

/// Visibility rule attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dependency {
    /// Always visible.
    #[default]
    None,
    /// Visible only while the referenced answer equals the required value.
    Equals(Requirement),
    /// Visible while at least one requirement holds.
    AnyOf(Vec<Requirement>),
}

impl Dependency {
    pub fn is_none(&self) -> bool {
        matches!(self, Dependency::None)
    }

    pub fn is_satisfied(&self, answers: &AnswerSet) -> bool {
        match self {
            Dependency::None => true,
            Dependency::Equals(requirement) => requirement.is_met(answers),
            Dependency::AnyOf(requirements) => requirements
                .iter()
                .any(|requirement| requirement.is_met(answers)),
        }
    }

    pub fn requirements(&self) -> &[Requirement] {
        match self {
            Dependency::None => &[],
            Dependency::Equals(requirement) => std::slice::from_ref(requirement),
            Dependency::AnyOf(requirements) => requirements,
        }
    }
}
