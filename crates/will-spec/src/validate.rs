use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::answers::{OptionValue, QuestionId};
use crate::spec::dependency::Dependency;
use crate::spec::form::FormSpec;

/// Structural problems that make a questionnaire definition unusable.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("questionnaire definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("questionnaire '{0}' has no questions")]
    Empty(String),
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(QuestionId),
    #[error("question '{0}' has no options")]
    NoOptions(QuestionId),
    #[error("question '{question}' declares option '{value}' more than once")]
    DuplicateOption {
        question: QuestionId,
        value: OptionValue,
    },
    #[error("question '{question}' depends on unknown question '{target}'")]
    UnknownDependency {
        question: QuestionId,
        target: QuestionId,
    },
    #[error("question '{question}' depends on '{target}', which is not asked before it")]
    ForwardDependency {
        question: QuestionId,
        target: QuestionId,
    },
    #[error("question '{question}' requires '{target}' = '{value}', which is not an option of '{target}'")]
    UnreachableValue {
        question: QuestionId,
        target: QuestionId,
        value: OptionValue,
    },
    #[error("question '{0}' has an empty any_of dependency")]
    EmptyAnyOf(QuestionId),
}

/// Checks ids, options and dependency references of a definition.
///
/// Dependencies may only point at questions earlier in the master ordering, which
/// rules out forward and cyclic references and lets visibility resolve in one pass.
pub fn validate_form(spec: &FormSpec) -> Result<(), SpecError> {
    if spec.questions.is_empty() {
        return Err(SpecError::Empty(spec.id.clone()));
    }

    let mut positions = BTreeMap::new();
    for (index, question) in spec.questions.iter().enumerate() {
        if positions.insert(question.id.as_str(), index).is_some() {
            return Err(SpecError::DuplicateQuestion(question.id.clone()));
        }
    }

    for (index, question) in spec.questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(SpecError::NoOptions(question.id.clone()));
        }

        let mut seen = BTreeSet::new();
        for option in &question.options {
            if !seen.insert(option.value.as_str()) {
                return Err(SpecError::DuplicateOption {
                    question: question.id.clone(),
                    value: option.value.clone(),
                });
            }
        }

        if let Dependency::AnyOf(requirements) = &question.depends_on
            && requirements.is_empty()
        {
            return Err(SpecError::EmptyAnyOf(question.id.clone()));
        }

        for requirement in question.depends_on.requirements() {
            let Some(&target_index) = positions.get(requirement.question.as_str()) else {
                return Err(SpecError::UnknownDependency {
                    question: question.id.clone(),
                    target: requirement.question.clone(),
                });
            };
            if target_index >= index {
                return Err(SpecError::ForwardDependency {
                    question: question.id.clone(),
                    target: requirement.question.clone(),
                });
            }
            if !spec.questions[target_index].has_option(requirement.value.as_str()) {
                return Err(SpecError::UnreachableValue {
                    question: question.id.clone(),
                    target: requirement.question.clone(),
                    value: requirement.value.clone(),
                });
            }
        }
    }

    Ok(())
}
