use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::{AnswerError, OptionValue, QuestionId};
use crate::spec::question::{OptionSpec, QuestionSpec};
use crate::validate::{SpecError, validate_form};

/// Top-level questionnaire definition. The order of `questions` is the master ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormSpec {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuestionSpec>,
}

/// A validated questionnaire. The master ordering is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    spec: FormSpec,
}

impl Questionnaire {
    pub fn new(spec: FormSpec) -> Result<Self, SpecError> {
        validate_form(&spec)?;
        tracing::debug!(
            form = %spec.id,
            questions = spec.questions.len(),
            "questionnaire loaded"
        );
        Ok(Self { spec })
    }

    pub fn from_json(raw: &str) -> Result<Self, SpecError> {
        let spec: FormSpec = serde_json::from_str(raw)?;
        Self::new(spec)
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn title(&self) -> &str {
        &self.spec.title
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.spec.questions
    }

    pub fn len(&self) -> usize {
        self.spec.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&QuestionSpec> {
        self.spec.questions.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.spec
            .questions
            .iter()
            .position(|question| question.id.as_str() == id)
    }

    pub fn find(&self, id: &str) -> Option<&QuestionSpec> {
        self.position(id).and_then(|index| self.question(index))
    }

    /// Resolves the declared option for an answer, refusing unknown questions and values.
    pub fn check_answer(&self, question: &str, value: &str) -> Result<&OptionSpec, AnswerError> {
        let spec = self
            .find(question)
            .ok_or_else(|| AnswerError::UnknownQuestion(QuestionId::from(question)))?;
        spec.option(value).ok_or_else(|| AnswerError::InvalidOption {
            question: spec.id.clone(),
            value: OptionValue::from(value),
        })
    }
}
