use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::{OptionValue, QuestionId};
use crate::spec::dependency::Dependency;

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptionSpec {
    pub value: OptionValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hint: String,
}

/// Definition of a single question inside a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    pub id: QuestionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    pub options: Vec<OptionSpec>,
    #[serde(default, skip_serializing_if = "Dependency::is_none")]
    pub depends_on: Dependency,
}

impl QuestionSpec {
    pub fn option(&self, value: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|option| option.value.as_str() == value)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}
