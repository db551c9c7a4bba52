use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! string_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_token!(
    /// Unique identifier of a question within a questionnaire.
    QuestionId
);

string_token!(
    /// Opaque option token, unique within its question.
    OptionValue
);

/// Answers collected during a session, keyed by question id.
///
/// Entries are only ever inserted or overwritten; a reset clears the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, OptionValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `question`, returning the previous answer when one existed.
    pub fn insert(
        &mut self,
        question: impl Into<QuestionId>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.0.insert(question.into(), value.into())
    }

    pub fn get(&self, question: &str) -> Option<&OptionValue> {
        self.0.get(question)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.0.contains_key(question)
    }

    /// True when `question` was answered with exactly `value`.
    pub fn is(&self, question: &str, value: &str) -> bool {
        self.get(question).map(OptionValue::as_str) == Some(value)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &OptionValue)> {
        self.0.iter()
    }
}

impl<Q, V> FromIterator<(Q, V)> for AnswerSet
where
    Q: Into<QuestionId>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (Q, V)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (question, value) in iter {
            answers.insert(question, value);
        }
        answers
    }
}

/// Reasons an answer is refused before it reaches the answer set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(QuestionId),
    #[error("'{value}' is not an option of question '{question}'")]
    InvalidOption {
        question: QuestionId,
        value: OptionValue,
    },
}
