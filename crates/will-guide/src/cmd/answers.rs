//! Answers files and questionnaire loading shared by the commands.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use will_spec::{AnswerSet, Questionnaire, builtin_questionnaire};

use super::write_file;

pub const ANSWERS_SCHEMA: &str = "will-guide-answers/v1";

/// On-disk answers document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnswersDocument {
    /// Always `will-guide-answers/v1`.
    pub schema: String,
    /// Selected option value keyed by question id.
    #[serde(default)]
    pub answers: AnswerSet,
}

impl AnswersDocument {
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            schema: ANSWERS_SCHEMA.to_string(),
            answers,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    Document(AnswersDocument),
    Bare(AnswerSet),
}

pub fn parse_answers(raw: &str) -> Result<AnswerSet> {
    let file: AnswersFile = serde_json::from_str(raw)
        .context("answers must be a JSON object mapping question ids to option values")?;
    match file {
        AnswersFile::Document(doc) => {
            if doc.schema != ANSWERS_SCHEMA {
                bail!(
                    "unsupported answers schema '{}', expected '{ANSWERS_SCHEMA}'",
                    doc.schema
                );
            }
            Ok(doc.answers)
        }
        AnswersFile::Bare(answers) => Ok(answers),
    }
}

pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read answers {}", path.display()))?;
    parse_answers(&raw).with_context(|| format!("invalid answers file {}", path.display()))
}

pub fn write_answers(path: &Path, answers: &AnswerSet) -> Result<()> {
    let payload = serde_json::to_string_pretty(&AnswersDocument::new(answers.clone()))?;
    write_file(path, &payload, "answers")
}

/// Loads a questionnaire definition from `path`, or the built-in Ontario questionnaire.
pub fn load_questionnaire(path: Option<&Path>) -> Result<Arc<Questionnaire>> {
    let questionnaire = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read questionnaire {}", path.display()))?;
            Questionnaire::from_json(&raw)
                .with_context(|| format!("invalid questionnaire {}", path.display()))?
        }
        None => builtin_questionnaire().context("built-in questionnaire is invalid")?,
    };
    Ok(Arc::new(questionnaire))
}
