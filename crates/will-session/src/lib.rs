mod runner;
mod session;

use thiserror::Error;
use will_spec::{AnswerError, QuestionId};

pub use runner::{AnswerProvider, SessionRunner};
pub use session::{SessionStatus, Step, WillSession};
pub use will_spec::{AnswerSet, OptionValue, Progress, QuestionSpec, Questionnaire, Summary};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("question '{0}' has no answer")]
    MissingAnswer(QuestionId),
    #[error("no question is available to answer")]
    NoCurrentQuestion,
    #[error("answer provider failed: {0}")]
    Provider(String),
}
