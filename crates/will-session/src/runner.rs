use will_spec::{AnswerSet, OptionValue, QuestionSpec, Summary};

use crate::SessionError;
use crate::session::WillSession;

/// Supplies the value for the question being asked, given its current answer if any.
pub type AnswerProvider<'a> =
    dyn FnMut(&QuestionSpec, Option<&OptionValue>) -> Result<OptionValue, SessionError> + 'a;

pub struct SessionRunner;

impl SessionRunner {
    /// Answers and advances until the terminal transition, then returns the summary.
    pub fn run(
        session: &mut WillSession,
        provider: &mut AnswerProvider<'_>,
    ) -> Result<Summary, SessionError> {
        while !session.is_complete() {
            let Some(question) = session.current_question() else {
                session.next();
                continue;
            };
            let value = provider(question, session.current_answer())?;
            let question_id = question.id.clone();
            session.answer(question_id.as_str(), value.as_str())?;
            session.next();
        }

        Ok(session
            .summary()
            .cloned()
            .unwrap_or_else(|| session.preview_summary()))
    }

    /// Runs with a prepared answer map; the first visible question without an entry fails the run.
    pub fn run_with_answers(
        session: &mut WillSession,
        answers: &AnswerSet,
    ) -> Result<Summary, SessionError> {
        let mut provider = |question: &QuestionSpec, _current: Option<&OptionValue>| {
            answers
                .get(question.id.as_str())
                .cloned()
                .ok_or_else(|| SessionError::MissingAnswer(question.id.clone()))
        };
        Self::run(session, &mut provider)
    }
}
