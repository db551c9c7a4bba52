use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};
use will_spec::{
    AnswerSet, OptionValue, Progress, QuestionId, QuestionSpec, Questionnaire, Summary,
    VisibleSequence, derive_summary, resolve_visibility, visible_answers,
};

use crate::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Complete,
}

/// Outcome of a forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the question at this master index.
    Question(usize),
    /// Passed the last visible question; a summary has been derived.
    Complete,
}

/// One run through the questionnaire.
///
/// The session owns the answer set and the cursor. The visible sequence is
/// recomputed from the answers after every mutation and the cursor is clamped to it.
/// Gating "next" on an answered question is left to the caller (see [`WillSession::can_advance`]).
#[derive(Debug, Clone)]
pub struct WillSession {
    questionnaire: Arc<Questionnaire>,
    answers: AnswerSet,
    visible: VisibleSequence,
    cursor: usize,
    status: SessionStatus,
    summary: Option<Summary>,
}

impl WillSession {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        let mut session = Self {
            questionnaire,
            answers: AnswerSet::new(),
            visible: VisibleSequence::default(),
            cursor: 0,
            status: SessionStatus::Active,
            summary: None,
        };
        session.refresh_visibility();
        session
    }

    /// Starts a session pre-filled with `answers`; every entry is checked like [`WillSession::answer`].
    pub fn with_answers(
        questionnaire: Arc<Questionnaire>,
        answers: &AnswerSet,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(questionnaire);
        for (question, value) in answers.iter() {
            session.answer(question.as_str(), value.as_str())?;
        }
        Ok(session)
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Answers restricted to questions that are visible right now.
    pub fn visible_answers(&self) -> AnswerSet {
        visible_answers(&self.questionnaire, &self.answers)
    }

    pub fn visible(&self) -> &VisibleSequence {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    pub fn current_question(&self) -> Option<&QuestionSpec> {
        self.visible
            .get(self.cursor)
            .and_then(|index| self.questionnaire.question(index))
    }

    pub fn current_answer(&self) -> Option<&OptionValue> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id.as_str()))
    }

    /// Whether forward navigation makes sense: the current question has an answer.
    pub fn can_advance(&self) -> bool {
        match self.current_question() {
            Some(question) => self.answers.contains(question.id.as_str()),
            None => true,
        }
    }

    pub fn progress(&self) -> Progress {
        match self.status {
            SessionStatus::Complete => Progress::complete(self.visible.len()),
            SessionStatus::Active => Progress::new(self.cursor, self.visible.len()),
        }
    }

    /// Records an answer. Values outside the question's declared options are refused
    /// and leave the session untouched. The cursor does not move.
    pub fn answer(&mut self, question: &str, value: &str) -> Result<(), SessionError> {
        if let Err(err) = self.questionnaire.check_answer(question, value) {
            warn!(question, value, %err, "answer rejected");
            return Err(err.into());
        }

        let previous = self
            .answers
            .insert(QuestionId::from(question), OptionValue::from(value));
        debug!(
            question,
            value,
            previous = previous.as_ref().map(OptionValue::as_str),
            "answer recorded"
        );
        self.reopen();
        self.refresh_visibility();
        Ok(())
    }

    pub fn answer_current(&mut self, value: &str) -> Result<(), SessionError> {
        let question = self
            .current_question()
            .map(|question| question.id.clone())
            .ok_or(SessionError::NoCurrentQuestion)?;
        self.answer(question.as_str(), value)
    }

    pub fn next(&mut self) -> Step {
        self.refresh_visibility();
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
            let index = self.visible.indices()[self.cursor];
            debug!(cursor = self.cursor, question = index, "advanced");
            return Step::Question(index);
        }
        self.complete();
        Step::Complete
    }

    pub fn back(&mut self) {
        self.reopen();
        self.cursor = self.cursor.saturating_sub(1);
        self.refresh_visibility();
        debug!(cursor = self.cursor, "moved back");
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.status = SessionStatus::Active;
        self.summary = None;
        self.refresh_visibility();
        info!(form = self.questionnaire.id(), "session reset");
    }

    /// Summary derived by the terminal transition, if the session is complete.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Summary of the current answers, whether or not the session is complete.
    pub fn preview_summary(&self) -> Summary {
        derive_summary(&self.answers)
    }

    fn complete(&mut self) {
        let summary = derive_summary(&self.answers);
        info!(
            form = self.questionnaire.id(),
            route = summary.route.kind.as_str(),
            answers = self.answers.len(),
            "questionnaire complete"
        );
        self.summary = Some(summary);
        self.status = SessionStatus::Complete;
    }

    fn reopen(&mut self) {
        if self.status == SessionStatus::Complete {
            self.status = SessionStatus::Active;
            self.summary = None;
        }
    }

    fn refresh_visibility(&mut self) {
        self.visible = resolve_visibility(&self.questionnaire, &self.answers);
        self.cursor = self.visible.clamp(self.cursor);
    }
}
