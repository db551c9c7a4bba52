use serde::Serialize;

use crate::answers::AnswerSet;
use crate::spec::form::Questionnaire;

/// Master-order indices of the questions reachable under the current answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibleSequence(Vec<usize>);

impl VisibleSequence {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Master index at visible position `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Clamps a cursor into `[0, len - 1]` (or 0 for an empty sequence).
    pub fn clamp(&self, cursor: usize) -> usize {
        cursor.min(self.0.len().saturating_sub(1))
    }
}

pub fn resolve_visibility(questionnaire: &Questionnaire, answers: &AnswerSet) -> VisibleSequence {
    VisibleSequence(
        questionnaire
            .questions()
            .iter()
            .enumerate()
            .filter(|(_, question)| question.depends_on.is_satisfied(answers))
            .map(|(index, _)| index)
            .collect(),
    )
}

/// Restricts `answers` to the questions that are currently visible.
pub fn visible_answers(questionnaire: &Questionnaire, answers: &AnswerSet) -> AnswerSet {
    let visible = resolve_visibility(questionnaire, answers);
    visible
        .indices()
        .iter()
        .filter_map(|index| questionnaire.question(*index))
        .filter_map(|question| {
            answers
                .get(question.id.as_str())
                .map(|value| (question.id.clone(), value.clone()))
        })
        .collect()
}
