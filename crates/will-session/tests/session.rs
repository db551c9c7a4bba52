use std::sync::Arc;

use will_session::{SessionError, SessionStatus, Step, WillSession};
use will_spec::{AnswerError, AnswerSet, RouteKind, builtin::ids, builtin_questionnaire};

fn session() -> WillSession {
    WillSession::new(Arc::new(builtin_questionnaire().expect("builtin questionnaire")))
}

fn current_id(session: &WillSession) -> Option<String> {
    session.current_question().map(|question| question.id.to_string())
}

#[test]
fn starts_on_first_unconditional_question() {
    let session = session();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.status(), SessionStatus::Active);
    assert_eq!(current_id(&session).as_deref(), Some(ids::AGE_18));
    assert_eq!(session.visible().len(), 6);
    assert!(!session.can_advance());
}

#[test]
fn answering_does_not_move_the_cursor() {
    let mut session = session();
    session.answer(ids::AGE_18, "no").expect("answer");
    assert_eq!(session.cursor(), 0);
    assert!(session.can_advance());
    assert_eq!(session.visible().len(), 7);
}

#[test]
fn under_eighteen_routes_through_minor_exception() {
    let mut session = session();
    session.answer_current("no").expect("answer");
    assert!(matches!(session.next(), Step::Question(1)));
    assert_eq!(current_id(&session).as_deref(), Some(ids::MINOR_EXCEPTION));
}

#[test]
fn invalid_option_is_rejected_without_mutation() {
    let mut session = session();
    let err = session
        .answer(ids::AGE_18, "sometimes")
        .expect_err("invalid option");
    assert!(matches!(
        err,
        SessionError::Answer(AnswerError::InvalidOption { .. })
    ));
    assert!(session.answers().is_empty());

    let err = session.answer("shoeSize", "yes").expect_err("unknown question");
    assert!(matches!(
        err,
        SessionError::Answer(AnswerError::UnknownQuestion(_))
    ));
}

#[test]
fn back_is_a_no_op_at_start() {
    let mut session = session();
    session.back();
    assert_eq!(session.cursor(), 0);
}

#[test]
fn progress_tracks_cursor_and_visible_length() {
    let mut session = session();
    let progress = session.progress();
    assert_eq!((progress.position, progress.total, progress.percent), (1, 6, 17));

    session.answer_current("yes").expect("answer");
    session.next();
    let progress = session.progress();
    assert_eq!((progress.position, progress.total), (2, 6));
}

#[test]
fn shrinking_sequence_clamps_cursor() {
    let mut session = session();
    for value in ["yes", "no", "no", "single", "no", "no", "no"] {
        session.answer_current(value).expect("answer");
        session.next();
    }
    // age18, specificGifts, minorKids, spouseStatus, canWitness, remoteOption, handwrite -> storagePlan
    assert_eq!(current_id(&session).as_deref(), Some(ids::STORAGE_PLAN));
    assert_eq!(session.cursor(), 7);

    session.answer(ids::CAN_WITNESS, "yes").expect("answer");
    // remoteOption disappears; handwrite stays visible through the stale remoteOption answer
    assert_eq!(session.visible().len(), 7);
    assert_eq!(session.cursor(), 6);
    assert_eq!(current_id(&session).as_deref(), Some(ids::STORAGE_PLAN));
}

#[test]
fn next_on_last_question_completes_with_summary() {
    let mut session = session();
    for value in ["yes", "no", "no", "single", "yes"] {
        session.answer_current(value).expect("answer");
        assert!(matches!(session.next(), Step::Question(_)));
    }
    session.answer_current("yes").expect("storage plan");
    assert_eq!(session.next(), Step::Complete);

    assert!(session.is_complete());
    assert_eq!(session.progress().percent, 100);
    let summary = session.summary().expect("summary");
    assert_eq!(summary.route.kind, RouteKind::TwoWitness);
    assert_eq!(summary, &session.preview_summary());
}

#[test]
fn summary_is_absent_until_completion() {
    let mut session = session();
    session.answer_current("yes").expect("answer");
    assert!(session.summary().is_none());
    assert_eq!(session.preview_summary().route.kind, RouteKind::HighRisk);
}

#[test]
fn answering_after_completion_reopens_session() {
    let mut session = session();
    session.answer_current("no").expect("answer");
    session.next();
    session.answer_current("no").expect("answer");
    for _ in 0..10 {
        if session.next() == Step::Complete {
            break;
        }
    }
    assert!(session.is_complete());
    assert_eq!(
        session.summary().map(|summary| summary.route.kind),
        Some(RouteKind::Ineligible)
    );

    session.answer(ids::MINOR_EXCEPTION, "yes").expect("answer");
    assert_eq!(session.status(), SessionStatus::Active);
    assert!(session.summary().is_none());
}

#[test]
fn reset_clears_everything() {
    let mut session = session();
    session.answer_current("no").expect("answer");
    session.next();
    session.answer_current("yes").expect("answer");
    session.next();
    session.reset();

    assert!(session.answers().is_empty());
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.status(), SessionStatus::Active);
    assert_eq!(current_id(&session).as_deref(), Some(ids::AGE_18));
    assert_eq!(session.visible().len(), 6);
}

#[test]
fn sessions_sharing_a_definition_are_independent() {
    let questionnaire = Arc::new(builtin_questionnaire().expect("builtin"));
    let mut first = WillSession::new(Arc::clone(&questionnaire));
    let second = WillSession::new(questionnaire);

    first.answer_current("no").expect("answer");
    first.next();
    assert_eq!(first.cursor(), 1);
    assert_eq!(second.cursor(), 0);
    assert!(second.answers().is_empty());
}

#[test]
fn with_answers_validates_each_entry() {
    let questionnaire = Arc::new(builtin_questionnaire().expect("builtin"));
    let good: AnswerSet = [(ids::AGE_18, "yes"), (ids::CAN_WITNESS, "no")]
        .into_iter()
        .collect();
    let session = WillSession::with_answers(Arc::clone(&questionnaire), &good).expect("valid");
    assert_eq!(session.visible().len(), 8);

    let bad: AnswerSet = [(ids::AGE_18, "perhaps")].into_iter().collect();
    assert!(WillSession::with_answers(questionnaire, &bad).is_err());
}

#[test]
fn status_serializes_in_snake_case() {
    assert_eq!(
        serde_json::to_value(SessionStatus::Complete).expect("serialize"),
        serde_json::json!("complete")
    );
    assert_eq!(
        serde_json::to_value(SessionStatus::Active).expect("serialize"),
        serde_json::json!("active")
    );
}
