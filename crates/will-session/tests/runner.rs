use std::sync::Arc;

use will_session::{
    AnswerSet, OptionValue, QuestionSpec, SessionError, SessionRunner, WillSession,
};
use will_spec::{RouteFlag, RouteKind, builtin::ids, builtin_questionnaire};

fn session() -> WillSession {
    WillSession::new(Arc::new(builtin_questionnaire().expect("builtin questionnaire")))
}

#[test]
fn run_with_answers_follows_the_visible_path() {
    let answers: AnswerSet = [
        (ids::AGE_18, "yes"),
        (ids::SPECIFIC_GIFTS, "yes"),
        (ids::MINOR_KIDS, "yes"),
        (ids::SPOUSE_STATUS, "commonlaw"),
        (ids::CAN_WITNESS, "no"),
        (ids::REMOTE_OPTION, "yes"),
        (ids::HANDWRITE, "yes"),
        (ids::STORAGE_PLAN, "no"),
    ]
    .into_iter()
    .collect();

    let mut session = session();
    let summary = SessionRunner::run_with_answers(&mut session, &answers).expect("run");

    assert!(session.is_complete());
    assert_eq!(summary.route.kind, RouteKind::Remote);
    assert!(summary.has_flag(RouteFlag::Remote));
    assert_eq!(session.answers(), &answers);
}

#[test]
fn run_with_answers_reports_first_missing_answer() {
    let answers: AnswerSet = [(ids::AGE_18, "yes"), (ids::SPECIFIC_GIFTS, "no")]
        .into_iter()
        .collect();
    let mut session = session();
    let err = SessionRunner::run_with_answers(&mut session, &answers).expect_err("missing");
    assert!(matches!(err, SessionError::MissingAnswer(id) if id.as_str() == ids::MINOR_KIDS));
}

#[test]
fn hidden_questions_are_never_asked() {
    let mut asked = Vec::new();
    let mut provider = |question: &QuestionSpec,
                        _current: Option<&OptionValue>|
     -> Result<OptionValue, SessionError> {
        asked.push(question.id.to_string());
        let value = match question.id.as_str() {
            "spouseStatus" => "single",
            _ => "yes",
        };
        Ok(OptionValue::from(value))
    };

    let mut session = session();
    let summary = SessionRunner::run(&mut session, &mut provider).expect("run");

    assert_eq!(summary.route.kind, RouteKind::TwoWitness);
    assert_eq!(
        asked,
        vec!["age18", "specificGifts", "minorKids", "spouseStatus", "canWitness", "storagePlan"]
    );
}

#[test]
fn provider_errors_abort_the_run() {
    let mut provider = |_question: &QuestionSpec,
                        _current: Option<&OptionValue>|
     -> Result<OptionValue, SessionError> {
        Err(SessionError::Provider("stdin closed".into()))
    };
    let mut session = session();
    let err = SessionRunner::run(&mut session, &mut provider).expect_err("provider error");
    assert_eq!(err.to_string(), "answer provider failed: stdin closed");
    assert!(!session.is_complete());
}

#[test]
fn invalid_provider_values_are_rejected() {
    let mut provider = |_question: &QuestionSpec,
                        _current: Option<&OptionValue>|
     -> Result<OptionValue, SessionError> { Ok(OptionValue::from("maybe")) };
    let mut session = session();
    let err = SessionRunner::run(&mut session, &mut provider).expect_err("invalid value");
    assert!(matches!(err, SessionError::Answer(_)));
    assert!(session.answers().is_empty());
}
