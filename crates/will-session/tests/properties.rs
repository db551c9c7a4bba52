use std::sync::Arc;

use proptest::prelude::*;
use will_session::{Step, WillSession};
use will_spec::builtin_questionnaire;

#[derive(Debug, Clone)]
enum Action {
    Answer(usize),
    Next,
    Back,
    Reset,
}

fn actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0usize..3).prop_map(Action::Answer),
            Just(Action::Next),
            Just(Action::Back),
            Just(Action::Reset),
        ],
        0..40,
    )
}

fn apply(session: &mut WillSession, action: &Action) {
    match action {
        Action::Answer(choice) => {
            let value = session.current_question().and_then(|question| {
                question
                    .options
                    .get(choice % question.options.len())
                    .map(|option| option.value.clone())
            });
            if let Some(value) = value {
                session.answer_current(value.as_str()).expect("declared option");
            }
        }
        Action::Next => {
            session.next();
        }
        Action::Back => session.back(),
        Action::Reset => session.reset(),
    }
}

fn new_session() -> WillSession {
    WillSession::new(Arc::new(builtin_questionnaire().expect("builtin questionnaire")))
}

proptest! {
    #[test]
    fn cursor_always_points_into_visible_sequence(script in actions()) {
        let mut session = new_session();
        for action in &script {
            apply(&mut session, action);
            prop_assert!(session.cursor() < session.visible().len());
            prop_assert!(session.current_question().is_some());
        }
    }

    #[test]
    fn next_then_back_restores_interior_position(script in actions()) {
        let mut session = new_session();
        for action in &script {
            apply(&mut session, action);
        }
        let last = session.visible().len() - 1;
        let position = session.cursor();
        prop_assume!(position > 0 && position < last && !session.is_complete());

        let answers = session.answers().clone();
        prop_assert!(matches!(session.next(), Step::Question(_)));
        session.back();
        prop_assert_eq!(session.cursor(), position);
        prop_assert_eq!(session.answers(), &answers);
    }

    #[test]
    fn reset_returns_to_first_question(script in actions()) {
        let mut session = new_session();
        for action in &script {
            apply(&mut session, action);
        }
        session.reset();
        prop_assert_eq!(session.cursor(), 0);
        prop_assert!(session.answers().is_empty());
        prop_assert_eq!(
            session.current_question().map(|question| question.id.as_str()),
            Some("age18")
        );
    }
}
