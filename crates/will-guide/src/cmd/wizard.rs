use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;
use will_session::{SessionRunner, Step, Summary, WillSession};
use will_spec::{render_json, render_question_text, render_text};

use super::answers::{load_answers, load_questionnaire, write_answers};
use super::{print_json, write_file};

#[derive(Args, Debug, Clone)]
pub struct WizardArgs {
    /// Answer the questionnaire from this file instead of prompting
    #[arg(long = "answers", value_name = "answers.json")]
    pub answers: Option<PathBuf>,
    /// Write the collected answers to this file
    #[arg(long = "answers-out", value_name = "answers.json")]
    pub answers_out: Option<PathBuf>,
    /// Use this questionnaire definition instead of the built-in one
    #[arg(long = "questionnaire", value_name = "questionnaire.json")]
    pub questionnaire: Option<PathBuf>,
    /// Also write the plain-text summary to this file
    #[arg(long = "out", value_name = "summary.txt")]
    pub out: Option<PathBuf>,
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

/// How an interactive walk-through ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Summary),
    Quit,
    /// Input ran out before the last question.
    Abandoned,
}

pub fn run(args: WizardArgs) -> Result<()> {
    let questionnaire = load_questionnaire(args.questionnaire.as_deref())?;
    let mut session = WillSession::new(questionnaire);

    let summary = match &args.answers {
        Some(path) => {
            let answers = load_answers(path)?;
            SessionRunner::run_with_answers(&mut session, &answers)
                .with_context(|| format!("answers {} do not complete the wizard", path.display()))?
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match run_interactive(&mut session, stdin.lock(), &mut stdout)? {
                Outcome::Completed(summary) => summary,
                Outcome::Quit => {
                    println!("Wizard closed; nothing was saved.");
                    return Ok(());
                }
                Outcome::Abandoned => bail!("stdin closed before the questionnaire was complete"),
            }
        }
    };

    if let Some(path) = &args.answers_out {
        write_answers(path, session.answers())?;
    }
    let text = render_text(&summary);
    if let Some(path) = &args.out {
        write_file(path, &text, "summary")?;
    }
    if args.json {
        print_json(&render_json(&summary, Some(&session.progress())))
    } else {
        println!("{text}");
        Ok(())
    }
}

/// Prompts for each visible question until the session completes or input ends.
///
/// A number or option value answers and advances; `b` goes back, `r` starts over and `q` quits.
/// An empty line advances when the current question already has an answer.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut WillSession,
    mut input: R,
    output: &mut W,
) -> Result<Outcome> {
    loop {
        let Some(question) = session.current_question() else {
            if let Step::Complete = session.next() {
                return Ok(completed(session));
            }
            continue;
        };
        let choices = question
            .options
            .iter()
            .map(|option| option.value.clone())
            .collect::<Vec<_>>();
        writeln!(
            output,
            "\n{}",
            render_question_text(question, session.current_answer(), &session.progress())
        )?;
        write!(
            output,
            "Select 1-{} (b = back, r = restart, q = quit): ",
            choices.len()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Abandoned);
        }
        let trimmed = line.trim();
        debug!(input = trimmed, "wizard input");

        let selected = match trimmed {
            "q" => return Ok(Outcome::Quit),
            "b" => {
                session.back();
                continue;
            }
            "r" => {
                session.reset();
                continue;
            }
            "" => {
                if !session.can_advance() {
                    writeln!(output, "Choose an option first.")?;
                    continue;
                }
                None
            }
            other => {
                let by_number = other
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=choices.len()).contains(n))
                    .map(|n| choices[n - 1].clone());
                let by_value = choices.iter().find(|value| value.as_str() == other).cloned();
                match by_number.or(by_value) {
                    Some(value) => Some(value),
                    None => {
                        writeln!(output, "'{other}' is not one of the options.")?;
                        continue;
                    }
                }
            }
        };

        if let Some(value) = selected {
            session.answer_current(value.as_str())?;
        }
        if let Step::Complete = session.next() {
            return Ok(completed(session));
        }
    }
}

fn completed(session: &WillSession) -> Outcome {
    let summary = session
        .summary()
        .cloned()
        .unwrap_or_else(|| session.preview_summary());
    Outcome::Completed(summary)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use will_spec::{RouteKind, builtin::ids};

    use super::*;

    fn session() -> WillSession {
        WillSession::new(load_questionnaire(None).expect("builtin"))
    }

    fn drive(session: &mut WillSession, script: &str) -> (Outcome, String) {
        let mut output = Vec::new();
        let outcome =
            run_interactive(session, Cursor::new(script.to_string()), &mut output).expect("run");
        (outcome, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn numbers_and_values_complete_the_wizard() {
        let mut session = session();
        // age18, specificGifts, minorKids, spouseStatus, canWitness, storagePlan
        let (outcome, output) = drive(&mut session, "1\nno\n2\nsingle\nyes\n1\n");
        match outcome {
            Outcome::Completed(summary) => assert_eq!(summary.route.kind, RouteKind::TwoWitness),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(session.is_complete());
        assert!(output.contains("Question 1 of 6 (17%)"));
        assert!(session.answers().is(ids::SPOUSE_STATUS, "single"));
    }

    #[test]
    fn empty_line_needs_an_answer() {
        let mut session = session();
        let (outcome, output) = drive(&mut session, "\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains("Choose an option first."));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn back_keeps_answers_and_empty_line_advances() {
        let mut session = session();
        let (_, output) = drive(&mut session, "yes\nb\n\n");
        assert_eq!(session.cursor(), 1);
        assert!(session.answers().is(ids::AGE_18, "yes"));
        assert!(output.contains("(*) 1. Yes"));
    }

    #[test]
    fn unknown_input_is_reported_and_ignored() {
        let mut session = session();
        let (outcome, output) = drive(&mut session, "7\nmaybe\nq\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(output.contains("'7' is not one of the options."));
        assert!(output.contains("'maybe' is not one of the options."));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn restart_clears_answers() {
        let mut session = session();
        let (outcome, _) = drive(&mut session, "no\nyes\nr\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(session.answers().is_empty());
        assert_eq!(session.cursor(), 0);
    }
}
