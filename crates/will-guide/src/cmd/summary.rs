use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use will_session::WillSession;
use will_spec::{render_json, render_text};

use super::answers::{load_answers, load_questionnaire};
use super::{print_json, write_file};

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Answers file; unanswered questions are allowed
    #[arg(long = "answers", value_name = "answers.json")]
    pub answers: PathBuf,
    /// Also write the plain-text summary to this file
    #[arg(long = "out", value_name = "summary.txt")]
    pub out: Option<PathBuf>,
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    let answers = load_answers(&args.answers)?;
    let session = WillSession::with_answers(load_questionnaire(None)?, &answers)
        .with_context(|| format!("answers {} are not valid", args.answers.display()))?;
    let summary = session.preview_summary();

    let text = render_text(&summary);
    if let Some(path) = &args.out {
        write_file(path, &text, "summary")?;
    }
    if args.json {
        print_json(&render_json(&summary, None))
    } else {
        println!("{text}");
        Ok(())
    }
}
