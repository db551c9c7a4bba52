use anyhow::Result;
use clap::Args;
use serde_json::json;
use will_spec::{ProcessStep, Stepper, process_steps};

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct StepsArgs {
    /// Show only this step (1-based, clamped to the available steps)
    #[arg(long = "step", value_name = "N")]
    pub step: Option<usize>,
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: StepsArgs) -> Result<()> {
    let total = process_steps().len();
    let selected = match args.step {
        Some(step) => {
            let mut stepper = Stepper::new();
            stepper.goto(step.saturating_sub(1));
            vec![(stepper.index(), stepper.current())]
        }
        None => process_steps().iter().enumerate().collect(),
    };

    if args.json {
        let steps = selected
            .iter()
            .map(|(index, step)| {
                json!({
                    "number": index + 1,
                    "title": step.title,
                    "body": step.body,
                    "bullets": step.bullets,
                })
            })
            .collect::<Vec<_>>();
        return print_json(&json!({ "total": total, "steps": steps }));
    }

    let blocks = selected
        .iter()
        .map(|(index, step)| render_step(*index, total, step))
        .collect::<Vec<_>>();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn render_step(index: usize, total: usize, step: &ProcessStep) -> String {
    let mut lines = vec![
        format!("Step {} of {total}: {}", index + 1, step.title),
        step.body.to_string(),
    ];
    lines.extend(step.bullets.iter().map(|bullet| format!("- {bullet}")));
    lines.join("\n")
}
