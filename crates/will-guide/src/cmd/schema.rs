use anyhow::Result;
use clap::Args;
use schemars::schema_for;
use will_spec::FormSpec;

use super::answers::AnswersDocument;
use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Print the answers file schema instead of the questionnaire definition
    #[arg(long = "answers", default_value_t = false)]
    pub answers: bool,
}

pub fn run(args: SchemaArgs) -> Result<()> {
    if args.answers {
        print_json(&schema_for!(AnswersDocument))
    } else {
        print_json(&schema_for!(FormSpec))
    }
}
