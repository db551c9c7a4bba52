use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{
    self, glossary::GlossaryArgs, schema::SchemaArgs, steps::StepsArgs, summary::SummaryArgs,
    wizard::WizardArgs,
};
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "will-guide",
    about = "Self-assessment guide for making a Will in Ontario (educational only)",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log engine activity to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through the questionnaire and print the summary
    Wizard(WizardArgs),
    /// Derive a summary from an answers file
    Summary(SummaryArgs),
    /// Search the glossary of legal terms
    Glossary(GlossaryArgs),
    /// Show the three-step process overview
    Steps(StepsArgs),
    /// Print the JSON schema of the questionnaire definition or answers file
    Schema(SchemaArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Commands::Wizard(args) => cmd::wizard::run(args),
        Commands::Summary(args) => cmd::summary::run(args),
        Commands::Glossary(args) => cmd::glossary::run(args),
        Commands::Steps(args) => cmd::steps::run(args),
        Commands::Schema(args) => cmd::schema::run(args),
    }
}
