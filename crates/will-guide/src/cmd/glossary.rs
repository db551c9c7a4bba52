use anyhow::Result;
use clap::Args;
use serde_json::json;
use will_spec::{search_glossary, term_count_label};

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct GlossaryArgs {
    /// Case-insensitive search over term, description and tag
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: GlossaryArgs) -> Result<()> {
    let query = args.query.unwrap_or_default();
    let entries = search_glossary(&query);
    let label = term_count_label(entries.len());

    if args.json {
        return print_json(&json!({
            "query": query,
            "count": entries.len(),
            "label": label,
            "entries": entries,
        }));
    }

    println!("{label}");
    if entries.is_empty() {
        println!("No matches. Try \"executor\", \"witness\", or \"holograph\".");
    }
    for entry in entries {
        println!("\n{} [{}]\n  {}", entry.title, entry.tag, entry.body);
    }
    Ok(())
}
