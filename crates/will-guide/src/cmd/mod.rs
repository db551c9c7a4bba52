pub mod answers;
pub mod glossary;
pub mod schema;
pub mod steps;
pub mod summary;
pub mod wizard;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `contents` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, contents: &str, what: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {what} parent {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {what} {}", path.display()))
}

pub(crate) fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
