use super::load_content;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_editor::{Form, FormEdit};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content file (defaults to the configured one)
    pub input: Option<PathBuf>,
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: String,
    pub label: &'static str,
    pub message: String,
}

/// Type the content into a fresh form and collect every field error
pub fn check_form(edits: Vec<FormEdit>) -> Result<Vec<FieldProblem>> {
    let mut form = Form::new();
    for edit in edits {
        edit.apply(&mut form)?;
    }
    form.check_validity();

    Ok(form
        .fields()
        .filter(|(_, input)| input.has_error)
        .map(|(at, input)| FieldProblem {
            field: at.to_string(),
            label: input.spec.label,
            message: input.error_message.clone(),
        })
        .collect())
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = args.input.unwrap_or_else(|| config.content_path(cwd));

    println!("🔍 {} {}", "Checking".green().bold(), path.display());

    let data = load_content(&path)?;
    let problems = check_form(FormEdit::typing(&data))?;

    if problems.is_empty() {
        println!("   {} All fields are valid", "✓".green());
        return Ok(());
    }

    for problem in &problems {
        println!(
            "   {} {} ({}): {}",
            "✗".red(),
            problem.label,
            problem.field.bright_white(),
            problem.message
        );
    }

    Err(anyhow::anyhow!(
        "{} field{} need attention",
        problems.len(),
        if problems.len() == 1 { "" } else { "s" }
    ))
}
