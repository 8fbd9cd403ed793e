//! Inspect command - list the directives of a template

use crate::output::{print_json, print_raw};
use anyhow::{anyhow, Result};
use colored::Colorize;
use ryuji_core::template::{scan, Directive, DirectiveKind};
use std::path::Path;

/// Print every directive in the template at `path`
pub fn run(path: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read template {}: {}", path.display(), e))?;
    let directives = scan(&text);

    if json {
        print_json(&directives)?;
        return Ok(());
    }

    if directives.is_empty() {
        print_raw(&format!("{} No directives found\n", "!".yellow()))?;
        return Ok(());
    }

    let mut listing: String = directives
        .iter()
        .map(|directive| describe(directive) + "\n")
        .collect();
    listing.push_str(&format!(
        "\n{} {} directive(s)\n",
        "✓".green().bold(),
        directives.len()
    ));
    print_raw(&listing)?;
    Ok(())
}

/// One line per directive: `line  kind  target`
fn describe(directive: &Directive) -> String {
    let kind = match directive.kind {
        DirectiveKind::Component => "component",
        DirectiveKind::For => "for",
        DirectiveKind::EndFor => "endfor",
        DirectiveKind::If => "if",
        DirectiveKind::EndIf => "endif",
        DirectiveKind::Html => "html",
        DirectiveKind::Variable => "variable",
    };
    let target = match directive.kind {
        DirectiveKind::Variable => directive.keyword.clone(),
        _ => directive.args.join(":"),
    };
    format!(
        "{:>5}  {}  {}",
        directive.line,
        format!("{:<9}", kind).cyan(),
        target
    )
}
