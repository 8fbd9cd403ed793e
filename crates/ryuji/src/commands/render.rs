//! Render commands - expand a template to stdout or a file

use crate::cli::RenderOpts;
use crate::context::{load_vars, AppContext};
use crate::output::print_raw;
use anyhow::{anyhow, Context as _, Result};
use colored::Colorize;
use ryuji_core::template::strip_blank_lines;
use std::path::Path;

/// Render a named template from the configured templates root
pub fn run_named(ctx: &AppContext, name: &str, opts: RenderOpts) -> Result<()> {
    let mut vars = load_vars(opts.vars.as_deref())?;

    let renderer = ctx.renderer();
    if ctx.verbose {
        eprintln!(
            "{} Rendering template '{}' from {}",
            "→".cyan(),
            name,
            renderer.config().templates_root
        );
    }

    let rendered = renderer
        .render_named(name, &mut vars)
        .with_context(|| format!("Failed to render '{}'", name))?;

    emit(rendered, &opts)
}

/// Render a template file given by path; components still come from the config
pub fn run_file(ctx: &AppContext, path: &Path, opts: RenderOpts) -> Result<()> {
    let mut vars = load_vars(opts.vars.as_deref())?;
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read template {}: {}", path.display(), e))?;

    if ctx.verbose {
        eprintln!("{} Rendering {}", "→".cyan(), path.display());
    }

    let rendered = ctx
        .renderer()
        .render(&text, &mut vars)
        .with_context(|| format!("Failed to render {}", path.display()))?;

    emit(rendered, &opts)
}

/// Write rendered text to `--output` or stdout
fn emit(rendered: String, opts: &RenderOpts) -> Result<()> {
    let rendered = if opts.strip_blank_lines {
        strip_blank_lines(&rendered)
    } else {
        rendered
    };

    match &opts.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            eprintln!("{} Wrote {}", "✓".green().bold(), path.display());
        }
        None => print_raw(&rendered)?,
    }

    Ok(())
}
