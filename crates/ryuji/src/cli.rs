//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ryuji")]
#[command(version, about = "Render [[ bracket ]] directive templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to ryuji.toml (defaults to ./ryuji.toml when present)
    #[arg(short, long, global = true, env = "RYUJI_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a named template from the templates root
    Render {
        /// Template name without extension (e.g. "index")
        name: String,

        #[command(flatten)]
        opts: RenderOpts,
    },

    /// Render a template file given by path
    RenderFile {
        /// Path to the template file
        path: PathBuf,

        #[command(flatten)]
        opts: RenderOpts,
    },

    /// List the directives found in a template file
    Inspect {
        /// Path to the template file
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct RenderOpts {
    /// Variables file (.json or .toml)
    #[arg(long)]
    pub vars: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Remove empty and whitespace-only lines from the output
    #[arg(long)]
    pub strip_blank_lines: bool,
}
