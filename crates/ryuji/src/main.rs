mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::AppContext;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = AppContext::new(cli.config, cli.verbose).and_then(|ctx| match cli.command {
        Commands::Render { name, opts } => commands::render::run_named(&ctx, &name, opts),
        Commands::RenderFile { path, opts } => commands::render::run_file(&ctx, &path, opts),
        Commands::Inspect { path, json } => commands::inspect::run(&path, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
