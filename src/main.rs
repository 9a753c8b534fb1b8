//! hs-deploy - HS Code Classifier deployment sequencer
//!
//! Runs the deployment steps of the classifier (dependency install, data
//! setup, embedding generation, vector database setup, web application) as
//! external processes, strictly one after another.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logging;
mod plan;
mod sequencer;
mod ui;

use cli::{Cli, Commands, RunArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => commands::run::run(cli.project_dir, cli.config, RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::run(cli.project_dir, cli.config, args),
        Some(Commands::Plan(args)) => {
            commands::plan::run(cli.project_dir, cli.config, args).map(|()| 0)
        }
        Some(Commands::Init(args)) => commands::init::run(cli.project_dir, args).map(|()| 0),
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(&args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(help) = e.help() {
                eprintln!("  help: {help}");
            }
            std::process::exit(1);
        }
    }
}
