//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DataSource;

/// hs-deploy - HS Code Classifier deployment sequencer
///
/// Installs dependencies, prepares data, builds embeddings, sets up the vector
/// database and launches the web application, one step after another.
#[derive(Parser, Debug)]
#[command(
    name = "hs-deploy",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Deployment sequencer for the HS Code Classifier",
    long_about = "hs-deploy runs the HS Code Classifier deployment steps in a fixed order: \
                  install dependencies, set up data, generate embeddings, set up the vector \
                  database and start the web application on port 8501.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  hs-deploy\n    \
                  hs-deploy run --halt-on-failure\n    \
                  hs-deploy run --data-source scrape\n    \
                  hs-deploy plan --json\n    \
                  hs-deploy init"
)]
pub struct Cli {
    /// Project directory the steps run in (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project_dir: Option<PathBuf>,

    /// Configuration file (defaults to hs-deploy.yaml in the project directory)
    #[arg(long, short = 'c', global = true, env = "HS_DEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the deployment sequence
    Run(RunArgs),

    /// Print the resolved deployment steps without running them
    Plan(PlanArgs),

    /// Write a default hs-deploy.yaml to the project directory
    Init(InitArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Args, Debug, Default, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                   Deploy with defaults:\n    hs-deploy run\n\n\
                   Show what would run:\n    hs-deploy run --dry-run\n\n\
                   Stop at the first failing step:\n    hs-deploy run --halt-on-failure\n\n\
                   Scrape live data instead of the bundled sample:\n    hs-deploy run --data-source scrape\n\n\
                   Serve on another port:\n    hs-deploy run --port 8080 --address 127.0.0.1")]
pub struct RunArgs {
    /// Announce steps without spawning them
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first failing step instead of continuing
    #[arg(long)]
    pub halt_on_failure: bool,

    /// Data acquisition script for the setup step (quick, scrape, official)
    #[arg(long, value_name = "SOURCE")]
    pub data_source: Option<DataSource>,

    /// Web server port
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Web server bind address
    #[arg(long)]
    pub address: Option<String>,
}

/// Arguments for the plan command
#[derive(Args, Debug, Default, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the deployment steps:\n    hs-deploy plan\n\n\
                  Machine-readable output:\n    hs-deploy plan --json")]
pub struct PlanArgs {
    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Data acquisition script for the setup step (quick, scrape, official)
    #[arg(long, value_name = "SOURCE")]
    pub data_source: Option<DataSource>,
}

/// Arguments for the init command
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite an existing hs-deploy.yaml
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    hs-deploy completions --shell bash > ~/.bash_completion.d/hs-deploy\n\n\
                  Generate zsh completions:\n    hs-deploy completions --shell zsh > ~/.zfunc/_hs-deploy")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
