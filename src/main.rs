use clap::Parser;
use gitmuse::cli::Cli;
use gitmuse::config::Config;
use gitmuse::error::{AppError, AppResult};
use gitmuse::git::{GitVersion, Repository};
use gitmuse::llm::OllamaClient;
use gitmuse::workflow::{ConsoleUi, WorkflowOptions, WorkflowOutcome, run_workflow};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(WorkflowOutcome::Committed) => {
            println!("Commit created.");
        }
        Ok(WorkflowOutcome::HandedOff) => {
            println!("Commit message written for lazygit.");
        }
        Ok(WorkflowOutcome::Aborted) => {
            eprintln!("Aborted, no commit created.");
            std::process::exit(1);
        }
        Err(AppError::NoChanges) => {
            eprintln!("No changes to commit.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> AppResult<WorkflowOutcome> {
    GitVersion::validate()?;

    let repo = match &cli.path {
        Some(path) => Repository::open(path)?,
        None => Repository::discover()?,
    };

    let config = Config::load_or_default()?;
    let client = OllamaClient::new(config.ollama.host.clone());

    let options = WorkflowOptions {
        patch: cli.patch,
        wip: cli.wip,
        handoff: cli.lazygit,
        model: cli.model.or(config.ollama.model),
    };

    let mut ui = ConsoleUi::new();
    run_workflow(&repo, &client, &mut ui, &options).await
}
