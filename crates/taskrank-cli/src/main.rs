use clap::{Parser, Subcommand};
use taskrank_core::{Config, CoreError, ErrorKind};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "taskrank",
    version,
    about = "Rank tasks by urgency, importance, effort and dependencies"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every task and list them
    Analyze(commands::analyze::AnalyzeArgs),
    /// Pick the top tasks for today, with reasons
    Suggest(commands::suggest::SuggestArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("TASKRANK_LOG")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::Gateway(e) if e.kind() == ErrorKind::Internal => 2,
        _ => 1,
    }
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => Config::default(),
    };
    init_tracing(&config.log.filter);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default configuration");
    }

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &config),
        Commands::Suggest(args) => commands::suggest::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskrank_core::{ConfigError, GatewayError};

    #[test]
    fn test_exit_code_follows_error_kind() {
        let client = CoreError::from(GatewayError::EmptyTaskList);
        assert_eq!(exit_code(&client), 1);

        let internal = CoreError::from(GatewayError::Internal("render failed".into()));
        assert_eq!(exit_code(&internal), 2);

        let config = CoreError::from(ConfigError::UnknownKey("ui.theme".into()));
        assert_eq!(exit_code(&config), 1);
    }
}
