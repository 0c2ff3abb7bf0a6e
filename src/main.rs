//! Errand - personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use errand::cli::{self, Cli, Commands};
use errand::config::Config;

fn main() -> Result<()> {
    if std::env::var("ERRAND_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("errand=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Handle commands that don't need a task store
    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "errand", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Config { command }) => return cli::config::run(command),
        _ => {}
    }

    let config = Config::load()?;
    let profile = cli
        .profile
        .unwrap_or_else(|| config.default_profile.clone());

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&profile, &config, args),
        Some(Commands::List(args)) => cli::list::run(&profile, &config, args),
        Some(Commands::Show(args)) => cli::show::run(&profile, &config, args),
        Some(Commands::Edit(args)) => cli::edit::run(&profile, &config, args),
        Some(Commands::Toggle(args)) => cli::toggle::run_toggle(&profile, &config, args),
        Some(Commands::Done(args)) => cli::toggle::run_done(&profile, &config, args),
        Some(Commands::Rm(args)) => cli::remove::run(&profile, &config, args),
        Some(Commands::CompleteAll) => cli::bulk::run_complete_all(&profile, &config),
        Some(Commands::ClearCompleted(args)) => {
            cli::bulk::run_clear_completed(&profile, &config, args)
        }
        None => cli::list::run(&profile, &config, cli::list::ListArgs::default()),
        _ => unreachable!(),
    }
}
