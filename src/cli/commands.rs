//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::TreeifyService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::infrastructure::{read_input, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `treeify --help`".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => cmd_config(cli, command),
        Commands::Render { file } => cmd_render(&service(cli)?, file.as_deref()),
        Commands::Inspect { file, lines } => cmd_inspect(&service(cli)?, file.as_deref(), *lines),
        Commands::Check { file } => cmd_check(&service(cli)?, file.as_deref()),
    }
}

fn config_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e).into()),
    }
}

/// Settings from config layers, then command line overrides.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let dir = config_dir(cli)?;
    let mut settings = Settings::load(Some(&dir))?;
    if let Some(style) = cli.style {
        settings.style = style;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn service(cli: &Cli) -> CliResult<TreeifyService> {
    Ok(TreeifyService::new(load_settings(cli)?))
}

#[instrument(skip(service))]
fn cmd_render(service: &TreeifyService, file: Option<&Path>) -> CliResult<()> {
    let input = read_input(file)?;
    output::info(&service.render(&input)?);
    Ok(())
}

#[instrument(skip(service))]
fn cmd_inspect(service: &TreeifyService, file: Option<&Path>, lines: bool) -> CliResult<()> {
    let input = read_input(file)?;
    let listing = if lines {
        service.inspect_lines(&input)?
    } else {
        service.inspect_nodes(&input)?
    };
    output::info(&listing);
    Ok(())
}

#[instrument(skip(service))]
fn cmd_check(service: &TreeifyService, file: Option<&Path>) -> CliResult<()> {
    let input = read_input(file)?;
    let summary = service.check(&input)?;
    output::success(&format!("valid outline {summary}"));
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::header("# effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = config::global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            output::action("global", &global);
            output::action(
                "local",
                &config::local_config_path(&config_dir(cli)?).display(),
            );
        }
    }
    Ok(())
}
