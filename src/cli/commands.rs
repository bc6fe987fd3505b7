//! Command dispatch: help, version, completions, or a simulation run

use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, Simulation, SimulationConfig};
use crate::config::Settings;
use crate::infrastructure::SeededOffsets;

use super::args::Cli;
use super::error::CliResult;

/// Merge parsed flags over loaded settings; flags win.
pub fn build_config(cli: &Cli, settings: &Settings) -> SimulationConfig {
    SimulationConfig {
        iterations: cli.requested_iterations().unwrap_or(settings.iterations),
        format: cli.format.map(Into::into).unwrap_or(settings.format),
        seed: cli.seed.or(settings.seed),
        start: cli.start.unwrap_or(settings.start),
        show_help: cli.help,
        show_version: cli.version,
    }
}

/// Execute the parsed command line, writing all regular output to `out`.
///
/// Settings are only loaded when a walk will actually run, so a broken
/// settings file never blocks `--help` or `--version`.
#[instrument(level = "debug", skip_all)]
pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let settings = if cli.exits_early() {
        Settings::default()
    } else {
        let settings = Settings::load(cli.config.as_deref())?;
        debug!(?settings, "settings loaded");
        settings
    };
    let config = build_config(cli, &settings);

    if config.show_help {
        write!(out, "{}", Cli::command().render_help())
            .map_err(|e| ApplicationError::io("write help", e))?;
        return Ok(());
    }
    if config.show_version {
        write!(out, "{}", Cli::command().render_version())
            .map_err(|e| ApplicationError::io("write version", e))?;
        return Ok(());
    }
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        debug!("generating completion script for {shell:?}");
        generate(shell, &mut cmd, name, out);
        return Ok(());
    }

    run_simulation(&config, out)
}

/// Run the walk described by `config` with a freshly seeded offset source.
pub fn run_simulation<W: Write>(config: &SimulationConfig, out: &mut W) -> CliResult<()> {
    info!(
        iterations = config.iterations,
        seed = ?config.seed,
        start = %config.start,
        "starting simulation"
    );
    let source = SeededOffsets::new(config.seed);
    Simulation::new(config, source).run(out)?;
    Ok(())
}
