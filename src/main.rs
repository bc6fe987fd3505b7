use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use rwalk::cli::{execute_command, output, Cli, CliError};
use rwalk::application::ApplicationError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let err = CliError::from(e);
            output::error(&err);
            process::exit(err.exit_code());
        }
    };

    setup_logging(cli.debug);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = execute_command(&cli, &mut out).and_then(|()| {
        out.flush()
            .map_err(|e| ApplicationError::io("flush stdout", e).into())
    });
    match result {
        Ok(()) => {}
        // reader went away (`rwalk | head`); nothing left to report
        Err(e) if e.is_broken_pipe() => tracing::debug!("stdout closed early"),
        Err(e) => {
            output::error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Logs go to stderr so stdout carries only simulation output
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
