//! fkgit CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use fkgit::cli::{Cli, CommandDispatcher};
use fkgit::config::load_settings;
use fkgit::shell::is_ci;
use fkgit::ui::{create_ui, OutputMode};
use fkgit::FkgitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fkgit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fkgit=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and go to stdout.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            return ExitCode::from(code);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("fkgit starting with args: {:?}", cli);

    if cli.command.is_none() {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::from(1);
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    let settings = match load_settings(cli.config.as_deref(), cli.root.clone()) {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(e.exit_code());
        }
    };
    tracing::debug!("Install root: {}", settings.install_root.display());

    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(FkgitError::Usage { message }) => {
            ui.error(&message);
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(1)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
