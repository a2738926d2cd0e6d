//! Multicat CLI Binary
//!
//! Concatenates the text files under a directory and prints the result or
//! copies it to the clipboard.

use clap::Parser;
use multicat::cli::{exit_code, format_outcome, map_error, Cli, RunContext, RunRequest};
use multicat::logging::{init_logging, LoggingConfig};
use multicat::sink::{
    run_clipboard_holder_if_requested, ClipboardSink, OutputSink, StdoutSink,
};
use std::process;
use tracing::{error, info};

fn main() {
    match run_clipboard_holder_if_requested() {
        Ok(true) => return,
        Ok(false) => {}
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }

    let cli = Cli::parse();

    let context = match RunContext::new(cli.directory.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Multicat starting");

    let mut sink: Box<dyn OutputSink> = if cli.copy {
        Box::new(ClipboardSink)
    } else {
        Box::new(StdoutSink)
    };

    let request = RunRequest::from(&cli);
    let mut stderr = std::io::stderr();

    match context.execute(&request, sink.as_mut(), &mut stderr) {
        Ok(outcome) => {
            info!(?outcome, "Run completed");
            if let Some(message) = format_outcome(&outcome, sink.confirmation()) {
                println!("{}", message);
            }
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }
}

/// Apply CLI logging flags on top of the configured logging section.
/// Logging stays off unless --verbose or --log-level is given.
fn build_logging_config(cli: &Cli, configured: &LoggingConfig) -> LoggingConfig {
    if !cli.verbose && cli.log_level.is_none() {
        return LoggingConfig {
            enabled: false,
            ..configured.clone()
        };
    }

    let mut config = configured.clone();
    config.enabled = true;

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
