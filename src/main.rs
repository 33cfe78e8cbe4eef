//! docmd CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docmd::output::{input_path, output_path, write_json};
use docmd::parsing::extract_file_with_options;
use docmd::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("docmd={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> docmd::Result<()> {
    let input = input_path(&cli.base);
    let output = output_path(&cli.base);

    let result = extract_file_with_options(&input, &cli.extract_options(), cli.print_ast)?;
    write_json(&output, &result)?;

    info!(
        classes = result.classes.len(),
        interfaces = result.interfaces.len(),
        enums = result.enums.len(),
        functions = result.functions.len(),
        "wrote {}",
        output.display()
    );
    Ok(())
}
