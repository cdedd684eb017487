use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod render;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();
    commands::run_command(cli)
}

/// `RUST_LOG` when set, otherwise `warn` (`debug` with `--verbose`).
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
        assert_eq!(EnvFilter::new(default_directive(true)).to_string(), "debug");
    }
}
