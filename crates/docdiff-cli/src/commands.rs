use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use docdiff_diff::{Differ, DiffOptions};
use docdiff_types::Value;

use crate::cli::{Cli, OutputFormat};
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.old == Path::new("-") && cli.new == Path::new("-") {
        bail!("only one document can be read from stdin");
    }

    let base = match &cli.config {
        Some(path) => DiffOptions::load(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => DiffOptions::default(),
    };
    let options = cli.apply_flags(base);
    tracing::debug!(?options, "resolved options");

    let old = read_document(&cli.old)?;
    let new = read_document(&cli.new)?;
    let result = Differ::new(&options).diff(&old, &new);

    match cli.format {
        OutputFormat::Text => print!("{}", render::render_text(&result)),
        OutputFormat::Json => println!("{}", render::render_json(&result)?),
    }

    if cli.exit_code && !result.is_empty() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn read_document(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing {} as JSON", path.display()))
}
