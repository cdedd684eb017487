use std::path::PathBuf;

use clap::Parser;
use docdiff_diff::DiffOptions;

#[derive(Parser)]
#[command(
    name = "docdiff",
    about = "Structural diff for JSON documents",
    version,
)]
pub struct Cli {
    /// The first document (`-` reads stdin)
    pub old: PathBuf,
    /// The second document (`-` reads stdin)
    pub new: PathBuf,

    /// Exclude key paths matching PATTERN (repeatable)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,
    /// Compare primitives strictly, without type coercion
    #[arg(long)]
    pub no_coercion: bool,
    /// Compare arrays of primitives regardless of order
    #[arg(long)]
    pub unordered_arrays: bool,
    /// Maximum nested-object depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
    /// Load options from a TOML or JSON file; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Apply the flags on top of `base`.
    pub fn apply_flags(&self, mut base: DiffOptions) -> DiffOptions {
        base.ignore_properties.extend(self.ignore.iter().cloned());
        if self.no_coercion {
            base.enable_type_coercion = false;
        }
        if self.unordered_arrays {
            base.array_order_matters = false;
        }
        if let Some(depth) = self.max_depth {
            base.max_depth = depth;
        }
        base
    }
}
