use clap::{Parser, Subcommand, ValueEnum};
use screwdriver::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "screwdriver")]
#[command(about = "Small helpers for links, names and lists")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Spaces per indent level in JSON output (overrides the configuration file)
    #[arg(long)]
    pub indent: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the first anchor's url and text (reads stdin when no HTML is given)
    Link { html: Option<String> },

    /// Convert CamelCase to lower_case_with_underscores
    Case { text: String },

    /// Split items into rows
    Rows {
        /// Items per row
        #[arg(short, long, default_value_t = 3)]
        size: usize,

        items: Vec<String>,
    },

    /// Turn the rows of a JSON array of arrays into columns
    Columns { matrix: String },

    /// Show the head, middle and tail of a list of items
    Split { items: Vec<String> },

    /// Run a built-in transform by dotted name
    Run { path: String, input: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Json,
    Text,
}

/// Convert from CLI argument output type to the configured output type
pub fn convert_output(arg: OutputArg) -> OutputFormat {
    match arg {
        OutputArg::Json => OutputFormat::Json,
        OutputArg::Text => OutputFormat::Text,
    }
}
