use clap::Parser;
use screwdriver::config::{OutputFormat, ScrewdriverConfig};
use screwdriver::{lists, parsers, pretty, transforms, utils};
use serde::Serialize;
use serde_json::{Value, json};
use std::io::Read;

mod args;
use args::{Args, Command, convert_output};

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    ::log::debug!("Using configuration {:?}", config);

    match run(args.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            ::log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Read the configuration file, if any, then apply command-line overrides
fn load_config(args: &Args) -> screwdriver::Result<ScrewdriverConfig> {
    let mut config = match &args.config {
        Some(path) => ScrewdriverConfig::from_file(path)?,
        None => ScrewdriverConfig::default(),
    };

    if let Some(output) = args.output {
        config.output = convert_output(output);
    }
    if let Some(indent) = args.indent {
        config.indent = indent;
    }

    Ok(config)
}

fn run(command: Command, config: &ScrewdriverConfig) -> screwdriver::Result<String> {
    match command {
        Command::Link { html } => {
            let link = match html {
                Some(html) => parsers::parse_link(&html),
                None => {
                    let mut input = Vec::new();
                    std::io::stdin().read_to_end(&mut input)?;
                    ::log::info!("Read {} bytes from stdin", input.len());
                    parsers::parse_link_bytes(&input)?
                }
            };

            match config.output {
                OutputFormat::Json => render_json(&link, config),
                OutputFormat::Text => Ok(format!("{}\n{}", link.url(), link.text())),
            }
        }
        Command::Case { text } => {
            let converted = utils::camelcase_to_underscore(&text);
            match config.output {
                OutputFormat::Json => render_json(&converted, config),
                OutputFormat::Text => Ok(converted),
            }
        }
        Command::Rows { size, items } => {
            let rows: Vec<Vec<String>> = lists::list_to_rows(items, size).collect();
            render_rows(&rows, config)
        }
        Command::Columns { matrix } => {
            let matrix: Vec<Vec<Value>> = serde_json::from_str(&matrix)?;
            let columns = lists::rows_to_columns(&matrix)?;
            render_rows(&columns, config)
        }
        Command::Split { items } => {
            let (head, middle, tail) = lists::head_tail_middle(&items);
            match config.output {
                OutputFormat::Json => render_json(
                    &json!({"head": head, "middle": middle, "tail": tail}),
                    config,
                ),
                OutputFormat::Text => Ok([
                    head.cloned().unwrap_or_default(),
                    middle.join(" "),
                    tail.cloned().unwrap_or_default(),
                ]
                .join("\n")),
            }
        }
        Command::Run { path, input } => {
            let registry = transforms::builtin()?;
            let transform = registry.load(&path)?;
            ::log::debug!("Running transform {}", path);
            transform(&input)
        }
    }
}

fn render_json<T: Serialize + ?Sized>(
    data: &T,
    config: &ScrewdriverConfig,
) -> screwdriver::Result<String> {
    pretty::pretty_json_with_indent(data, config.indent)
}

fn render_rows<T: Serialize>(
    rows: &[Vec<T>],
    config: &ScrewdriverConfig,
) -> screwdriver::Result<String> {
    match config.output {
        OutputFormat::Json => render_json(rows, config),
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(rows.len());
            for row in rows {
                let cells = row
                    .iter()
                    .map(text_cell)
                    .collect::<screwdriver::Result<Vec<_>>>()?;
                lines.push(cells.join(" "));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Strings are written bare, anything else as compact JSON
fn text_cell<T: Serialize>(cell: &T) -> screwdriver::Result<String> {
    Ok(match serde_json::to_value(cell)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}
