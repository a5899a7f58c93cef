use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use parsequill::codegen::{CodeGenerator, GeneratorMode};
use parsequill::config::Config;
use parsequill::file::loader::{load_json_file, load_json_from_stdin};
use parsequill::jsonpath::{self, JsonPath};
use parsequill::render::JsonFormatter;

/// ParseQuill - Explore nested JSON and generate pandas extraction code
#[derive(Parser)]
#[command(name = "parsequill")]
#[command(version)]
#[command(about = "Explore nested JSON as a flat tree and generate pandas extraction code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON document as an indented tree with selectable paths
    Tree {
        /// JSON file to read ("-" or omitted reads stdin; .gz is decompressed)
        file: Option<String>,

        /// Annotate each selectable line with its structural path
        #[arg(short, long)]
        paths: bool,

        /// Maximum printed length of an object key
        #[arg(long)]
        max_key_length: Option<usize>,

        /// Maximum printed length of a scalar value
        #[arg(long)]
        max_value_length: Option<usize>,
    },
    /// Generate pandas extraction statements for a set of paths
    Generate {
        /// Structural path to extract, e.g. "$.items[0].name" (repeatable)
        #[arg(short, long = "path", value_name = "JSONPATH", required = true)]
        paths: Vec<String>,

        /// Generation mode
        #[arg(short, long, value_enum)]
        mode: Option<GeneratorMode>,

        /// Expression for the series holding the raw data
        #[arg(short, long)]
        source: Option<String>,

        /// Expression for the dataframe receiving extracted columns
        #[arg(short, long)]
        target: Option<String>,

        /// Column name to chain root-anchored extractions from
        #[arg(long)]
        root_name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Command::Tree {
            file,
            paths,
            max_key_length,
            max_value_length,
        } => run_tree(&config, file, paths, max_key_length, max_value_length),
        Command::Generate {
            paths,
            mode,
            source,
            target,
            root_name,
        } => run_generate(&config, &paths, mode, source, target, root_name),
    }
}

fn run_tree(
    config: &Config,
    file: Option<String>,
    annotate_paths: bool,
    max_key_length: Option<usize>,
    max_value_length: Option<usize>,
) -> Result<()> {
    let value = match file.as_deref() {
        Some("-") | None => {
            if std::io::stdin().is_terminal() {
                anyhow::bail!("No input: provide a JSON file or pipe a document to stdin");
            }
            load_json_from_stdin()?
        }
        Some(path) => load_json_file(path).with_context(|| format!("Failed to load '{}'", path))?,
    };

    let formatter = JsonFormatter::new(
        max_key_length.unwrap_or(config.max_key_length),
        max_value_length.unwrap_or(config.max_value_length),
    );

    if annotate_paths {
        for line in formatter.flatten(&value) {
            let indent = " ".repeat(config.indent_size * line.level);
            match &line.path {
                Some(path) => println!("{}{}  # {}", indent, line.text, path),
                None => println!("{}{}", indent, line.text),
            }
        }
    } else {
        println!("{}", formatter.render_text(&value, config.indent_size));
    }

    Ok(())
}

fn run_generate(
    config: &Config,
    raw_paths: &[String],
    mode: Option<GeneratorMode>,
    source: Option<String>,
    target: Option<String>,
    root_name: Option<String>,
) -> Result<()> {
    let paths: Vec<JsonPath> = raw_paths
        .iter()
        .map(|raw| {
            jsonpath::Parser::parse(raw).with_context(|| format!("Invalid path '{}'", raw))
        })
        .collect::<Result<_>>()?;

    let generator = CodeGenerator::new(
        source.as_deref().unwrap_or(&config.source),
        target.as_deref().unwrap_or(&config.target),
    )
    .with_mode(mode.unwrap_or(config.mode))
    .with_root_name(root_name.as_deref().unwrap_or(&config.root_name));

    let code = generator.generate(&paths)?;
    if !code.is_empty() {
        println!("{}", code);
    }

    Ok(())
}
