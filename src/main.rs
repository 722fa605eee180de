//! nlu-utils CLI - model directory and JSON helpers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;

use nlu_utils::{
    is_model_dir_with, is_url, json_to_string, read_json_file, relative_normpath,
    remove_model_with, write_json_to_file, EntityBuilder, FixSuggestion, ListStyle, Settings,
    UtilsError,
};

#[derive(Parser)]
#[command(name = "nlu-utils")]
#[command(about = "Filesystem, JSON and entity helpers for NLU model tooling")]
#[command(version)]
struct Cli {
    /// YAML settings file (defaults to $NLU_UTILS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print FILE relative to BASE
    Relpath { file: String, base: String },

    /// Join items as a quoted, delimited list
    Join {
        items: Vec<String>,

        #[arg(long, default_value = ", ")]
        delim: String,

        #[arg(long, default_value = "'")]
        quote: String,
    },

    /// Print a standard entity record as JSON
    Entity {
        #[arg(long)]
        start: usize,

        #[arg(long)]
        end: usize,

        #[arg(long)]
        value: String,

        #[arg(long = "type")]
        entity_type: String,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        group: Option<String>,

        /// Extra field as key=value (value parsed as JSON, else kept as string)
        #[arg(long, value_parser = parse_extra)]
        extra: Vec<(String, Value)>,
    },

    /// Print whether TEXT starts with a URL scheme
    IsUrl { text: String },

    /// Check whether DIR is a model directory
    CheckModel { dir: PathBuf },

    /// Delete DIR if it is a model directory
    RemoveModel { dir: PathBuf },

    /// Re-format a JSON file
    FmtJson {
        input: PathBuf,

        /// Write to FILE instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, conflicts_with = "compact")]
        indent: Option<usize>,

        #[arg(long)]
        compact: bool,

        #[arg(long)]
        ensure_ascii: bool,
    },
}

fn parse_extra(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (stderr, stdout stays machine-readable)
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Settings::resolve(cli.config.as_deref())
        .and_then(|settings| run(cli.command, &settings));

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn run(command: Commands, settings: &Settings) -> Result<(), UtilsError> {
    match command {
        Commands::Relpath { file, base } => {
            if let Some(rel) = relative_normpath(Some(&file), &base) {
                println!("{}", rel.display());
            }
        }
        Commands::Join {
            items,
            delim,
            quote,
        } => println!("{}", ListStyle::new(&delim, &quote).join(&items)),
        Commands::Entity {
            start,
            end,
            value,
            entity_type,
            role,
            group,
            extra,
        } => {
            let mut builder = EntityBuilder::new(start, end, value, entity_type);
            if let Some(role) = role {
                builder = builder.role(role);
            }
            if let Some(group) = group {
                builder = builder.group(group);
            }
            let entity = builder.extras(extra).build();
            println!("{}", json_to_string(&entity, &settings.json)?);
        }
        Commands::IsUrl { text } => println!("{}", is_url(&text)),
        Commands::CheckModel { dir } => {
            if is_model_dir_with(&dir, &settings.model_dir)? {
                println!("{} '{}' is a model directory", "✓".green(), dir.display());
            } else {
                println!("{} '{}' is not a model directory", "✗".red(), dir.display());
            }
        }
        Commands::RemoveModel { dir } => {
            remove_model_with(&dir, &settings.model_dir)?;
            println!("{} Removed model directory '{}'", "✓".green(), dir.display());
        }
        Commands::FmtJson {
            input,
            output,
            indent,
            compact,
            ensure_ascii,
        } => {
            let mut options = settings.json.clone();
            if compact {
                options.indent = None;
            } else if indent.is_some() {
                options.indent = indent;
            }
            options.ensure_ascii |= ensure_ascii;

            let value: Value = read_json_file(&input)?;
            match output {
                Some(path) => {
                    write_json_to_file(&path, &value, &options)?;
                    eprintln!("{} Wrote '{}'", "✓".green(), path.display());
                }
                None => println!("{}", json_to_string(&value, &options)?),
            }
        }
    }
    Ok(())
}
