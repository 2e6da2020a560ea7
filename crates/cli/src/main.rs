use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter_config::FilterConfig;
use model::{FilterNode, SqlFragment};
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "filtersql",
    version = "0.1.0",
    about = "Translate query-builder filters into parameterized SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            input,
            config,
            whitelist,
            pretty,
            output,
        } => {
            let config = load_config(config.as_deref())?.with_whitelist_override(whitelist);
            let source = read_input(&input)?;
            let fragment = translate(&source, &config)?;

            info!(
                "Translated filter from {}: {} parameter(s)",
                input,
                fragment.values.len()
            );

            match output {
                Some(path) => output::write_json(&fragment, pretty, &path)?,
                None => output::print_json(&fragment, pretty)?,
            }
        }
        Commands::Parse {
            input,
            config,
            pretty,
        } => {
            let config = load_config(config.as_deref())?;
            let source = read_input(&input)?;
            let tree = parse(&source, &config)?;
            output::print_json(&tree, pretty)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<FilterConfig, CliError> {
    match path {
        Some(path) => Ok(FilterConfig::load(path)?),
        None => {
            debug!("No config file given, using defaults");
            Ok(FilterConfig::default())
        }
    }
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn translate(source: &str, config: &FilterConfig) -> Result<SqlFragment, CliError> {
    let fragment =
        translator::json_to_sql(source, &config.parse_options(), &config.translator())?;
    Ok(fragment)
}

fn parse(source: &str, config: &FilterConfig) -> Result<Option<FilterNode>, CliError> {
    let tree = filter_syntax::parse_with(source, &config.parse_options())?;
    Ok(tree)
}
