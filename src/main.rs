use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;
use tracing_subscriber::EnvFilter;

use clgview::{Config, ConfigDraft, Item, Renderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("clgview")
        .about("Render a parsed changelog outline to HTML fragments")
        .arg(
            Arg::new("input")
                .help("JSON file containing the parsed item sequence")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON configuration file (defaults to the built-in configuration)"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let json_content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read items file: {}", input_file))?;
    let items: Vec<Item> = serde_json::from_str(&json_content)
        .with_context(|| format!("invalid item JSON in {}", input_file))?;

    let renderer = match matches.get_one::<String>("config") {
        Some(config_file) => {
            let config_content = fs::read_to_string(config_file)
                .with_context(|| format!("failed to read config file: {}", config_file))?;
            let draft: ConfigDraft = serde_json::from_str(&config_content)
                .with_context(|| format!("invalid configuration JSON in {}", config_file))?;
            Renderer::new(items, draft)?
        }
        // Explicit fallback, decided here in the CLI; the library itself
        // never substitutes defaults for missing fields.
        None => Renderer::with_config(items, Config::default()),
    };

    println!("{}", renderer.render());

    Ok(())
}
