//! gardenplan CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Plan a garden interactively (default command)
//! gardenplan
//! gardenplan plan
//!
//! # Browse the plant guide, optionally with a search
//! gardenplan guide tomato
//!
//! # Print the catalog, filtered and sorted by name
//! gardenplan list bean
//! gardenplan list --json
//!
//! # Print one plant's info card
//! gardenplan show Basil
//!
//! # Use a custom catalog and log to a file
//! gardenplan --catalog plants.toml --log-file gardenplan.log
//! ```
//!
//! # Configuration
//!
//! Configuration is read from the user's config directory
//! (`~/.config/gardenplan/config.toml` on Linux) when it exists. Run
//! `gardenplan config init` to write one with the defaults.

use gardenplan::{
    GardenError, Result,
    catalog::Catalog,
    cli::{Cli, Commands, ConfigCommands},
    completions,
    config::GardenConfig,
    garden::{CardFields, PlantSelector},
    logging::{self, LogTarget},
    search::filter_sorted,
    ui::{
        AppOptions, GardenApp, OutputWriter, Screen, StdoutWriter,
        output::{format_info_card, format_plant_line},
    },
};
use std::io;
use std::path::{Path, PathBuf};

/// Load the catalog named by the configuration, or the builtin one
fn load_catalog(config: &GardenConfig) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

/// Run the interactive planner or guide
fn handle_interactive(
    config: &GardenConfig,
    catalog: &Catalog,
    screen: Screen,
    query: Option<String>,
) -> Result<()> {
    let options = AppOptions {
        timings: config.selector_timings(),
        status_ttl: config.status_ttl(),
        wide_layout_min_width: config.wide_layout_min_width,
        start_screen: screen,
        guide_query: query,
    };
    GardenApp::new(options).run(catalog)?;
    Ok(())
}

/// Print the filtered, name-sorted catalog
fn handle_list_command(catalog: &Catalog, query: Option<&str>, json: bool, output: &dyn OutputWriter) -> Result<()> {
    let query = query.unwrap_or_default();
    let matches = filter_sorted(catalog.plants(), query);

    if json {
        output.write(&serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        output.warning(&format!("No plants match '{query}'"));
        return Ok(());
    }

    for record in &matches {
        output.write(&format_plant_line(record));
    }
    output.info(&PlantSelector::results_label(matches.len()));
    Ok(())
}

/// Print one plant's info card
fn handle_show_command(catalog: &Catalog, name: &str, output: &dyn OutputWriter) {
    if !catalog.contains(name) {
        output.warning(&format!("'{name}' is not in the catalog"));
    }
    output.write(&format_info_card(&CardFields::lookup(name, catalog)));
}

/// Handle `config path | show | init`
fn handle_config_command(config: &GardenConfig, config_path: &Path, command: &ConfigCommands, output: &dyn OutputWriter) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            output.write(&config_path.display().to_string());
        }
        ConfigCommands::Show => {
            output.write(config.to_toml()?.trim_end());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                return Err(GardenError::InvalidInput(format!(
                    "Config file already exists at {}. Use --force to overwrite it.",
                    config_path.display()
                )));
            }
            GardenConfig::default().save_to(config_path)?;
            output.success(&format!("Wrote default config to {}", config_path.display()));
        }
    }
    Ok(())
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        completions::generate_static(*shell, &mut io::stdout());
        return Ok(());
    }

    let config_path: PathBuf = match &cli.config {
        Some(path) => path.clone(),
        None => GardenConfig::config_path()?,
    };
    let mut config = GardenConfig::load_from(&config_path)?;
    config.apply_overrides(cli.catalog.clone(), cli.log_file.clone());

    let target = LogTarget::choose(config.log_file.as_deref(), command.is_interactive());
    logging::init(&target, &config.log_level)?;
    tracing::debug!(?command, config = %config_path.display(), "starting");

    if let Commands::Config { command } = &command {
        return handle_config_command(&config, &config_path, command, output);
    }

    let catalog = load_catalog(&config)?;

    match command {
        Commands::Plan => handle_interactive(&config, &catalog, Screen::Planner, None),
        Commands::Guide { query } => handle_interactive(&config, &catalog, Screen::Guide, query),
        Commands::List { query, json } => handle_list_command(&catalog, query.as_deref(), json, output),
        Commands::Show { name } => {
            handle_show_command(&catalog, &name, output);
            Ok(())
        }
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse_args();
    let output = StdoutWriter::new(cli.quiet);

    if let Err(e) = run(&cli, &output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}
