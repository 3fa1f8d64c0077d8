mod cli;

use clap::Parser;
use pizza_match::error::PizzaError;
use pizza_match::reference::{Category, ReferenceDataset};
use pizza_match::types::config::{PizzaConfig, ReportFormatConfig};
use pizza_match::types::report::MatchReport;
use pizza_match::types::selections::{Selections, Toppings, DEFAULT_MAX_TOPPINGS};
use pizza_match::{config, logging, report, scoring};
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, PizzaError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    info!("pizza-match v{}", env!("CARGO_PKG_VERSION"));

    let quiet = cli.quiet;
    let dataset = ReferenceDataset::survey();
    match cli.command {
        cli::Commands::Score(cmd) => {
            if !cmd.path.exists() {
                return Err(PizzaError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(&cmd.path)?;
            if loaded.is_none() {
                info!(path = %cmd.path.display(), "no pizza.toml found, using flags only");
            }

            let selections = resolve_selections(&cmd, loaded.as_ref())?;
            let unknown = scoring::unknown_selections(&selections, dataset);
            if !quiet {
                for selection in &unknown {
                    eprintln!(
                        "warning: unknown {} selection: {}",
                        selection.category.label().to_lowercase(),
                        selection.value
                    );
                }
            }

            let result = scoring::calculate_match(&selections, dataset);
            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => match loaded.as_ref().and_then(PizzaConfig::report_format) {
                    Some(ReportFormatConfig::Json) => report::OutputFormat::Json,
                    Some(ReportFormatConfig::Md) | None => report::OutputFormat::Md,
                },
            };
            let rendered = report::render(&MatchReport::from(&result), output_format)?;
            println!("{rendered}");

            if unknown.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Options(cmd) => {
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered =
                report::render_options(dataset, Category::from(cmd.category), output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Config selections overlaid with command-line flags, field by field.
fn resolve_selections(
    cmd: &cli::ScoreCommand,
    config: Option<&PizzaConfig>,
) -> Result<Selections, PizzaError> {
    let limit = config
        .map(PizzaConfig::max_toppings)
        .unwrap_or(DEFAULT_MAX_TOPPINGS);
    let mut selections = match config {
        Some(cfg) => cfg.selections()?,
        None => Selections::default(),
    };

    for (category, flag) in [
        (Category::CrustType, &cmd.crust),
        (Category::SauceAmount, &cmd.sauce),
        (Category::RegionalStyle, &cmd.style),
        (Category::EatingMethod, &cmd.eating),
        (Category::CuttingStyle, &cmd.cutting),
    ] {
        if let Some(value) = flag {
            selections.set_choice(category, value.as_str());
        }
    }

    if cmd.no_toppings {
        selections.toppings.clear();
    } else if !cmd.toppings.is_empty() {
        selections.toppings = Toppings::try_from_names(cmd.toppings.iter().cloned(), limit)?;
    }

    Ok(selections)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
