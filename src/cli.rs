use clap::{Args, Parser, Subcommand, ValueEnum};
use pizza_match::reference::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pizza-match",
    version,
    about = "Build-a-pizza survey match scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a pizza against the survey
    Score(ScoreCommand),
    /// List the surveyed options of a category
    Options(OptionsCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Directory holding pizza.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub crust: Option<String>,
    #[arg(long)]
    pub sauce: Option<String>,
    /// Repeat for each topping, in the order picked
    #[arg(long = "topping", conflicts_with = "no_toppings")]
    pub toppings: Vec<String>,
    /// Ignore configured toppings
    #[arg(long)]
    pub no_toppings: bool,
    #[arg(long)]
    pub style: Option<String>,
    #[arg(long)]
    pub eating: Option<String>,
    #[arg(long)]
    pub cutting: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct OptionsCommand {
    #[arg(value_enum)]
    pub category: CategoryArg,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Crust,
    Sauce,
    Toppings,
    Style,
    Eating,
    Cutting,
    Frequency,
    EatCrust,
    DippingSauces,
    LeastFavoriteToppings,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Crust => Category::CrustType,
            CategoryArg::Sauce => Category::SauceAmount,
            CategoryArg::Toppings => Category::Toppings,
            CategoryArg::Style => Category::RegionalStyle,
            CategoryArg::Eating => Category::EatingMethod,
            CategoryArg::Cutting => Category::CuttingStyle,
            CategoryArg::Frequency => Category::Frequency,
            CategoryArg::EatCrust => Category::EatCrust,
            CategoryArg::DippingSauces => Category::DippingSauces,
            CategoryArg::LeastFavoriteToppings => Category::LeastFavoriteToppings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_args_match_category_keys() {
        for arg in CategoryArg::value_variants() {
            let name = arg
                .to_possible_value()
                .expect("every variant should be visible")
                .get_name()
                .to_string();
            assert_eq!(name, Category::from(*arg).key());
        }
    }
}
