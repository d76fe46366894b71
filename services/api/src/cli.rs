use crate::demo::{run_demo, run_quote, run_recipes, DemoArgs, QuoteArgs, RecipesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pawplan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PawPlan",
    about = "Size, recommend and price fresh dog food plans from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Quote a single-dog plan from a quick profile
    Quote(QuoteArgs),
    /// List the recipe catalog with macros and prices
    Recipes(RecipesArgs),
    /// Run a two-dog end-to-end demo of recommendations and pricing
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Recipes(args) => run_recipes(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawplan::nutrition::portions::MealPortion;
    use pawplan::nutrition::profile::ActivityLevel;
    use pawplan::nutrition::units::WeightUnit;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["pawplan"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn quote_arguments_parse_domain_values() {
        let cli = Cli::try_parse_from([
            "pawplan",
            "quote",
            "--weight",
            "35",
            "--unit",
            "lb",
            "--age-months",
            "30",
            "--activity",
            "working",
            "--recipe",
            "beef",
            "--recipe",
            "turkey",
            "--portion",
            "topper50",
            "--neutered",
            "false",
        ])
        .expect("parses");

        let Some(Command::Quote(args)) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.unit, WeightUnit::Pounds);
        assert_eq!(args.activity, ActivityLevel::Working);
        assert_eq!(args.portion, MealPortion::Topper50);
        assert_eq!(args.recipes, vec!["beef", "turkey"]);
        assert!(!args.neutered);
        assert_eq!(args.cadence_weeks, 2);
    }

    #[test]
    fn unknown_activity_is_rejected() {
        let result = Cli::try_parse_from([
            "pawplan",
            "quote",
            "--weight",
            "20",
            "--age-months",
            "30",
            "--activity",
            "couch",
        ]);
        assert!(result.is_err());
    }
}
