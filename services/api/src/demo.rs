use crate::infra::{build_quoter, parse_date, parse_variant};
use chrono::NaiveDate;
use clap::Args;
use pawplan::catalog::RecipeCatalog;
use pawplan::config::AppConfig;
use pawplan::error::AppError;
use pawplan::nutrition::portions::MealPortion;
use pawplan::nutrition::profile::{ActivityLevel, Allergen, DogProfile, HealthGoal};
use pawplan::nutrition::units::{Age, Weight, WeightUnit};
use pawplan::plans::{DogPlanRequest, PlanQuote, PlanQuoter, PlanRequest};
use pawplan::pricing::{DiscountKind, PriceSource};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Dog's name as shown on the plan
    #[arg(long, default_value = "Your dog")]
    pub(crate) name: String,
    /// Current body weight
    #[arg(long)]
    pub(crate) weight: f64,
    /// Unit for --weight (lb or kg)
    #[arg(long, default_value = "lb", value_parser = parse_variant::<WeightUnit>)]
    pub(crate) unit: WeightUnit,
    /// Age in months
    #[arg(long)]
    pub(crate) age_months: f64,
    /// Body condition score, 1-9
    #[arg(long, default_value_t = 5)]
    pub(crate) bcs: u8,
    /// Activity level (low, moderate, active, working)
    #[arg(long, default_value = "moderate", value_parser = parse_variant::<ActivityLevel>)]
    pub(crate) activity: ActivityLevel,
    /// Whether the dog is spayed or neutered
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub(crate) neutered: bool,
    /// Recipe slug; repeat for a rotation. Omit to use recommendations.
    #[arg(long = "recipe")]
    pub(crate) recipes: Vec<String>,
    /// Portion (full, topper25, topper50, topper75)
    #[arg(long, default_value = "full", value_parser = parse_variant::<MealPortion>)]
    pub(crate) portion: MealPortion,
    /// Weeks between deliveries
    #[arg(long, default_value_t = 2)]
    pub(crate) cadence_weeks: u8,
    #[arg(long, default_value_t = 2)]
    pub(crate) meals_per_day: u8,
    /// Apply the first-box discount
    #[arg(long)]
    pub(crate) first_box: bool,
    /// First delivery date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_on: Option<NaiveDate>,
    /// Price table CSV overriding PAWPLAN_PRICE_TABLE
    #[arg(long)]
    pub(crate) price_table: Option<PathBuf>,
    /// Print the quote as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecipesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// First delivery date (YYYY-MM-DD) for the delivery schedule preview
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_on: Option<NaiveDate>,
    /// Optional price table CSV
    #[arg(long)]
    pub(crate) price_table: Option<PathBuf>,
    /// Skip the recommendation walkthrough and only print the quote
    #[arg(long)]
    pub(crate) skip_recommendations: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let quoter = build_quoter(&config.pricing, args.price_table.as_deref())?;
    let json = args.json;
    let request = quote_request(args);

    let quote = quoter.quote(&request).map_err(pawplan::plans::PlanServiceError::from)?;
    if json {
        println!("{}", render_json(&quote));
    } else {
        render_quote(&quote);
    }
    Ok(())
}

pub(crate) fn run_recipes(args: RecipesArgs) -> Result<(), AppError> {
    let catalog = RecipeCatalog::standard();
    if args.json {
        println!("{}", render_json(&catalog.recipes()));
        return Ok(());
    }

    println!("Recipe catalog");
    for recipe in catalog.recipes() {
        let macros = recipe.macros;
        println!(
            "- {} ({}): {:.0} kcal/kg | {:.1}% protein | {:.1}% fat | {:.1}% fiber | ${:.2}/100g",
            recipe.name,
            recipe.slug,
            macros.kcal_per_kg,
            macros.protein_pct,
            macros.fat_pct,
            macros.fiber_pct,
            f64::from(recipe.price_per_100g_cents) / 100.0
        );
        if !recipe.allergens.is_empty() {
            let allergens: Vec<&str> = recipe.allergens.iter().map(|a| a.label()).collect();
            println!("    contains: {}", allergens.join(", "));
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        start_on,
        price_table,
        skip_recommendations,
    } = args;

    let config = AppConfig::load()?;
    let quoter = build_quoter(&config.pricing, price_table.as_deref())?;
    let request = demo_request(start_on);

    println!("Fresh food plan demo");
    if !skip_recommendations {
        render_recommendations(&quoter, &request)?;
    }

    let quote = quoter
        .quote(&request)
        .map_err(pawplan::plans::PlanServiceError::from)?;
    render_quote(&quote);
    Ok(())
}

fn quote_request(args: QuoteArgs) -> PlanRequest {
    let mut profile = DogProfile::new(
        args.name,
        Weight {
            value: args.weight,
            unit: args.unit,
        },
        Age::months(args.age_months),
    );
    profile.body_condition = args.bcs;
    profile.activity = args.activity;
    profile.neutered = args.neutered;

    PlanRequest {
        dogs: vec![DogPlanRequest {
            profile,
            recipes: args.recipes,
            portion: args.portion,
            meals_per_day: args.meals_per_day,
        }],
        cadence_weeks: args.cadence_weeks,
        first_box: args.first_box,
        start_on: args.start_on,
    }
}

fn demo_request(start_on: Option<NaiveDate>) -> PlanRequest {
    let mut juniper = DogProfile::new("Juniper", Weight::pounds(58.0), Age::years(5.0));
    juniper.body_condition = 7;
    juniper.health_goals = vec![HealthGoal::WeightManagement, HealthGoal::JointSupport];

    let mut rocket = DogProfile::new("Rocket", Weight::pounds(24.0), Age::months(9.0));
    rocket.activity = ActivityLevel::Active;
    rocket.allergies = vec![Allergen::Chicken];

    let mut topper = DogPlanRequest::new(rocket);
    topper.portion = MealPortion::Topper50;
    topper.meals_per_day = 3;

    PlanRequest {
        dogs: vec![DogPlanRequest::new(juniper), topper],
        cadence_weeks: 2,
        first_box: true,
        start_on,
    }
}

fn render_recommendations(quoter: &PlanQuoter, request: &PlanRequest) -> Result<(), AppError> {
    for dog in &request.dogs {
        let recommendation = quoter
            .recommend(&dog.profile, 3)
            .map_err(pawplan::plans::PlanServiceError::from)?;
        println!(
            "\nRecommendations for {} ({}, goal: {:?})",
            recommendation.dog,
            recommendation.life_stage.label(),
            recommendation.weight_goal
        );
        for score in &recommendation.ranked {
            println!(
                "  - {}: {}% match ({})",
                score.recipe, score.match_percent, score.reasoning
            );
        }
        for exclusion in &recommendation.excluded {
            println!("  x {}: {}", exclusion.recipe, exclusion.reason());
        }
    }
    Ok(())
}

fn render_quote(quote: &PlanQuote) {
    println!(
        "\nPlan quote: every {} weeks{}",
        quote.cadence_weeks,
        if quote.first_box { " (first box)" } else { "" }
    );
    for dog in &quote.dogs {
        println!(
            "- {}: {:.0} kcal/day ({}, {} meals/day){}",
            dog.dog,
            dog.energy.der_kcal,
            dog.portion.label(),
            dog.meals_per_day,
            if dog.recommended { " using recommendations" } else { "" }
        );
        for portion in &dog.portions {
            let source = match &portion.price_source {
                PriceSource::Table { .. } => "table",
                PriceSource::PerGram => "per gram",
            };
            println!(
                "    {}: {:.0} g/day, {:.0} g/meal, {} per day ({source})",
                portion.recipe_name,
                portion.grams_per_day,
                portion.grams_per_meal,
                dollars(portion.daily_cents)
            );
        }
    }

    println!("Subtotal: {}", dollars(quote.subtotal_cents));
    for line in &quote.discounts {
        let label = match &line.kind {
            DiscountKind::AdditionalDog { dog } => format!("additional dog ({dog})"),
            DiscountKind::FirstBox => "first box".to_string(),
        };
        println!(
            "  -{} {}% {label}",
            dollars(line.amount_cents),
            line.percent
        );
    }
    println!(
        "Total: {} ({} per day, {:.1} lb per delivery)",
        dollars(quote.total_cents),
        dollars(quote.price_per_day_cents),
        quote.pounds_per_delivery
    );
    if !quote.delivery_schedule.is_empty() {
        let dates: Vec<String> = quote
            .delivery_schedule
            .iter()
            .map(|date| date.to_string())
            .collect();
        println!("Deliveries: {}", dates.join(", "));
    }
}

fn render_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}

fn dollars(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
