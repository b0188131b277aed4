// ABOUTME: bmr-cli - command-line front end for the metabolic calculator and advice builders
// ABOUTME: Computes BMR/TDEE/macros as JSON, builds food image URLs and requests AI advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors
//!
//! Usage:
//! ```bash
//! # BMR, TDEE, target calories and macros as JSON
//! bmr-cli bmr --age 30 --gender male --height-cm 180 --weight-kg 80 --activity moderate
//!
//! # Lose 0.5 kg/week using Harris-Benedict and a custom split
//! bmr-cli bmr --age 30 --gender female --height-cm 165 --weight-kg 70 --activity light \
//!     --goal lose --rate 0.5 --formula harris-benedict --protein-pct 35 --carbs-pct 35 --fat-pct 30
//!
//! # Food photo URL (no network call)
//! bmr-cli image-url "grilled salmon"
//!
//! # Advice from the text-completion service
//! bmr-cli advice diet-plan --age 30 --gender male --height-cm 180 --weight-kg 80 --activity active --diet-type vegetarian
//! bmr-cli advice food "two boiled eggs and toast"
//! bmr-cli advice ask "How much protein after a workout?" --context "I lift 4x a week"
//! bmr-cli advice bmr-analysis --age 45 --gender female --height-cm 170 --weight-kg 68 --activity sedentary
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use bmr_advisor::{
    advice::{AdviceService, FoodImageUrlBuilder},
    config::{AdvisorConfig, MacroSplit},
    errors::{AppError, AppResult, ErrorResponse},
    intelligence::{
        compute_bmr, ActivityLevel, BmrFormula, BmrResult, CalculationOptions, Gender, GoalType,
        UserBiometrics,
    },
    llm::TextCompletionProvider,
    logging::LoggingConfig,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bmr-cli",
    about = "BMR calculator and AI nutrition advice",
    long_about = "Computes basal metabolic rate, daily energy expenditure and macro targets, and requests diet advice from a hosted text-completion service."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE, target calories and macros
    Bmr {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the image-generation URL for a food
    ImageUrl {
        /// Food name, e.g. "avocado toast"
        food: String,
    },

    /// Request advice from the text-completion service
    Advice {
        #[command(subcommand)]
        action: AdviceCommand,
    },
}

#[derive(Subcommand)]
enum AdviceCommand {
    /// Personalized diet plan built on the computed BMR
    DietPlan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Free-text goal (defaults to the goal type)
        #[arg(long)]
        goal_description: Option<String>,

        /// Diet type, e.g. "balanced", "vegetarian", "keto"
        #[arg(long, default_value = "balanced")]
        diet_type: String,
    },

    /// Nutritional breakdown of a food description
    Food {
        /// Food description, quoted verbatim in the prompt
        description: String,
    },

    /// Free-form nutrition question
    Ask {
        /// The question
        question: String,

        /// Optional background for the question
        #[arg(long)]
        context: Option<String>,
    },

    /// Insights on the BMR computed from a profile
    BmrAnalysis {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Sex used by the formulas
    #[arg(long, value_enum)]
    gender: GenderArg,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Activity level
    #[arg(long, value_enum, default_value = "moderate")]
    activity: ActivityArg,

    /// Weight goal
    #[arg(long, value_enum, default_value = "maintain")]
    goal: GoalArg,

    /// Goal rate in kg per week
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,

    /// BMR formula
    #[arg(long, value_enum, default_value = "mifflin-st-jeor")]
    formula: FormulaArg,

    /// Protein share of calories in percent
    #[arg(long, default_value_t = 30.0)]
    protein_pct: f64,

    /// Carbohydrate share of calories in percent
    #[arg(long, default_value_t = 40.0)]
    carbs_pct: f64,

    /// Fat share of calories in percent
    #[arg(long, default_value_t = 30.0)]
    fat_pct: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Clone, Copy, ValueEnum)]
enum GoalArg {
    Lose,
    Maintain,
    Gain,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormulaArg {
    MifflinStJeor,
    HarrisBenedict,
}

impl ProfileArgs {
    const fn biometrics(&self) -> UserBiometrics {
        UserBiometrics {
            age: self.age,
            gender: match self.gender {
                GenderArg::Male => Gender::Male,
                GenderArg::Female => Gender::Female,
            },
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: match self.activity {
                ActivityArg::Sedentary => ActivityLevel::Sedentary,
                ActivityArg::Light => ActivityLevel::Light,
                ActivityArg::Moderate => ActivityLevel::Moderate,
                ActivityArg::Active => ActivityLevel::Active,
                ActivityArg::VeryActive => ActivityLevel::VeryActive,
            },
            goal_type: match self.goal {
                GoalArg::Lose => GoalType::Lose,
                GoalArg::Maintain => GoalType::Maintain,
                GoalArg::Gain => GoalType::Gain,
            },
            goal_rate_kg_per_week: self.rate,
        }
    }

    fn options(&self) -> CalculationOptions {
        let formula = match self.formula {
            FormulaArg::MifflinStJeor => BmrFormula::MifflinStJeor,
            FormulaArg::HarrisBenedict => BmrFormula::HarrisBenedict,
        };
        CalculationOptions::default()
            .with_formula(formula)
            .with_macro_split(MacroSplit::new(self.protein_pct, self.carbs_pct, self.fat_pct))
    }

    fn compute(&self) -> AppResult<BmrResult> {
        compute_bmr(&self.biometrics(), &self.options())
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render JSON: {e}")).with_source(e))?;
    println!("{rendered}");
    Ok(())
}

fn advice_service() -> AppResult<AdviceService> {
    let config = AdvisorConfig::from_env()?;
    let provider = TextCompletionProvider::new(config.completion)?;
    AdviceService::with_temperatures(Arc::new(provider), config.temperatures)
}

async fn run_advice(action: AdviceCommand) -> AppResult<String> {
    let service = advice_service()?;

    match action {
        AdviceCommand::DietPlan {
            profile,
            goal_description,
            diet_type,
        } => {
            let result = profile.compute()?;
            let goal =
                goal_description.unwrap_or_else(|| profile.biometrics().goal_type.to_string());
            service.diet_plan(&result, &goal, &diet_type).await
        }
        AdviceCommand::Food { description } => service.analyze_food(&description).await,
        AdviceCommand::Ask { question, context } => {
            service
                .nutrition_advice(&question, context.as_deref())
                .await
        }
        AdviceCommand::BmrAnalysis { profile } => {
            let biometrics = profile.biometrics();
            let result = profile.compute()?;
            service
                .bmr_analysis(
                    result.bmr,
                    biometrics.age,
                    biometrics.gender,
                    biometrics.activity_level,
                )
                .await
        }
    }
}

async fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Bmr { profile } => print_json(&profile.compute()?),
        Command::ImageUrl { food } => {
            let host = AdvisorConfig::from_env()?.image_host;
            println!("{}", FoodImageUrlBuilder::new(host).build(&food)?);
            Ok(())
        }
        Command::Advice { action } => {
            let reply = run_advice(action).await?;
            println!("{reply}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("bmr-cli starting");

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::FAILURE
        }
    }
}
