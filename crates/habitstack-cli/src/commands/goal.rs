//! Goal generation command.

use chrono::Utc;
use clap::Subcommand;
use std::path::PathBuf;

use habitstack_core::{Config, GoalTemplateService};

use super::{habits_path, load_habits};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Generate a long-term goal from a habit's category
    Generate {
        /// Source habit ID
        #[arg(long)]
        id: String,
        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GoalAction::Generate {
            id,
            seed,
            habits,
            json,
        } => {
            let config = Config::load_or_default();
            let collection = load_habits(&habits_path(habits)?)?;
            let habit = collection
                .get(&id)
                .ok_or_else(|| format!("habit not found: {id}"))?;

            let mut service = GoalTemplateService::from_seed(seed.or(config.goals.seed));
            let goal = service.generate(habit, Utc::now());

            if json {
                println!("{}", serde_json::to_string_pretty(&goal)?);
            } else {
                println!("Goal: {}", goal.title);
                println!("  {}", goal.description);
                println!("  Target: {} {}", goal.target, goal.unit);
                println!("  Deadline: {}", goal.deadline.format("%Y-%m-%d"));
                println!("  Priority: {}", goal.priority.name());
            }
        }
    }
    Ok(())
}
