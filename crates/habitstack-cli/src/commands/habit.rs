//! Habit management commands for CLI.

use clap::Subcommand;
use std::path::PathBuf;

use habitstack_core::{
    BadHabitDetail, Habit, HabitCategory, Priority, Reminder, ValidationError,
};

use super::{habits_path, load_habits, parse_time, save_habits};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit to build
    Add {
        /// Habit title
        title: String,
        /// Category: health, productivity, mindfulness or social
        #[arg(long, default_value = "health")]
        category: String,
        /// Habit description
        #[arg(long)]
        description: Option<String>,
        /// Target time of day (HH:MM)
        #[arg(long)]
        target_time: Option<String>,
        /// Completions per week
        #[arg(long, default_value = "7")]
        weekly_target: u32,
        /// Daily reminder time (HH:MM)
        #[arg(long)]
        reminder: Option<String>,
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
    },
    /// Register a habit to break; a replacement habit is generated
    Break {
        /// Habit title
        title: String,
        /// Category: health, productivity, mindfulness or social
        #[arg(long, default_value = "health")]
        category: String,
        /// Severity: low, medium or high
        #[arg(long, default_value = "medium")]
        severity: String,
        /// Trigger (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,
        /// Reminder time moved to the replacement (HH:MM)
        #[arg(long)]
        reminder: Option<String>,
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
    },
    /// List habits
    List {
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
    },
    /// Toggle today's completion
    Toggle {
        /// Habit ID
        id: String,
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
    },
    /// Delete a habit (and its pair, if any)
    Delete {
        /// Habit ID
        id: String,
        /// Habit snapshot file
        #[arg(long)]
        habits: Option<PathBuf>,
    },
}

fn parse_severity(value: &str) -> Result<Priority, Box<dyn std::error::Error>> {
    match value.trim().to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(ValidationError::invalid_value(
            "severity",
            format!("'{other}', expected low, medium or high"),
        )
        .into()),
    }
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Add {
            title,
            category,
            description,
            target_time,
            weekly_target,
            reminder,
            habits,
        } => {
            let path = habits_path(habits)?;
            let mut collection = load_habits(&path)?;

            let mut habit = Habit::new(title, HabitCategory::parse(&category));
            if let Some(description) = description {
                habit = habit.with_description(description);
            }
            if let Some(time) = target_time {
                habit = habit.with_target_time(parse_time(&time)?);
            }
            if let Some(time) = reminder {
                habit = habit.with_reminder(Reminder::daily_at(parse_time(&time)?));
            }
            habit.weekly_target = weekly_target;

            let id = habit.id.clone();
            collection.add(habit);
            save_habits(&path, &collection)?;
            println!("Habit created: {id}");
        }
        HabitAction::Break {
            title,
            category,
            severity,
            triggers,
            reminder,
            habits,
        } => {
            let path = habits_path(habits)?;
            let mut collection = load_habits(&path)?;

            let detail = BadHabitDetail {
                severity: parse_severity(&severity)?,
                triggers,
                ..BadHabitDetail::default()
            };
            let mut bad = Habit::new_bad(title, HabitCategory::parse(&category), detail);
            if let Some(time) = reminder {
                bad = bad.with_reminder(Reminder::daily_at(parse_time(&time)?));
            }

            let pair = collection.register_bad_habit(bad);
            save_habits(&path, &collection)?;
            println!("Habit to break: {}", pair.bad_habit.id);
            println!("Replacement: {} ({})", pair.positive_habit.title, pair.positive_habit.id);
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
        HabitAction::List { habits } => {
            let collection = load_habits(&habits_path(habits)?)?;
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
        HabitAction::Toggle { id, habits } => {
            let path = habits_path(habits)?;
            let mut collection = load_habits(&path)?;
            let habit = collection.toggle(&id)?;
            println!(
                "{}: {} (streak {})",
                habit.title,
                if habit.completed_today { "done" } else { "not done" },
                habit.streak
            );
            save_habits(&path, &collection)?;
        }
        HabitAction::Delete { id, habits } => {
            let path = habits_path(habits)?;
            let mut collection = load_habits(&path)?;
            let removed = collection.delete(&id)?;
            save_habits(&path, &collection)?;
            for habit in removed {
                println!("Deleted: {} ({})", habit.title, habit.id);
            }
        }
    }
    Ok(())
}
