//! Micro-habit suggestion command.

use chrono::{Local, NaiveTime, Timelike};
use clap::Args;
use std::path::PathBuf;

use habitstack_core::{accept_suggestion, Config, HabitContext, Mood, ValidationError};

use super::{habits_path, load_habits, save_habits};

#[derive(Args)]
pub struct SuggestArgs {
    /// Hour of day to suggest for (0-23, default: now)
    #[arg(long)]
    hour: Option<u32>,
    /// Current mood (0-4, low = stressed)
    #[arg(long, default_value = "3")]
    mood: u8,
    /// Personality affinity tag (overrides config)
    #[arg(long)]
    personality: Option<String>,
    /// Accept the Nth suggestion (1-based) and add it as a habit
    #[arg(long)]
    accept: Option<usize>,
    /// Habit snapshot file
    #[arg(long)]
    habits: Option<PathBuf>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let path = habits_path(args.habits)?;
    let mut habits = load_habits(&path)?;

    let now = Local::now();
    let at = match args.hour {
        Some(hour) => NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| {
            ValidationError::invalid_value("hour", format!("{hour}, expected 0-23"))
        })?,
        None => NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(NaiveTime::MIN),
    };
    let context = HabitContext::classify_with_threshold(
        &at,
        Mood::new(args.mood),
        config.context.stress_mood_threshold,
    );
    let personality = args.personality.or(config.suggestions.personality.clone());

    let engine = config.suggestion_engine();
    let suggestions = engine.suggest(habits.as_slice(), &context, personality.as_deref());

    if let Some(n) = args.accept {
        let chosen = n
            .checked_sub(1)
            .and_then(|i| suggestions.get(i))
            .ok_or_else(|| format!("no suggestion #{n}"))?;
        let habit = accept_suggestion(&chosen.candidate, &now);
        let id = habit.id.clone();
        habits.add(habit);
        save_habits(&path, &habits)?;
        println!("Habit created: {id}");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions available.");
        return Ok(());
    }

    println!("=== Micro-Habit Suggestions ===\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        let c = &suggestion.candidate;
        println!("{}. {} (Score: {})", i + 1, c.title, suggestion.score);
        println!("   {}", c.description);
        println!("   Why: {}", c.reasoning);
        println!("   Duration: {} min, {:?}", c.duration_minutes, suggestion.source);
        println!();
    }

    println!("Context:");
    println!("  Time: {}", context.time_bucket);
    println!("  Energy: {}", context.energy_level);
    println!("  Stressful: {}", context.is_stressful);
    Ok(())
}
