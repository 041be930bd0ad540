use clap::Subcommand;
use focuslearn_core::{CoreError, Database, ProgressStore};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Print the progress record and derived displays
    Show {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProgressAction) -> Result<(), CoreError> {
    match action {
        ProgressAction::Show { json } => {
            let db = Database::open()?;
            let store = ProgressStore::load(&db);
            let record = store.record();
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!(
                    "daily focus    {:.1} / {:.1} min ({}%)",
                    record.daily_minutes_focused,
                    record.daily_goal_minutes,
                    record.daily_completion_percent()
                );
                println!("streak         {} days", record.streak_days);
                println!(
                    "level          {} ({} / {} XP)",
                    record.level, record.xp_in_current_level, record.xp_required_for_next_level
                );
                println!("total XP       {}", record.total_xp);
                println!(
                    "achievements   {}",
                    record
                        .unlocked_achievements
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!("last visit     {}", record.last_visit.to_rfc3339());
            }
            Ok(())
        }
    }
}
