use clap::Subcommand;
use focuslearn_core::{CoreError, Database};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Sessions completed today
    Today {
        #[arg(long)]
        json: bool,
    },
    /// All-time totals
    All {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let (label, stats, json) = match action {
        StatsAction::Today { json } => ("today", db.stats_today()?, json),
        StatsAction::All { json } => ("all time", db.stats_all()?, json),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{label}: {} sessions, {} min focused",
            stats.sessions, stats.focus_min
        );
    }
    Ok(())
}
