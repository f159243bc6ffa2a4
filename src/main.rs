use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use trade_planner::config::Config;
use trade_planner::core::history::DayResult;
use trade_planner::journal::{Journal, PlanDraft};
use trade_planner::models::{Direction, TradePlan};

/// Daily trade-planning journal CLI.
#[derive(Parser)]
#[command(name = "trade-planner")]
#[command(about = "Record trading plans for the day and review the week", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plans recorded for a day
    Show {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Record a new plan
    Add {
        /// Plan label
        #[arg(short, long, default_value = "")]
        name: String,

        /// buy or sell
        #[arg(short = 'D', long, default_value = "")]
        direction: String,

        /// Take profit level
        #[arg(long, default_value_t = 0.0)]
        tp: f64,

        /// Stop loss level
        #[arg(long, default_value_t = 0.0)]
        sl: f64,

        /// Free-text note
        #[arg(long, default_value = "")]
        note: String,

        /// Day to record under (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show the rolling daily history
    History {
        /// Window size in days, ending today
        #[arg(short, long)]
        days: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let cli = Cli::parse();
    let journal = Journal::new(&cfg);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Show { date } => show_day(&journal, date.unwrap_or(today))?,
        Commands::Add {
            name,
            direction,
            tp,
            sl,
            note,
            date,
        } => {
            let direction = Direction::from_str_loose(&direction)
                .with_context(|| format!("unknown direction '{direction}', expected buy or sell"))?;
            let plan = journal.add_plan(
                date.unwrap_or(today),
                PlanDraft {
                    name,
                    direction,
                    tp,
                    sl,
                    note,
                },
            )?;
            println!(
                "Saved '{}' for {} ({})",
                plan.display_name(),
                date.unwrap_or(today),
                plan.result
            );
        }
        Commands::History { days } => {
            show_history(&journal, today, days.unwrap_or(cfg.history_window))?
        }
    }

    Ok(())
}

fn show_day(journal: &Journal, date: NaiveDate) -> Result<()> {
    let plans = journal.plans_for(date)?;

    println!("{}", "=".repeat(60));
    println!("  {}", date.format("%A, %d %B %Y"));
    println!("{}", "=".repeat(60));

    if plans.is_empty() {
        println!("  No trading plans yet");
        return Ok(());
    }

    for plan in &plans {
        print_plan(plan);
    }
    Ok(())
}

fn print_plan(plan: &TradePlan) {
    println!("  {}", plan.display_name());
    println!("    Direction: {}", plan.direction);
    println!("    TP: {} | SL: {}", plan.tp, plan.sl);
    println!("    Result: {}", plan.outcome());
    if plan.note.is_empty() {
        println!("    Notes: No notes provided");
    } else {
        println!("    Notes: {}", plan.note);
    }
    println!();
}

fn show_history(journal: &Journal, today: NaiveDate, days: usize) -> Result<()> {
    let summaries = journal.history(today, days)?;

    println!("{}", "=".repeat(60));
    println!("  LAST {} DAYS", days);
    println!("{}", "=".repeat(60));

    for summary in summaries {
        match summary.result {
            DayResult::Net { net_result, status } => {
                println!("  {}  {:+.2} ({})", summary.date, net_result, status)
            }
            DayResult::NoData => println!("  {}  No Data", summary.date),
        }
    }
    Ok(())
}
