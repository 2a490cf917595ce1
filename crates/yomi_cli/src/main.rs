mod config;
mod logging;

use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use yomi_daf::{
    Daf, DafConfig, WHOLE_SHAS_PAGES, cycle_info_for_date, daf_schedule, yerushalmi_daf_for_date,
};
use yomi_time::{ArithmeticCalendar, CivilDate, HebrewCalendar};

use crate::config::YomiConfig;

/// Julian Day Number of 1970-Jan-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

#[derive(Parser)]
#[command(name = "yomi", version, about = "Yerushalmi Daf Yomi calculator")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to TOML configuration file (default: yomi.toml if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print tractate names in Hebrew.
    #[arg(long, global = true)]
    hebrew: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Page of the day for a date
    Daf {
        /// Civil date (YYYY-MM-DD), default today (UTC)
        date: Option<String>,
    },
    /// Pages for consecutive days
    Schedule {
        /// First civil date (YYYY-MM-DD), default today (UTC)
        date: Option<String>,
        /// Number of days (overrides [schedule] days)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Cycle number and bounds for a date
    Cycle {
        /// Civil date (YYYY-MM-DD), default today (UTC)
        date: Option<String>,
    },
    /// Hebrew date and holy day for a civil date
    Hebrew {
        /// Civil date (YYYY-MM-DD), default today (UTC)
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = YomiConfig::load(cli.config.as_deref())?;
    let daf_config = config.daf_config(cli.hebrew);
    let calendar = ArithmeticCalendar;

    match cli.command {
        Commands::Daf { date } => {
            let date = parse_date(date.as_deref())?;
            let daf = yerushalmi_daf_for_date(&calendar, date)
                .with_context(|| format!("lookup failed for {date}"))?;
            println!("{date}: {}", reading_label(daf, &daf_config));
        }

        Commands::Schedule { date, days } => {
            let start = parse_date(date.as_deref())?;
            let days = days.unwrap_or(config.schedule.days);
            for day in daf_schedule(&calendar, start, days)? {
                let hebrew = calendar.to_hebrew(day.date)?;
                println!(
                    "{} {:<10} {:<22} {}",
                    day.date,
                    day.date.weekday().name(),
                    hebrew.to_string(),
                    reading_label(day.daf, &daf_config)
                );
            }
        }

        Commands::Cycle { date } => {
            let date = parse_date(date.as_deref())?;
            match cycle_info_for_date(&calendar, date)? {
                Some(info) => {
                    println!("Cycle {}", info.cycle);
                    println!("  Start:      {}", info.start);
                    println!("  Next cycle: {}", info.next_start);
                    println!("  Day:        {} of {WHOLE_SHAS_PAGES}", info.offset + 1);
                }
                None => println!("{date}: no reading"),
            }
        }

        Commands::Hebrew { date } => {
            let date = parse_date(date.as_deref())?;
            let hebrew = calendar.to_hebrew(date)?;
            match calendar.holy_day(date) {
                Some(day) => println!("{date}: {hebrew} ({})", day.name()),
                None => println!("{date}: {hebrew}"),
            }
        }
    }
    Ok(())
}

fn reading_label(daf: Option<Daf>, config: &DafConfig) -> String {
    match daf {
        Some(daf) => daf.label(config),
        None => "no reading".to_string(),
    }
}

fn parse_date(s: Option<&str>) -> Result<CivilDate> {
    match s {
        Some(s) => s.parse().with_context(|| format!("invalid date '{s}'")),
        None => today(),
    }
}

fn today() -> Result<CivilDate> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?
        .as_secs();
    Ok(CivilDate::from_jdn(UNIX_EPOCH_JDN + (secs / 86_400) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_day_number() {
        assert_eq!(CivilDate::from_jdn(UNIX_EPOCH_JDN), CivilDate::new(1970, 1, 1).unwrap());
    }

    #[test]
    fn parse_explicit_date() {
        assert_eq!(
            parse_date(Some("2024-01-01")).unwrap(),
            CivilDate::new(2024, 1, 1).unwrap()
        );
        assert!(parse_date(Some("01/01/2024")).is_err());
    }

    #[test]
    fn cli_parses_schedule() {
        let cli = Cli::try_parse_from(["yomi", "--hebrew", "schedule", "2024-01-01", "--days", "3"])
            .unwrap();
        assert!(cli.hebrew);
        assert!(matches!(
            cli.command,
            Commands::Schedule { days: Some(3), .. }
        ));
    }

    #[test]
    fn no_reading_label() {
        assert_eq!(reading_label(None, &DafConfig::default()), "no reading");
    }
}
