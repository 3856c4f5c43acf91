//! `agenda` CLI — run booking conflict and availability checks against a
//! reservations snapshot from the command line.
//!
//! The snapshot is a JSON array of reservation records, as returned by the
//! agenda service:
//! `[{ "id": "...", "client_name": "...", "date": "yyyy-MM-dd",
//!    "start_time": "HH:MM", "end_time": "HH:MM" }, ...]`
//!
//! ## Usage
//!
//! ```sh
//! # Would a new booking conflict? (exit 1 on conflict)
//! agenda check -i reservations.json --date 2024-01-01 --start 09:30 --end 10:30
//!
//! # Re-check while editing, ignoring the booking's own span
//! agenda check -i reservations.json --date 2024-01-01 --start 09:00 --end 11:00 --exclude r1
//!
//! # Which picker options are selectable for a start time?
//! agenda picker -i reservations.json --date 2024-01-01 --role start
//!
//! # Open hourly slots for the public view
//! agenda free -i reservations.json --date 2024-01-01
//!
//! # The whole week, booked spans or free/busy
//! agenda week -i reservations.json --date 2024-01-01
//! agenda week -i reservations.json --date 2024-01-01 --free-busy
//! ```

use agenda_engine::booking::Draft;
use agenda_engine::catalog::SlotCatalog;
use agenda_engine::picker::{is_option_disabled, SlotRole};
use agenda_engine::schedule::{week_days, week_start, week_view, DisplayMode, WeekView};
use agenda_engine::{free_slots, parse_date, AgendaError, Reservation};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "agenda", version, about = "Court booking conflict and availability checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate booking against the snapshot (exit 1 on conflict)
    Check {
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Booking date (yyyy-MM-dd)
        #[arg(long)]
        date: String,
        /// Start time label (HH:MM)
        #[arg(long)]
        start: String,
        /// End time label (HH:MM)
        #[arg(long)]
        end: String,
        /// Reservation id to ignore (the edit flow's self-exclusion)
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Show which picker options are selectable for a role
    Picker {
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Booking date (yyyy-MM-dd)
        #[arg(long)]
        date: String,
        /// Whether the option would become the booking's start or end
        #[arg(long, value_enum)]
        role: Role,
        /// Reservation id to ignore (the edit flow's self-exclusion)
        #[arg(long)]
        exclude: Option<String>,
        /// Slot granularity in minutes (30 or 60)
        #[arg(long, default_value_t = 30)]
        grid: u32,
    },
    /// List the open catalog slots for a date
    Free {
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to derive (yyyy-MM-dd)
        #[arg(long)]
        date: String,
        /// Slot granularity in minutes (30 or 60)
        #[arg(long, default_value_t = 60)]
        grid: u32,
    },
    /// Print the week containing a date, booked spans or free/busy
    Week {
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Any date inside the week (yyyy-MM-dd); the view starts on Monday
        #[arg(long)]
        date: String,
        /// Show open slots instead of booked spans
        #[arg(long)]
        free_busy: bool,
        /// Slot granularity for --free-busy, in minutes (30 or 60)
        #[arg(long, default_value_t = 60)]
        grid: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Role {
    Start,
    End,
}

impl From<Role> for SlotRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Start => SlotRole::Start,
            Role::End => SlotRole::End,
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Check {
            input,
            date,
            start,
            end,
            exclude,
        } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let draft = Draft {
                client_name: String::new(),
                date,
                start_time: start,
                end_time: end,
            };
            match draft.validate(&snapshot, exclude.as_deref()) {
                Ok(validated) => {
                    let record = validated.record();
                    println!(
                        "free: {} {}-{}",
                        record.date, record.start_time, record.end_time
                    );
                }
                Err(err @ AgendaError::Conflict { .. }) => {
                    println!("{}", err);
                    process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Picker {
            input,
            date,
            role,
            exclude,
            grid,
        } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let date = parse_date(&date)?;
            let catalog = catalog_for(grid)?;
            for label in catalog.labels() {
                let blocked =
                    is_option_disabled(&label, role.into(), date, &snapshot, exclude.as_deref())?;
                println!("[{}] {}", if blocked { "x" } else { " " }, label);
            }
        }
        Commands::Free { input, date, grid } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let date = parse_date(&date)?;
            let catalog = catalog_for(grid)?;
            for label in free_slots(&catalog, date, &snapshot)? {
                println!("{}", label);
            }
        }
        Commands::Week {
            input,
            date,
            free_busy,
            grid,
        } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let date = parse_date(&date)?;
            let catalog = catalog_for(grid)?;
            let days = week_days(week_start(date));
            let mode = if free_busy {
                DisplayMode::FreeBusy
            } else {
                DisplayMode::Detailed
            };
            print_week(week_view(&days, &catalog, &snapshot, mode)?);
        }
    }

    Ok(())
}

fn print_week(view: WeekView) {
    match view {
        WeekView::Detailed(schedules) => {
            for day in schedules {
                println!("{} ({})", day.date, weekday(day.date));
                if day.bookings.is_empty() {
                    println!("  (no bookings)");
                    continue;
                }
                for booking in day.bookings {
                    println!(
                        "  {} - {}  {}",
                        booking.start_time, booking.end_time, booking.client_name
                    );
                }
            }
        }
        WeekView::FreeBusy(availability) => {
            for day in availability {
                println!("{} ({})", day.date, weekday(day.date));
                if day.free.is_empty() {
                    println!("  (fully booked)");
                } else {
                    println!("  {}", day.free.join(" "));
                }
            }
        }
    }
}

fn weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

fn catalog_for(grid: u32) -> Result<SlotCatalog> {
    match grid {
        30 => Ok(SlotCatalog::booking()),
        60 => Ok(SlotCatalog::public_hourly()),
        other => anyhow::bail!("Unsupported grid: {} (expected 30 or 60)", other),
    }
}

fn read_snapshot(path: Option<&str>) -> Result<Vec<Reservation>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse reservations JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
