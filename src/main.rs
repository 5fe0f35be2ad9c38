//! Minutes CLI - Main Entry Point
//!
//! Thin command-line front end over the `minutes_md` library.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use minutes_md::config::Config;
use minutes_md::formatting::{format_annual_rate, format_cents, format_duration, format_summary};
use minutes_md::logging::init_logging;
use minutes_md::minutes::{Meeting, count_attendees, cost_for, to_cents};
use minutes_md::validation::{parse_held_at_arg, validate_ticker_inputs};
use std::fs;
use std::path::{Path, PathBuf};

/// Meeting minutes - convert between TOML meeting files and Markdown minutes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a TOML meeting file as Markdown minutes
    Render {
        /// Meeting file (TOML)
        input: PathBuf,

        /// Override the meeting start (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        held_at: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import Markdown minutes into a TOML meeting file
    Import {
        /// Markdown minutes
        input: PathBuf,

        /// Print a human-readable summary instead of TOML
        #[arg(long)]
        summary: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that Markdown minutes survive an import/export cycle unchanged
    Check {
        /// Markdown minutes
        input: PathBuf,
    },
    /// Compute what a meeting costs
    Cost {
        /// Hourly rate per person (defaults to the configured rate)
        #[arg(long)]
        rate: Option<f64>,

        /// Number of attendees
        #[arg(long, conflicts_with = "attendees_text")]
        attendees: Option<u32>,

        /// Attendee names, one per line or comma separated
        #[arg(long)]
        attendees_text: Option<String>,

        /// Meeting length in minutes
        #[arg(long)]
        minutes: f64,
    },
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_ref())?;
    if let Err(e) = init_logging(&config.logging.level) {
        eprintln!("Warning: {}", e);
    }
    let style = config.date_style()?;

    match args.command {
        Command::Render {
            input,
            held_at,
            output,
        } => {
            let content = read_input(&input)?;
            let mut meeting: Meeting = toml::from_str(&content)
                .with_context(|| format!("Failed to parse meeting file {}", input.display()))?;
            if let Some(held_at) = held_at {
                meeting.held_at = Some(parse_held_at_arg(&held_at, &style)?);
            }
            let markdown = minutes_md::Serializer::with_style(style).serialize(&meeting);
            write_output(output.as_deref(), &markdown)?;
        }
        Command::Import {
            input,
            summary,
            output,
        } => {
            let markdown = read_input(&input)?;
            let meeting = minutes_md::Parser::with_style(style).parse(&markdown);
            let rendered = if summary {
                format_summary(&meeting)
            } else {
                toml::to_string_pretty(&meeting).context("Failed to encode meeting as TOML")?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Command::Check { input } => {
            let markdown = read_input(&input)?;
            let parser = minutes_md::Parser::with_style(style.clone());
            let serializer = minutes_md::Serializer::with_style(style);

            let first = serializer.serialize(&parser.parse(&markdown));
            let second = serializer.serialize(&parser.parse(&first));
            if first != second {
                bail!("{} does not round-trip: output changes on re-import", input.display());
            }
            println!("{}: round-trip stable", input.display());
        }
        Command::Cost {
            rate,
            attendees,
            attendees_text,
            minutes,
        } => {
            let rate = rate.unwrap_or(config.ticker.hourly_rate);
            let attendees = match (attendees, attendees_text) {
                (Some(count), _) => count,
                (None, Some(text)) => count_attendees(&text, config.ticker.default_attendees),
                (None, None) => config.ticker.default_attendees,
            };
            validate_ticker_inputs(attendees, rate)?;
            if !minutes.is_finite() || minutes < 0.0 {
                bail!("Invalid meeting length {}; minutes must be zero or more", minutes);
            }

            let elapsed_secs = minutes * 60.0;
            let total = cost_for(attendees, rate, elapsed_secs);
            println!("- Attendees: {}", attendees);
            println!("- Hourly Rate: ${}/hour per person", rate);
            println!("- Annual Rate: {}", format_annual_rate(rate * minutes_md::minutes::WORKING_HOURS_PER_YEAR));
            println!("- Duration: {}", format_duration(elapsed_secs.floor() as u64));
            println!("- **Total Cost: {}**", format_cents(to_cents(total)));
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
