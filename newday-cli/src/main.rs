use anyhow::Result;
use clap::Parser;
use newday_core::{Error, FileOutcome, HttpFetcher, InputReadiness, Scaffold, dates};
use std::process::ExitCode;

/// newday — Scaffold Advent of Code solution files from a template
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Day of the puzzle (1-25). Defaults to today's day during December.
    #[arg(long, short)]
    day: Option<u32>,
    /// Year of the event (2015 onwards). Defaults to the current year during December.
    #[arg(long, short)]
    year: Option<i32>,
    /// Also download the day's puzzle input. Requires a session cookie.
    #[arg(long, short)]
    input: bool,
    /// Session cookie for the puzzle site (the `session` value from your
    /// browser's cookie store).
    #[arg(long, env = "AOC_SESSION", hide_env_values = true)]
    session: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("newday: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let scaffold = Scaffold::new()?;
    let now = dates::now_in(scaffold.config.timezone);

    let (day, year) = dates::resolve_selection(cli.day, cli.year, now)?;
    dates::validate_selection(day, year, now)?;

    // Resolve the credential up front so a missing cookie fails before any
    // file is created.
    let fetcher = if cli.input {
        let session = cli.session.ok_or(Error::MissingSession)?;
        Some(HttpFetcher::new(session))
    } else {
        None
    };

    println!("Creating solution file for day {day}, {year}");
    report(scaffold.create_solution_file(day, year)?);

    if let Some(fetcher) = fetcher {
        match dates::input_readiness(day, year, now)? {
            InputReadiness::Ready => {
                println!("Creating input file");
                report(scaffold.create_input_file(day, year, &fetcher)?);
            }
            InputReadiness::NotReady { unlocks_at } => {
                eprintln!(
                    "newday: input for day {day}, {year} is not ready; it unlocks at {}",
                    unlocks_at.format("%Y-%m-%d %H:%M %Z")
                );
            }
        }
    }

    println!("Process complete");
    Ok(())
}

fn report(outcome: FileOutcome) {
    match outcome {
        FileOutcome::Created(path) => println!("Saved {}", path.display()),
        FileOutcome::Skipped(path) => {
            println!("{} already exists, not overwritten", path.display())
        }
    }
}
