use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a `newday` run. None of these are retried;
/// they propagate straight to the entry point.
#[derive(Debug, Error)]
pub enum Error {
    #[error("default day/year are only available in December; pass --day and --year")]
    DefaultsUnavailable,

    #[error("downloading inputs requires a session cookie; pass --session or set AOC_SESSION")]
    MissingSession,

    #[error("day {0} is out of range (1-25)")]
    DayOutOfRange(u32),

    #[error("year {year} is out of range (2015-{max})")]
    YearOutOfRange { year: i32, max: i32 },

    #[error("day {day} of {year} has no puzzle yet")]
    InvalidDate { day: u32, year: i32 },

    #[error("input request failed with status {status}; verify your session cookie is current")]
    Fetch { status: u16 },

    #[error("template file not found at {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
