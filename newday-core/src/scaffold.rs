//! The core `Scaffold` struct, providing the primary API for creating
//! solution and input files.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::paths::{input_path, solution_path};
use crate::template;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What happened to a target file. `Skipped` means it already existed and
/// was left untouched; that is a successful outcome, not an error.
#[derive(Debug, PartialEq)]
pub enum FileOutcome {
    Created(PathBuf),
    Skipped(PathBuf),
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Created(p) | FileOutcome::Skipped(p) => p,
        }
    }
}

/// The central struct for all scaffolding operations.
///
/// An instance of `Scaffold` holds the configuration and provides methods
/// for creating the day's solution file and downloading its input. Both
/// operations create at most one file per (day, year) and are no-ops when
/// the target already exists.
#[derive(Debug)]
pub struct Scaffold {
    pub config: Config,
}

impl Scaffold {
    /// Creates a new `Scaffold` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: Config::load()?,
        })
    }

    /// Creates a new `Scaffold` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// URL the puzzle input for a day is served from.
    pub fn input_url(&self, day: u32, year: i32) -> String {
        format!("{}/{year}/day/{day}/input", self.config.base_url)
    }

    /// Generates `{root}/{year}/solutions/day{day}.py` from the template.
    ///
    /// - Reads the template file; a missing template is a hard error.
    /// - Substitutes the `{year}` and `{day}` placeholders.
    /// - Ensures the target directory exists.
    /// - Writes only if the target file does not exist yet.
    pub fn create_solution_file(&self, day: u32, year: i32) -> Result<FileOutcome> {
        let template_text = match fs::read_to_string(&self.config.template_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::TemplateMissing(self.config.template_path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let rendered = template::render(&template_text, day, year);

        let path = solution_path(&self.config.root_dir, day, year);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            return Ok(FileOutcome::Skipped(path));
        }

        let mut f = OpenOptions::new().create(true).append(true).open(&path)?;
        f.write_all(rendered.as_bytes())?;
        Ok(FileOutcome::Created(path))
    }

    /// Downloads the puzzle input into `{root}/{year}/inputs/{day}.txt`.
    ///
    /// No fetch happens when the file already exists. A non-success response
    /// fails the run with the status code; nothing is written in that case.
    pub fn create_input_file(
        &self,
        day: u32,
        year: i32,
        fetcher: &dyn PageFetcher,
    ) -> Result<FileOutcome> {
        let path = input_path(&self.config.root_dir, day, year);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            return Ok(FileOutcome::Skipped(path));
        }

        let result = fetcher.fetch(&self.input_url(day, year))?;
        if !result.is_ok() {
            return Err(Error::Fetch {
                status: result.status,
            });
        }
        fs::write(&path, &result.body)?;
        Ok(FileOutcome::Created(path))
    }
}
