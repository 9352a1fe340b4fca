pub mod config;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod paths;
pub mod scaffold;
pub mod template;

pub use config::Config;
pub use dates::InputReadiness;
pub use error::{Error, Result};
pub use fetch::{FetchResult, HttpFetcher, PageFetcher};
pub use scaffold::{FileOutcome, Scaffold};
