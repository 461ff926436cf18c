pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::FetcherConfig;
pub use crate::core::fetcher::{decode_countries, CountryFetcher};
pub use crate::domain::model::{Country, CountryName, LanguageName, NativeNameSet};
pub use crate::domain::ports::{CountryProvider, FetchLogger};
pub use crate::utils::error::{FetchError, FetchErrorKind, Result};
pub use crate::utils::logger::TracingLogger;
