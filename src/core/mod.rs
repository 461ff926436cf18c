pub mod fetcher;

pub use crate::domain::model::{Country, CountryName, LanguageName, NativeNameSet};
pub use crate::domain::ports::{CountryProvider, FetchLogger};
pub use crate::utils::error::Result;
