use crate::domain::model::Country;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Log sink handed to the fetcher, so callers decide where summaries go.
pub trait FetchLogger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

#[async_trait]
pub trait CountryProvider: Send + Sync {
    async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>>;
}
