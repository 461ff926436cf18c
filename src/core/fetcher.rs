use crate::config::FetcherConfig;
use crate::core::{Country, CountryProvider, FetchLogger};
use crate::utils::error::{FetchError, Result};
use crate::utils::logger::TracingLogger;
use crate::utils::validation::{validate_non_empty_string, Validate};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

const API_VERSION: &str = "v3.1";

/// Looks countries up by name against the REST Countries API.
///
/// The HTTP client is built once and reused for every call; the configured
/// timeout bounds the whole request, body included.
pub struct CountryFetcher<L: FetchLogger = TracingLogger> {
    config: FetcherConfig,
    base_url: Url,
    client: Client,
    logger: L,
}

impl CountryFetcher<TracingLogger> {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        Self::with_logger(config, TracingLogger)
    }
}

impl<L: FetchLogger> CountryFetcher<L> {
    pub fn with_logger(config: FetcherConfig, logger: L) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| FetchError::ConfigError {
            message: format!("invalid base_url '{}': {}", config.base_url, e),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::ConfigError {
                message: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self {
            config,
            base_url,
            client,
            logger,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Builds `{base_url}/v3.1/name/{name}`, encoding `name` as one path segment.
    pub fn request_url(&self, name: &str, full_text: bool) -> Result<Url> {
        validate_non_empty_string("country name", name)?;
        // `extend` drops dot segments instead of encoding them
        if matches!(name, "." | "..") {
            return Err(FetchError::InvalidInput {
                message: format!("'{}' is not a country name", name),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::ConfigError {
                message: format!("base_url '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend([API_VERSION, "name", name]);

        if full_text {
            url.query_pairs_mut().append_pair("fullText", "true");
        }

        Ok(url)
    }

    /// Countries whose common or official name contains `name`.
    ///
    /// An unknown name yields `Ok(vec![])`, whether the upstream answers 404
    /// or an empty array.
    pub async fn fetch_countries_by_name(&self, name: &str) -> Result<Vec<Country>> {
        self.fetch(name, false).await
    }

    /// Like [`Self::fetch_countries_by_name`], but only exact full-name matches.
    pub async fn fetch_countries_by_full_name(&self, name: &str) -> Result<Vec<Country>> {
        self.fetch(name, true).await
    }

    async fn fetch(&self, name: &str, full_text: bool) -> Result<Vec<Country>> {
        let url = self.request_url(name, full_text)?;
        tracing::debug!("📡 Making API request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::from_transport(e, self.config.timeout_ms))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let countries = if status == StatusCode::NOT_FOUND {
            Vec::new()
        } else if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::from_transport(e, self.config.timeout_ms))?;
            decode_countries(&body)?
        } else {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        };

        if countries.is_empty() {
            self.logger
                .warn(&format!("No country found with the name: {}", name));
        } else {
            let summary = countries
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.logger.info(&format!(
                "Country Info: {} match(es) for '{}': {}",
                countries.len(),
                name,
                summary
            ));
        }

        Ok(countries)
    }
}

#[async_trait::async_trait]
impl<L: FetchLogger> CountryProvider for CountryFetcher<L> {
    async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>> {
        self.fetch_countries_by_name(name).await
    }
}

/// Decodes a `/name/{name}` response body. Anything but an array of objects
/// is a decode error; nothing is returned partially.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>> {
    let countries: Vec<Country> = serde_json::from_slice(body)?;
    Ok(countries)
}
