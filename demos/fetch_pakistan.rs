//! Looks up "pakistan" once and prints what came back.
//!
//! `COUNTRIES_URL` and `COUNTRIES_TIMEOUT_MS` override the upstream settings;
//! `LOG_FORMAT=json` switches to JSON log lines. The first argument, if any,
//! replaces the country name.

use countries_client::utils::logger;
use countries_client::{CountryFetcher, FetcherConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => logger::init_json_logger(),
        _ => logger::init_logger(false),
    }

    let name = std::env::args().nth(1).unwrap_or_else(|| "pakistan".to_string());
    let config = FetcherConfig::default().with_env_overrides()?;
    let fetcher = CountryFetcher::new(config)?;

    match fetcher.fetch_countries_by_name(&name).await {
        Ok(countries) => {
            for country in &countries {
                println!("{}", country);
                for code in country.native_language_codes() {
                    if let Some(lang) = country.native_name(code) {
                        println!(
                            "  [{}] {} / {}",
                            code,
                            lang.common.as_deref().unwrap_or("-"),
                            lang.official.as_deref().unwrap_or("-")
                        );
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!("❌ Lookup failed ({:?}): {}", e.kind(), e);
            if e.is_transient() {
                eprintln!("💡 The upstream may be temporarily unavailable, try again later");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
