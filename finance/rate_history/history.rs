use crate::config::Config;
use crate::currency::CurrencyCodes;
use crate::date_range::{self, DateKey};
use crate::flags::DayCount;
use crate::privatbank::{FetchError, PrivatBankSource, RateSource, RatesResponse};
use crate::rates::{self, DatedResult};
use chrono::NaiveDate;
use futures::future;
use log::{info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot set up HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Fetches all `dates` at once and extracts the requested currencies from
/// each answer. Days that failed to fetch or lack a base currency are left
/// out; the rest keep the order of `dates`.
pub async fn collect_history<S>(
    source: &S,
    dates: &[DateKey],
    base: &CurrencyCodes,
    extra: &CurrencyCodes,
) -> Vec<DatedResult>
where
    S: RateSource + Sync + ?Sized,
{
    let outcomes: Vec<Result<RatesResponse, FetchError>> =
        future::join_all(dates.iter().map(|date| source.fetch(date))).await;

    let extra = extra.without(base);
    dates
        .iter()
        .zip(outcomes)
        .filter_map(|(date, outcome)| {
            // Fetch errors are logged by the source.
            let payload = outcome.ok()?;
            match rates::extract_with_fallback(&payload, base, &extra) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("skipping {}: {}", date, e);
                    None
                }
            }
        })
        .collect()
}

/// Rates for the `days` days before `today`, from the endpoint in `config`.
pub async fn run_from(
    config: &Config,
    today: NaiveDate,
    days: DayCount,
    extra: &CurrencyCodes,
) -> Result<Vec<DatedResult>, RunError> {
    let dates = date_range::past_dates(today, days.get());
    info!(
        "fetching {} days from {} ({} to {})",
        dates.len(),
        config.endpoint,
        dates.last().map(ToString::to_string).unwrap_or_default(),
        dates.first().map(ToString::to_string).unwrap_or_default(),
    );

    let source = PrivatBankSource::new(config.endpoint.clone())?;
    let results = collect_history(&source, &dates, &config.base_currencies, extra).await;
    drop(source);

    info!("got rates for {} of {} days", results.len(), dates.len());
    Ok(results)
}

/// Rates for the `days` days before the local current date.
pub async fn run(
    config: &Config,
    days: DayCount,
    extra: &CurrencyCodes,
) -> Result<Vec<DatedResult>, RunError> {
    run_from(config, date_range::local_today(), days, extra).await
}
