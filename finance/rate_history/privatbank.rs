//! Client for the PrivatBank archive of NBU exchange rates.
//!
//! `GET <endpoint>?json&date=01.12.2014` answers with
//!
//! ```json
//! {"date":"01.12.2014","bank":"PB","baseCurrency":980,"baseCurrencyLit":"UAH",
//!  "exchangeRate":[{"baseCurrency":"UAH","currency":"EUR",
//!                   "saleRateNB":19.2264,"purchaseRateNB":19.2264, ...}, ...]}
//! ```

use crate::date_range::DateKey;
use async_trait::async_trait;
use log::{error, trace};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    /// Date the rates are for, echoed back as "dd.mm.yyyy".
    pub date: String,
    pub exchange_rate: Vec<RawRateEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RawRateEntry {
    // Missing on the row describing the base currency itself.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "saleRateNB", default)]
    pub sale_rate_nb: Option<Decimal>,
    #[serde(rename = "purchaseRateNB", default)]
    pub purchase_rate_nb: Option<Decimal>,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("connection error: {url}: {source}")]
    Connection {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("error status: {status} for {url}")]
    HttpStatus { url: Url, status: StatusCode },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
}

/// Where rates for a single date come from.
#[async_trait]
pub trait RateSource {
    async fn fetch(&self, date: &DateKey) -> Result<RatesResponse, FetchError>;
}

/// Fetches over one shared HTTP client. Dropping the source releases the
/// client's connection pool.
pub struct PrivatBankSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl PrivatBankSource {
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(PrivatBankSource { client, endpoint })
    }

    pub fn url_for(&self, date: &DateKey) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_key_only("json")
            .append_pair("date", &date.to_string());
        url
    }
}

pub fn parse_rates_response(
    text: &str,
) -> Result<RatesResponse, serde_path_to_error::Error<serde_json::Error>> {
    serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(text))
}

#[async_trait]
impl RateSource for PrivatBankSource {
    async fn fetch(&self, date: &DateKey) -> Result<RatesResponse, FetchError> {
        let url = self.url_for(date);
        trace!("GET {}", url);

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => {
                error!("Connection error: {}: {}", url, source);
                return Err(FetchError::Connection { url, source });
            }
        };
        let status = response.status();
        if status != StatusCode::OK {
            error!("Error status: {} for {}", status, url);
            return Err(FetchError::HttpStatus { url, status });
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(source) => {
                error!("Connection error while reading {}: {}", url, source);
                return Err(FetchError::Connection { url, source });
            }
        };
        trace!("{:?}", text);
        parse_rates_response(&text).map_err(|source| {
            error!("Malformed response from {}: {}", url, source);
            FetchError::Decode { url, source }
        })
    }
}
