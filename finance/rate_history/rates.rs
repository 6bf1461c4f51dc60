use crate::currency::{CurrencyCode, CurrencyCodes};
use crate::privatbank::{RatesResponse, RawRateEntry};
use log::warn;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// NBU rates of one currency against the hryvnia.
#[derive(Debug, PartialEq, Eq, Clone, Copy, serde::Serialize)]
pub struct Quote {
    pub sale: Decimal,
    pub purchase: Decimal,
}

/// Quotes keyed by currency, in extraction order. Serializes as a JSON
/// object with the same key order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ExchangeRecord(Vec<(CurrencyCode, Quote)>);

impl ExchangeRecord {
    pub fn get(&self, code: &str) -> Option<&Quote> {
        self.0
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, quote)| quote)
    }

    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.0.iter().map(|(code, _)| code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ExchangeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, quote) in &self.0 {
            map.serialize_entry(code, quote)?;
        }
        map.end()
    }
}

/// Rates for one day. Serializes as `{"<date>": {"EUR": {...}, ...}}`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DatedResult {
    /// As echoed by the upstream payload.
    pub date: String,
    pub rates: ExchangeRecord,
}

impl Serialize for DatedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("currency {code} not found in rates for {date}")]
    MissingCurrency { code: CurrencyCode, date: String },
}

/// First entry quoting `code` with both NB rates present.
pub fn lookup(entries: &[RawRateEntry], code: &CurrencyCode) -> Option<Quote> {
    entries
        .iter()
        .find(|entry| entry.currency.as_deref() == Some(code.as_str()))
        .and_then(|entry| {
            Some(Quote {
                sale: entry.sale_rate_nb?,
                purchase: entry.purchase_rate_nb?,
            })
        })
}

/// Extracts exactly `codes`, failing on the first one missing.
pub fn extract<'a>(
    payload: &RatesResponse,
    codes: impl IntoIterator<Item = &'a CurrencyCode>,
) -> Result<ExchangeRecord, ExtractError> {
    codes
        .into_iter()
        .map(|code| match lookup(&payload.exchange_rate, code) {
            Some(quote) => Ok((code.clone(), quote)),
            None => Err(ExtractError::MissingCurrency {
                code: code.clone(),
                date: payload.date.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ExchangeRecord)
}

/// Extracts `base` followed by `extra`. If any extra currency is missing,
/// the whole day falls back to `base` alone. A missing base currency fails.
pub fn extract_with_fallback(
    payload: &RatesResponse,
    base: &CurrencyCodes,
    extra: &CurrencyCodes,
) -> Result<DatedResult, ExtractError> {
    let rates = match extract(payload, base.iter().chain(extra)) {
        Ok(rates) => rates,
        Err(ExtractError::MissingCurrency { code, .. }) if !base.contains(&code) => {
            warn!(
                "Additional currencies not found ({} missing on {}), reporting only {}",
                code,
                payload.date,
                base.iter()
                    .map(CurrencyCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            extract(payload, base)?
        }
        Err(e) => return Err(e),
    };
    Ok(DatedResult {
        date: payload.date.clone(),
        rates,
    })
}
