use crate::currency::CurrencyCode;
use std::str::FromStr;
use structopt::StructOpt;
use thiserror::Error;
use url::Url;

pub const MAX_DAYS: u32 = 10;

/// Number of past days to fetch, 1 to `MAX_DAYS`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DayCount(u32);

impl DayCount {
    pub fn new(days: u32) -> Result<Self, DayCountError> {
        if days == 0 {
            return Err(DayCountError::TooFew);
        }
        if days > MAX_DAYS {
            return Err(DayCountError::TooMany);
        }
        Ok(DayCount(days))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DayCountError {
    #[error("Invalid argument. Please provide a valid number of days.")]
    NotANumber,
    #[error("The number of days must be at least 1.")]
    TooFew,
    #[error("The number of days cannot exceed 10.")]
    TooMany,
}

impl FromStr for DayCount {
    type Err = DayCountError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: i64 = s.trim().parse().map_err(|_| DayCountError::NotANumber)?;
        if days < 1 {
            return Err(DayCountError::TooFew);
        }
        let days = u32::try_from(days).map_err(|_| DayCountError::TooMany)?;
        DayCount::new(days)
    }
}

#[derive(Debug, StructOpt, PartialEq)]
#[structopt(
    name = "rate_history",
    about = "PrivatBank exchange rates for the last few days, as JSON"
)]
pub struct Opt {
    #[structopt(help = "number of past days to fetch, 1 to 10")]
    pub days: DayCount,

    #[structopt(help = "currencies to report besides EUR and USD, e.g. CHF GBP")]
    pub currencies: Vec<CurrencyCode>,

    #[structopt(
        long,
        help = "exchange_rates endpoint; defaults to https://api.privatbank.ua/p24api/exchange_rates"
    )]
    pub endpoint: Option<Url>,
}
