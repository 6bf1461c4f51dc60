//! Historical PrivatBank exchange rates for the last few days.

pub mod config;
pub mod currency;
pub mod date_range;
pub mod flags;
pub mod history;
pub mod privatbank;
pub mod rates;

#[cfg(test)]
mod date_range_test;
#[cfg(test)]
mod flags_test;
