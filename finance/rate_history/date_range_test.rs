use crate::date_range::{DateKey, past_dates};
use chrono::prelude::*;
use std::collections::HashSet;

#[test]
fn formats_as_day_month_year() {
    let key = DateKey::new(NaiveDate::from_ymd_opt(2014, 12, 1).unwrap());
    assert_eq!(key.to_string(), "01.12.2014");
}

#[test]
fn two_days_back() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let dates: Vec<String> = past_dates(today, 2).iter().map(|d| d.to_string()).collect();
    // 2024 is a leap year.
    assert_eq!(dates, vec!["29.02.2024", "28.02.2024"]);
}

#[test]
fn every_count_gives_consecutive_past_days() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
    for days in 1..=10 {
        let dates = past_dates(today, days);
        assert_eq!(dates.len(), days as usize);

        let distinct: HashSet<_> = dates.iter().collect();
        assert_eq!(distinct.len(), dates.len());

        for (offset, date) in dates.iter().enumerate() {
            assert!(date.date() < today);
            assert_eq!((today - date.date()).num_days(), offset as i64 + 1);
        }
    }
}

#[test]
fn crosses_year_boundary() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let dates = past_dates(today, 1);
    assert_eq!(dates[0].to_string(), "31.12.2025");
}
