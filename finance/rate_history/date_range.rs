use chrono::prelude::*;
use chrono::Days;
use std::fmt::{self, Display, Formatter};

/// Date format of the `date` query parameter, e.g. "01.12.2014".
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// `days` dates before `today`, most recent first. `today` itself is never
/// included.
pub fn past_dates(today: NaiveDate, days: u32) -> Vec<DateKey> {
    (1..=u64::from(days))
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(DateKey)
        .collect()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
