use crate::currency::CurrencyCode;
use crate::flags::{DayCount, DayCountError, Opt};
use structopt::StructOpt;
use url::Url;

#[test]
fn test_flag_parsing() {
    assert_eq!(
        Opt::from_iter(&[
            "rate_history",
            "3",
            "chf",
            "GBP",
            "--endpoint=http://localhost:8080/exchange_rates"
        ]),
        Opt {
            days: DayCount::new(3).unwrap(),
            currencies: vec![CurrencyCode::new("CHF"), CurrencyCode::new("GBP")],
            endpoint: Some(Url::parse("http://localhost:8080/exchange_rates").unwrap()),
        }
    );
}

#[test]
fn days_only() {
    let opt = Opt::from_iter(&["rate_history", "10"]);
    assert_eq!(opt.days.get(), 10);
    assert!(opt.currencies.is_empty());
    assert_eq!(opt.endpoint, None);
}

#[test]
fn day_count_bounds() {
    assert_eq!("1".parse::<DayCount>().map(DayCount::get), Ok(1));
    assert_eq!("10".parse::<DayCount>().map(DayCount::get), Ok(10));
    assert_eq!("0".parse::<DayCount>(), Err(DayCountError::TooFew));
    assert_eq!("-3".parse::<DayCount>(), Err(DayCountError::TooFew));
    assert_eq!("11".parse::<DayCount>(), Err(DayCountError::TooMany));
    assert_eq!("99999999999".parse::<DayCount>(), Err(DayCountError::TooMany));
    assert_eq!("ten".parse::<DayCount>(), Err(DayCountError::NotANumber));
}

#[test]
fn rejects_bad_days() {
    assert!(Opt::from_iter_safe(&["rate_history"]).is_err());
    assert!(Opt::from_iter_safe(&["rate_history", "11"]).is_err());
    assert!(Opt::from_iter_safe(&["rate_history", "x", "CHF"]).is_err());
}

#[test]
fn too_many_message() {
    assert_eq!(
        DayCountError::TooMany.to_string(),
        "The number of days cannot exceed 10."
    );
}
