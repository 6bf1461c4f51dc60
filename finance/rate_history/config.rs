use crate::currency::CurrencyCodes;
use crate::flags::Opt;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// Always extracted; also the fallback set when an extra currency is missing.
pub const BASE_CURRENCIES: [&str; 2] = ["EUR", "USD"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `exchange_rates` endpoint, without query.
    pub endpoint: Url,
    pub base_currencies: CurrencyCodes,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: default_endpoint(),
            base_currencies: BASE_CURRENCIES.into_iter().collect(),
        }
    }
}

impl Config {
    pub fn from_opt(opt: &Opt) -> Self {
        Config {
            endpoint: opt.endpoint.clone().unwrap_or_else(default_endpoint),
            ..Config::default()
        }
    }
}

fn default_endpoint() -> Url {
    // Checked by `default_endpoint_parses`.
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use structopt::StructOpt;

    #[test]
    fn default_endpoint_parses() {
        assert_eq!(default_endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_flag_overrides_default() {
        let opt = Opt::from_iter(&["rate_history", "1", "--endpoint", "http://127.0.0.1:1/x"]);
        let config = Config::from_opt(&opt);
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:1/x");
        assert_eq!(config.base_currencies.len(), 2);
    }
}
