// RUST_LOG=rate_history=trace cargo run -- 2 chf gbp

use log::{error, trace};
use rate_history::config::Config;
use rate_history::currency::CurrencyCodes;
use rate_history::flags::Opt;
use rate_history::history;
use std::process::ExitCode;
use structopt::StructOpt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    // Exits with status 1 and a message on a bad day count.
    let opt = Opt::from_args();
    trace!("Options: {:?}", opt);

    let config = Config::from_opt(&opt);
    trace!("Config: {:?}", config);
    let extra: CurrencyCodes = opt.currencies.iter().cloned().collect();

    let results = match history::run(&config, opt.days, &extra).await {
        Ok(results) => results,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    match serde_json::to_string_pretty(&results) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("cannot serialize results: {}", e);
            ExitCode::from(2)
        }
    }
}
