use eal::{setup_logging, LogLevel};
use lambda_runtime::{run, service_fn, Error};

mod config;
mod event_handler;
use config::Config;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let logging = setup_logging(LogLevel::Warning)?;
    let config = Config::load()?;

    run(service_fn(|event| function_handler(&config, &logging, event))).await
}
