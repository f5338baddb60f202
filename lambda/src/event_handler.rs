use crate::config::Config;
use chrono::{DateTime, Utc};
use eal::{do_lambda_functionality, LogHandle, LogLevel};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    message: String,
    log_level: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

pub(crate) async fn function_handler(
    config: &Config,
    logging: &LogHandle,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    tracing::info!(request_id = %event.context.request_id, "invoked");

    handle_request(config, logging, event.payload, do_lambda_functionality::<Utc>)
}

/// Runs `report` for one event, applying the event's log level only for the
/// duration of the call.
pub(crate) fn handle_request<F>(
    config: &Config,
    logging: &LogHandle,
    request: Request,
    report: F,
) -> Result<Response, Error>
where
    F: FnOnce(&str, &DateTime<Utc>, &str) -> anyhow::Result<()>,
{
    let invocation_time = Utc::now();
    let timestamp = invocation_time.to_string();

    let requested = match request.log_level.as_deref().map(LogLevel::parse) {
        None => None,
        Some(Ok(level)) => Some(level),
        Some(Err(e)) => {
            tracing::warn!("rejecting event: {e}");
            return Ok(Response {
                success: false,
                timestamp,
                error_message: Some(e.to_string()),
            });
        }
    };

    let previous = logging.level();
    if let Some(level) = requested {
        logging.set_level(level)?;
    }

    let written = report(&config.aws_region, &invocation_time, &request.message);

    if requested.is_some() {
        logging.set_level(previous)?;
    }
    written?;

    Ok(Response {
        success: true,
        timestamp,
        error_message: None,
    })
}
