use eal::{run, Args};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::from_argv(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let stdout = io::stdout();
    match run(args, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // --version writes before logging is installed.
            if tracing::dispatcher::has_been_set() {
                tracing::error!("{e:#}");
            } else {
                eprintln!("example-aws-lambda: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
