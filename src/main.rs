//! Convert an infix expression to postfix.
//!
//! Reads the first non-blank line of stdin and writes the postfix form to stdout.
//! Logging goes to stderr; set `RUST_LOG=postfixer=trace` to watch the scan.
//!
//! ```ignore
//! echo '(a+b)*c' | postfixer
//! ```

use std::io::Write;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let infix = postfixer::read_expression(&mut std::io::stdin().lock())?;
    let postfix = postfixer::convert(&infix)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{postfix}")?;
    Ok(())
}

fn main() -> ExitCode {
    // Errors are on even without RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
