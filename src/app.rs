use std::io::{self, Write};

use env_logger::Env;
use log::{debug, error, info};

use crate::{
    cli::Cli,
    config::{Config, Environment},
    errors::AppError,
    services::LongUrlGenerator,
    types::Result,
};

pub const USAGE: &str =
    "Usage: long-url-generator <url>\nExample: long-url-generator https://example.com";

// Logs go to stderr; stdout is reserved for the generated URL
fn setup_logging(config: &Config) -> Result<()> {
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug".to_string(),
        Environment::Production => "error".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "auto");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

/// Loads configuration, sets up logging and prints one long URL to stdout
pub fn start(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    setup_logging(&config)?;

    info!("Starting {} v{}", config.app.name, config.app.version);
    debug!("Environment: {:?}", config.app.environment);

    let generator = LongUrlGenerator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &generator, &mut out)
}

/// Process exit code for a failed run
pub fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::MissingUrl | AppError::Generator(_) | AppError::Output(_) => 1,
        AppError::Config(_) => 2,
        AppError::Logger(_) => 3,
    }
}

/// Writes the user-facing message for `err` and returns the exit code.
///
/// Usage goes to `out`; everything else goes to `err_out`, since the logger
/// may not be up when configuration or logging itself failed.
pub fn report<O: Write, E: Write>(err: &AppError, out: &mut O, err_out: &mut E) -> i32 {
    let written = match err {
        AppError::MissingUrl => writeln!(out, "{}", USAGE),
        AppError::Generator(e) => writeln!(err_out, "Error: {}", e),
        AppError::Output(e) => writeln!(err_out, "Error: failed to write output: {}", e),
        AppError::Config(e) => writeln!(err_out, "Critical configuration error: {}", e),
        AppError::Logger(e) => writeln!(err_out, "Critical logger error: {}", e),
    };
    if let Err(e) = written {
        error!("Failed to report error: {}", e);
    }

    exit_code(err)
}

/// Generates the long URL for `cli.url` and writes it, newline-terminated, to `out`
pub fn run<W: Write>(cli: &Cli, generator: &LongUrlGenerator, out: &mut W) -> Result<()> {
    let Some(input_url) = cli.url.as_deref() else {
        return Err(AppError::MissingUrl);
    };

    let long_url = generator.generate(input_url)?;
    writeln!(out, "{}", long_url)?;
    out.flush()?;

    Ok(())
}
