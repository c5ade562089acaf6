use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Every value is optional; anything left unset falls
/// back to the environment, the config file, then the built-in default.
#[derive(Debug, Default, Parser)]
#[command(name = "forecast-api", version, about = "Weather forecast HTTP API")]
pub struct Args {
    /// (optional) absolute path to the api configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// The port the api will be served on
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Sets the log level for the application (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Sets the log output format ("json" for structured output)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Your api key for openweathermap.org
    #[arg(long)]
    pub apikey: Option<String>,
}
