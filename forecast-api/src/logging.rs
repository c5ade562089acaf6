use tracing::Level;

/// Install the global tracing subscriber, writing to stderr.
///
/// `format == "json"` selects structured output, anything else the plain
/// text formatter. An unrecognized level falls back to INFO with a warning,
/// matching the configuration contract.
pub fn init(level: &str, format: &str) {
    let parsed: Result<Level, _> = level.parse();
    let parse_failed = parsed.is_err();
    let max_level = parsed.unwrap_or(Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    if parse_failed {
        tracing::warn!("failed to parse log-level '{level}', defaulting to 'info'");
    }
}
