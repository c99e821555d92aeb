use tracing::metadata::LevelFilter;
use tracing_subscriber::{filter::ParseError, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "URCHIN_LOG";

/// Build the log filter from `directives`, as found in `URCHIN_LOG`. Without
/// directives the level is `info`, or `debug` when `verbose` is set. A filter that
/// does not parse falls back to the default level and the error is returned with it.
#[must_use]
pub fn parse_log_level(directives: Option<&str>, verbose: bool) -> (EnvFilter, Option<ParseError>) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let builder = EnvFilter::builder().with_default_directive(default.into());
    match directives {
        None => (builder.parse_lossy(""), None),
        Some(directives) => match builder.parse(directives) {
            Ok(filter) => (filter, None),
            Err(err) => {
                let fallback = EnvFilter::builder()
                    .with_default_directive(default.into())
                    .parse_lossy("");
                (fallback, Some(err))
            }
        },
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays machine readable.
pub fn setup_logging(verbose: bool) {
    let directives = std::env::var(LOG_ENV).ok();
    let (filter, parse_err) = parse_log_level(directives.as_deref(), verbose);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
    if let Some(err) = parse_err {
        tracing::warn!("Ignoring {}: {}", LOG_ENV, err);
    }
}
