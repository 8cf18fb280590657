//! Logger setup for the `remix` binary

use log::{warn, LevelFilter};

/// Pick the level requested by the command line or the config file, the
/// flag winning. `Err` carries a level string that does not parse.
pub fn requested_level(flag: Option<&str>, config: Option<&str>) -> Result<Option<LevelFilter>, String> {
    match flag.or(config) {
        Some(level) => level.parse::<LevelFilter>().map(Some).map_err(|_| level.to_string()),
        None => Ok(None),
    }
}

/// Install env_logger. Without an explicit level `RUST_LOG` applies,
/// defaulting to `info`.
pub fn init_logging(flag: Option<&str>, config: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let requested = requested_level(flag, config);
    if let Ok(Some(level)) = requested {
        builder.filter_level(level);
    }

    // A logger may already be installed (tests)
    let _ = builder.try_init();

    if let Err(level) = requested {
        warn!("Invalid log level: '{}'", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        assert_eq!(requested_level(Some("debug"), Some("warn")), Ok(Some(LevelFilter::Debug)));
        assert_eq!(requested_level(None, Some("warn")), Ok(Some(LevelFilter::Warn)));
        assert_eq!(requested_level(None, None), Ok(None));
    }

    #[test]
    fn test_levels_are_case_insensitive() {
        assert_eq!(requested_level(Some("TRACE"), None), Ok(Some(LevelFilter::Trace)));
    }

    #[test]
    fn test_invalid_level() {
        assert_eq!(requested_level(Some("loud"), None), Err("loud".to_string()));
    }
}
