use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

/// Installs the global logger. `RUST_LOG` overrides the default filter.
/// Later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::info!("logger installed");
    }
}
