use crate::infrastructure::config::AppConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over the config default.
pub fn init_logging(config: &AppConfig) {
    let production = config.is_production();

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(!production)
        .with_file(!production)
        .with_line_number(!production)
        .with_ansi(!production);

    let filter_layer = build_filter(config.log_filter());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized (env={})", config.app_env);
}

fn build_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn config_default_applies_without_rust_log() {
        env::remove_var("RUST_LOG");

        let filter = build_filter("warn,board_server=trace");

        let directives = filter.to_string();
        assert!(directives.contains("board_server=trace"));
        assert!(directives.contains("warn"));
    }

    #[test]
    #[serial]
    fn rust_log_overrides_config_default() {
        env::set_var("RUST_LOG", "error");

        let filter = build_filter("info,board_server=debug");

        let directives = filter.to_string();
        env::remove_var("RUST_LOG");

        assert_eq!(directives, "error");
    }
}
