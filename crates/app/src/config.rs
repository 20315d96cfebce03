use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Configuration embedded at compile time — a wasm client has no filesystem
/// to read from at startup.
const CONFIG_TOML: &str = include_str!("../shiftwatch.toml");

/// Parse the embedded `shiftwatch.toml` on first access and cache it.
///
/// If the file is unparseable, every flag defaults off and the mock backend
/// is selected.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match toml::from_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse shiftwatch.toml: {err} — using defaults");
            AppConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::BackendKind;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TOML).unwrap();
        // The shipped config selects the mock directory by default
        assert_eq!(config.backend.kind, BackendKind::Mock);
    }

    #[test]
    fn app_config_is_stable_across_calls() {
        assert_eq!(app_config(), app_config());
    }
}
