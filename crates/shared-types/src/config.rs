use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional capabilities are active.
///
/// Parsed from `shiftwatch.toml` at startup and provided to the component
/// tree via context. Every field defaults to `false` so that a missing or
/// incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub face_recognition: bool,
    #[serde(default)]
    pub geolocation: bool,
    #[serde(default)]
    pub real_time_monitoring: bool,
    #[serde(default)]
    pub ai_alerts: bool,
}

/// Operational constants consumed opaquely by the screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Limits {
    /// Minutes between identity verification prompts.
    #[serde(default = "default_verification_frequency")]
    pub verification_frequency_minutes: u32,
    /// Geofence radius around a site, in meters.
    #[serde(default = "default_site_radius")]
    pub site_radius_m: u32,
    /// Minimum AI confidence (percent) before an alert is raised.
    #[serde(default = "default_confidence_threshold")]
    pub ai_confidence_threshold: u32,
    #[serde(default = "default_max_check_ins")]
    pub max_check_ins_per_day: u32,
}

fn default_verification_frequency() -> u32 {
    90
}

fn default_site_radius() -> u32 {
    100
}

fn default_confidence_threshold() -> u32 {
    70
}

fn default_max_check_ins() -> u32 {
    20
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            verification_frequency_minutes: default_verification_frequency(),
            site_radius_m: default_site_radius(),
            ai_confidence_threshold: default_confidence_threshold(),
            max_check_ins_per_day: default_max_check_ins(),
        }
    }
}

/// Which auth backend serves this client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-memory demo directory, no network.
    #[default]
    Mock,
    /// Hosted backend-as-a-service reached over HTTP.
    Hosted,
}

/// Backend selection, fixed at process start.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Backend {
    #[serde(default)]
    pub kind: BackendKind,
    #[serde(default)]
    pub base_url: String,
}

/// Top-level config file structure matching `shiftwatch.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub backend: Backend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.face_recognition);
        assert!(!flags.geolocation);
        assert!(!flags.real_time_monitoring);
        assert!(!flags.ai_alerts);
    }

    #[test]
    fn deserialize_empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.backend.kind, BackendKind::Mock);
        assert!(config.backend.base_url.is_empty());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            geolocation = true

            [limits]
            site_radius_m = 250
            "#,
        )
        .unwrap();
        assert!(config.features.geolocation);
        assert!(!config.features.face_recognition);
        assert_eq!(config.limits.site_radius_m, 250);
        assert_eq!(config.limits.verification_frequency_minutes, 90);
        assert_eq!(config.limits.max_check_ins_per_day, 20);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            face_recognition = true
            geolocation = true
            real_time_monitoring = true
            ai_alerts = true

            [limits]
            verification_frequency_minutes = 45
            site_radius_m = 50
            ai_confidence_threshold = 85
            max_check_ins_per_day = 10

            [backend]
            kind = "hosted"
            base_url = "https://api.shiftwatch.example"
            "#,
        )
        .unwrap();
        assert!(config.features.face_recognition);
        assert!(config.features.ai_alerts);
        assert_eq!(config.limits.verification_frequency_minutes, 45);
        assert_eq!(config.limits.ai_confidence_threshold, 85);
        assert_eq!(config.backend.kind, BackendKind::Hosted);
        assert_eq!(config.backend.base_url, "https://api.shiftwatch.example");
    }

    #[test]
    fn backend_kind_defaults_to_mock() {
        let backend: Backend = toml::from_str("").unwrap();
        assert_eq!(backend.kind, BackendKind::Mock);
    }

    #[test]
    fn serialize_roundtrip() {
        let config = AppConfig {
            features: FeatureFlags {
                face_recognition: true,
                geolocation: false,
                real_time_monitoring: true,
                ai_alerts: false,
            },
            limits: Limits::default(),
            backend: Backend {
                kind: BackendKind::Hosted,
                base_url: "https://api.shiftwatch.example".into(),
            },
        };

        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
