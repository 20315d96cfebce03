use dioxus::prelude::*;

/// Display modes available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Internal key used for storage and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a mode key, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context.
///
/// The profile screen's dark-mode switch reads and writes this signal.
/// Changes call [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Apply the current mode to the document.
    pub fn apply(&self) {
        set_theme(self.mode.read().as_str());
    }

    /// Seed the mode from the persisted theme cookie, then apply it.
    ///
    /// Call once at startup, before any toggle runs; unknown or missing
    /// cookie values fall back to Light via [`ThemeMode::from_key`].
    pub async fn restore(&mut self) {
        let mut eval = document::eval(
            r#"
            var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
            dioxus.send(match ? match[1] : 'light');
            "#,
        );
        if let Ok(key) = eval.recv::<String>().await {
            self.mode.set(ThemeMode::from_key(&key));
        }
        self.apply();
    }
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
