//! Theme preference controller.
//!
//! Owns the current [`ThemeState`], persists it through an injected
//! [`PreferenceStore`] on every change, and writes the document-level side
//! effects (data attributes, CSS custom properties, motion classes) through
//! a [`DocumentRoot`].

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::app::domain::theme::{
    builtin_theme, clamp_font_scale, CustomTheme, Radius, ThemeState,
};
use crate::app::error::{KitError, Result};
use crate::app::infrastructure::document::DocumentRoot;
use crate::app::infrastructure::storage::PreferenceStore;

/// Key under which the serialized state is stored
pub const THEME_STORAGE_KEY: &str = "ui-theme";

pub const REDUCED_MOTION_CLASS: &str = "reduce-motion";
pub const NO_TRANSITIONS_CLASS: &str = "no-transitions";

pub struct ThemeController<S: PreferenceStore> {
    state: ThemeState,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load state from the store, or fall back to defaults.
    pub fn load(store: S) -> Self {
        let state = match store.read(THEME_STORAGE_KEY) {
            Ok(Some(contents)) => match serde_json::from_str::<ThemeState>(&contents) {
                Ok(state) => state.normalized(),
                Err(e) => {
                    warn!(error = %e, "failed to parse theme preferences, using defaults");
                    ThemeState::default()
                }
            },
            Ok(None) => ThemeState::default(),
            Err(e) => {
                warn!(error = %e, "failed to read theme preferences, using defaults");
                ThemeState::default()
            }
        };
        Self { state, store }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Select a built-in theme or the active custom theme by name.
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        let is_custom = self
            .state
            .custom_theme
            .as_ref()
            .is_some_and(|c| c.name == name);
        if builtin_theme(name).is_none() && !is_custom {
            return Err(KitError::UnknownTheme(name.to_string()));
        }
        self.state.theme_name = name.to_string();
        self.persist();
        Ok(())
    }

    /// Install a custom theme and make it the active one.
    pub fn set_custom_theme(&mut self, theme: CustomTheme) {
        self.state.theme_name = theme.name.clone();
        self.state.custom_theme = Some(theme);
        self.persist();
    }

    /// Drop the custom theme. If it was active, fall back to the default theme.
    pub fn clear_custom_theme(&mut self) {
        if self.state.custom_active() {
            self.state.theme_name = ThemeState::default().theme_name;
        }
        self.state.custom_theme = None;
        self.persist();
    }

    pub fn set_font_size_scale(&mut self, scale: f64) {
        self.state.font_size_scale = clamp_font_scale(scale);
        self.persist();
    }

    pub fn set_transition_enabled(&mut self, enabled: bool) {
        self.state.transition_enabled = enabled;
        self.persist();
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.state.reduced_motion = reduced;
        self.persist();
    }

    pub fn set_radius(&mut self, radius: Radius) {
        self.state.radius = radius;
        self.persist();
    }

    /// Restore every preference to its default.
    pub fn reset(&mut self) {
        self.state = ThemeState::default();
        self.persist();
    }

    /// Color tokens of the active theme, keyed by CSS custom property.
    ///
    /// A custom theme is layered over the default built-in theme, so every
    /// token is always present and a reused root never keeps stale colors.
    pub fn active_tokens(&self) -> BTreeMap<String, String> {
        let default_name = ThemeState::default().theme_name;
        let base_name = if self.state.custom_active() {
            default_name.as_str()
        } else {
            self.state.theme_name.as_str()
        };
        let mut tokens: BTreeMap<String, String> = builtin_theme(base_name)
            .or_else(|| builtin_theme(&default_name))
            .map(|t| {
                t.tokens
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        if self.state.custom_active() {
            if let Some(custom) = &self.state.custom_theme {
                for (key, value) in &custom.tokens {
                    tokens.insert(css_variable_name(key), value.clone());
                }
            }
        }
        tokens
    }

    /// Write the current state onto the document root.
    pub fn apply(&self, root: &mut dyn DocumentRoot) {
        root.set_attribute("data-theme", &self.state.theme_name);
        root.set_attribute("data-radius", self.state.radius.as_str());
        for (name, value) in self.active_tokens() {
            root.set_style_property(&name, &value);
        }
        root.set_style_property("--font-scale", &format_scale(self.state.font_size_scale));
        root.set_style_property("--radius", self.state.radius.css_value());
        root.toggle_class(REDUCED_MOTION_CLASS, self.state.reduced_motion);
        root.toggle_class(NO_TRANSITIONS_CLASS, !self.state.transition_enabled);
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string_pretty(&self.state) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize theme preferences");
                return;
            }
        };
        match self.store.write(THEME_STORAGE_KEY, &json) {
            Ok(()) => debug!(theme = %self.state.theme_name, "theme preferences saved"),
            Err(e) => warn!(error = %e, "failed to save theme preferences"),
        }
    }
}

fn css_variable_name(key: &str) -> String {
    if key.starts_with("--") {
        key.to_string()
    } else {
        format!("--{}", key)
    }
}

fn format_scale(scale: f64) -> String {
    let s = format!("{:.3}", scale);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::document::RootElement;
    use crate::app::infrastructure::storage::{JsonFileStore, MemoryStore};

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(KitError::Storage("read-only".to_string()))
        }
    }

    fn stored(controller: &ThemeController<MemoryStore>) -> ThemeState {
        let json = controller.store().get(THEME_STORAGE_KEY).unwrap();
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let controller = ThemeController::load(MemoryStore::new());
        assert_eq!(controller.state(), &ThemeState::default());
    }

    #[test]
    fn test_load_defaults_on_corrupt_blob() {
        let mut store = MemoryStore::new();
        store.write(THEME_STORAGE_KEY, "not json").unwrap();
        let controller = ThemeController::load(store);
        assert_eq!(controller.state(), &ThemeState::default());
    }

    #[test]
    fn test_load_clamps_stored_scale() {
        let mut store = MemoryStore::new();
        store.write(THEME_STORAGE_KEY, r#"{"fontSizeScale": 0.01}"#).unwrap();
        let controller = ThemeController::load(store);
        assert_eq!(controller.state().font_size_scale, 0.5);
    }

    #[test]
    fn test_font_scale_setter_clamps_and_persists() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_font_size_scale(5.0);
        assert_eq!(controller.state().font_size_scale, 2.0);
        assert_eq!(stored(&controller).font_size_scale, 2.0);

        controller.set_font_size_scale(0.1);
        assert_eq!(stored(&controller).font_size_scale, 0.5);
    }

    #[test]
    fn test_set_theme_builtin_and_unknown() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_theme("dark").unwrap();
        assert_eq!(stored(&controller).theme_name, "dark");

        let err = controller.set_theme("neon").unwrap_err();
        assert!(matches!(err, KitError::UnknownTheme(ref n) if n == "neon"));
        assert_eq!(controller.state().theme_name, "dark");
    }

    #[test]
    fn test_custom_theme_lifecycle() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_custom_theme(
            CustomTheme::new("brand")
                .with_token("color-primary", "#ff0066")
                .with_token("--color-background", "#111"),
        );
        assert_eq!(controller.state().theme_name, "brand");

        let tokens = controller.active_tokens();
        assert_eq!(tokens.get("--color-primary").map(String::as_str), Some("#ff0066"));
        assert_eq!(tokens.get("--color-background").map(String::as_str), Some("#111"));

        controller.set_theme("forest").unwrap();
        controller.set_theme("brand").unwrap();

        controller.clear_custom_theme();
        assert_eq!(controller.state().theme_name, "light");
        assert!(stored(&controller).custom_theme.is_none());
    }

    #[test]
    fn test_custom_theme_fills_missing_tokens_from_default() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_theme("dark").unwrap();
        let mut reused = RootElement::new();
        controller.apply(&mut reused);
        assert_eq!(reused.style_property("--color-background"), Some("#0a0a0a"));

        controller.set_custom_theme(CustomTheme::new("brand").with_token("color-primary", "#ff0066"));
        controller.apply(&mut reused);
        let mut fresh = RootElement::new();
        controller.apply(&mut fresh);

        assert_eq!(reused, fresh);
        assert_eq!(fresh.style_property("--color-background"), Some("#ffffff"));
        assert_eq!(fresh.style_property("--color-primary"), Some("#ff0066"));
    }

    #[test]
    fn test_clear_inactive_custom_keeps_theme() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_custom_theme(CustomTheme::new("brand"));
        controller.set_theme("dark").unwrap();
        controller.clear_custom_theme();
        assert_eq!(controller.state().theme_name, "dark");
    }

    #[test]
    fn test_apply_writes_side_effects() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_theme("dark").unwrap();
        controller.set_radius(Radius::Lg);
        controller.set_font_size_scale(1.25);
        controller.set_reduced_motion(true);
        controller.set_transition_enabled(false);

        let mut root = RootElement::new();
        controller.apply(&mut root);

        assert_eq!(root.attribute("data-theme"), Some("dark"));
        assert_eq!(root.attribute("data-radius"), Some("lg"));
        assert_eq!(root.style_property("--font-scale"), Some("1.25"));
        assert_eq!(root.style_property("--radius"), Some("12px"));
        assert_eq!(root.style_property("--color-background"), Some("#0a0a0a"));
        assert!(root.has_class(REDUCED_MOTION_CLASS));
        assert!(root.has_class(NO_TRANSITIONS_CLASS));

        controller.set_reduced_motion(false);
        controller.set_transition_enabled(true);
        controller.apply(&mut root);
        assert!(!root.has_class(REDUCED_MOTION_CLASS));
        assert!(!root.has_class(NO_TRANSITIONS_CLASS));
    }

    #[test]
    fn test_reset() {
        let mut controller = ThemeController::load(MemoryStore::new());
        controller.set_radius(Radius::None);
        controller.set_reduced_motion(true);
        controller.reset();
        assert_eq!(stored(&controller), ThemeState::default());
    }

    #[test]
    fn test_write_failure_is_absorbed() {
        let mut controller = ThemeController::load(ReadOnlyStore);
        controller.set_font_size_scale(1.5);
        assert_eq!(controller.state().font_size_scale, 1.5);
    }

    #[test]
    fn test_persists_across_reload_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = ThemeController::load(JsonFileStore::new(dir.path()));
        controller.set_theme("midnight").unwrap();
        controller.set_radius(Radius::Full);

        let reloaded = ThemeController::load(JsonFileStore::new(dir.path()));
        assert_eq!(reloaded.state().theme_name, "midnight");
        assert_eq!(reloaded.state().radius, Radius::Full);
    }

    #[test]
    fn test_format_scale() {
        assert_eq!(format_scale(1.0), "1");
        assert_eq!(format_scale(0.5), "0.5");
        assert_eq!(format_scale(1.125), "1.125");
    }
}
