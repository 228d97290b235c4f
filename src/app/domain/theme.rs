use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_FONT_SCALE: f64 = 0.5;
pub const MAX_FONT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl Radius {
    /// Value written to the `data-radius` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }

    /// Value written to the `--radius` custom property
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::None => "0px",
            Self::Sm => "4px",
            Self::Md => "8px",
            Self::Lg => "12px",
            Self::Full => "9999px",
        }
    }

    pub fn all() -> &'static [Radius] {
        &[Self::None, Self::Sm, Self::Md, Self::Lg, Self::Full]
    }
}

/// User-defined theme: a name plus CSS variable overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub name: String,
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

impl CustomTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: BTreeMap::new(),
        }
    }

    pub fn with_token(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(key.into(), value.into());
        self
    }
}

/// Built-in color themes. Token names are CSS custom properties.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTheme {
    pub name: &'static str,
    pub display_name: &'static str,
    pub tokens: &'static [(&'static str, &'static str)],
}

pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        name: "light",
        display_name: "Light",
        tokens: &[
            ("--color-background", "#ffffff"),
            ("--color-foreground", "#0a0a0a"),
            ("--color-primary", "#2563eb"),
            ("--color-muted", "#f4f4f5"),
            ("--color-border", "#e4e4e7"),
            ("--color-accent", "#f59e0b"),
        ],
    },
    BuiltinTheme {
        name: "dark",
        display_name: "Dark",
        tokens: &[
            ("--color-background", "#0a0a0a"),
            ("--color-foreground", "#fafafa"),
            ("--color-primary", "#3b82f6"),
            ("--color-muted", "#27272a"),
            ("--color-border", "#3f3f46"),
            ("--color-accent", "#fbbf24"),
        ],
    },
    BuiltinTheme {
        name: "midnight",
        display_name: "Midnight",
        tokens: &[
            ("--color-background", "#0b1020"),
            ("--color-foreground", "#e2e8f0"),
            ("--color-primary", "#818cf8"),
            ("--color-muted", "#1e293b"),
            ("--color-border", "#334155"),
            ("--color-accent", "#22d3ee"),
        ],
    },
    BuiltinTheme {
        name: "forest",
        display_name: "Forest",
        tokens: &[
            ("--color-background", "#f3f7f2"),
            ("--color-foreground", "#1b2e1f"),
            ("--color-primary", "#2f855a"),
            ("--color-muted", "#e2ece0"),
            ("--color-border", "#c6d9c2"),
            ("--color-accent", "#b7791f"),
        ],
    },
    BuiltinTheme {
        name: "sunset",
        display_name: "Sunset",
        tokens: &[
            ("--color-background", "#fff7ed"),
            ("--color-foreground", "#431407"),
            ("--color-primary", "#ea580c"),
            ("--color-muted", "#ffedd5"),
            ("--color-border", "#fed7aa"),
            ("--color-accent", "#db2777"),
        ],
    },
];

pub fn builtin_theme(name: &str) -> Option<&'static BuiltinTheme> {
    BUILTIN_THEMES.iter().find(|t| t.name == name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,

    #[serde(default)]
    pub custom_theme: Option<CustomTheme>,

    #[serde(default = "default_font_size_scale")]
    pub font_size_scale: f64,

    #[serde(default = "default_transition_enabled")]
    pub transition_enabled: bool,

    #[serde(default)]
    pub reduced_motion: bool,

    #[serde(default)]
    pub radius: Radius,
}

fn default_theme_name() -> String {
    "light".to_string()
}

fn default_font_size_scale() -> f64 {
    1.0
}

fn default_transition_enabled() -> bool {
    true
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            custom_theme: None,
            font_size_scale: default_font_size_scale(),
            transition_enabled: default_transition_enabled(),
            reduced_motion: false,
            radius: Radius::default(),
        }
    }
}

/// Clamp a font scale into `[0.5, 2.0]`. NaN falls back to the default.
pub fn clamp_font_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return default_font_size_scale();
    }
    scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
}

impl ThemeState {
    /// True when the custom theme is the one selected
    pub fn custom_active(&self) -> bool {
        self.custom_theme
            .as_ref()
            .is_some_and(|c| c.name == self.theme_name)
    }

    /// Re-apply invariants after deserializing untrusted data
    pub fn normalized(mut self) -> Self {
        self.font_size_scale = clamp_font_scale(self.font_size_scale);
        if self.theme_name.trim().is_empty() {
            self.theme_name = default_theme_name();
        }
        self
    }
}
