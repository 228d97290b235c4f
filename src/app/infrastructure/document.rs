use std::collections::{BTreeMap, BTreeSet};

/// The document root element that theme side effects are written to.
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn set_style_property(&mut self, name: &str, value: &str);
    fn toggle_class(&mut self, class: &str, enabled: bool);
}

/// In-memory root element. Embedders copy its contents onto the real node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RootElement {
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Inline `style` attribute text, properties in name order
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Space-separated `class` attribute text
    pub fn class_attribute(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

impl DocumentRoot for RootElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}
