#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Dropdown select: open state, keyboard highlight and committed selection.
#[derive(Debug, Clone, Default)]
pub struct Select {
    options: Vec<SelectOption>,
    open: bool,
    highlighted: Option<usize>,
    selected: Option<usize>,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected().map(|o| o.value.as_str())
    }

    /// Open and highlight the current selection, or the first enabled option.
    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = self
            .selected
            .or_else(|| self.options.iter().position(|o| !o.disabled));
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Next enabled option after `from`, wrapping. `forward` picks the direction.
    fn next_enabled(&self, from: Option<usize>, forward: bool) -> Option<usize> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let start = match (from, forward) {
            (Some(i), _) => i,
            (None, true) => len - 1,
            (None, false) => 0,
        };
        (1..=len)
            .map(|offset| {
                if forward {
                    (start + offset) % len
                } else {
                    (start + len - offset % len) % len
                }
            })
            .find(|&i| !self.options[i].disabled)
    }

    pub fn highlight_next(&mut self) {
        if !self.open {
            self.open();
            return;
        }
        if let Some(i) = self.next_enabled(self.highlighted, true) {
            self.highlighted = Some(i);
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.open {
            self.open();
            return;
        }
        if let Some(i) = self.next_enabled(self.highlighted, false) {
            self.highlighted = Some(i);
        }
    }

    /// Select the highlighted option and close. Returns the chosen value.
    pub fn commit(&mut self) -> Option<&str> {
        if let Some(i) = self.highlighted {
            if self.options.get(i).is_some_and(|o| !o.disabled) {
                self.selected = Some(i);
            }
        }
        self.close();
        self.selected_value()
    }

    /// Select by value. Disabled or unknown values are ignored.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value && !o.disabled) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Jump the highlight to the next enabled option whose label starts with `ch`.
    pub fn typeahead(&mut self, ch: char) -> Option<usize> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let needle: String = ch.to_lowercase().collect();
        let start = self.highlighted.or(self.selected).map_or(0, |i| i + 1);
        let found = (0..len).map(|offset| (start + offset) % len).find(|&i| {
            let option = &self.options[i];
            !option.disabled && option.label.to_lowercase().starts_with(&needle)
        })?;
        self.highlighted = Some(found);
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Select {
        Select::new(vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana").disabled(),
            SelectOption::new("blueberry", "Blueberry"),
            SelectOption::new("cherry", "Cherry"),
        ])
    }

    #[test]
    fn test_open_highlights_first_enabled() {
        let mut select = Select::new(vec![
            SelectOption::new("a", "A").disabled(),
            SelectOption::new("b", "B"),
        ]);
        select.open();
        assert_eq!(select.highlighted(), Some(1));
    }

    #[test]
    fn test_open_highlights_selection() {
        let mut select = fruits();
        assert!(select.select_value("cherry"));
        select.open();
        assert_eq!(select.highlighted(), Some(3));
    }

    #[test]
    fn test_navigation_skips_disabled_and_wraps() {
        let mut select = fruits();
        select.open();
        assert_eq!(select.highlighted(), Some(0));
        select.highlight_next();
        assert_eq!(select.highlighted(), Some(2));
        select.highlight_next();
        assert_eq!(select.highlighted(), Some(3));
        select.highlight_next();
        assert_eq!(select.highlighted(), Some(0));
        select.highlight_previous();
        assert_eq!(select.highlighted(), Some(3));
        select.highlight_previous();
        select.highlight_previous();
        assert_eq!(select.highlighted(), Some(0));
    }

    #[test]
    fn test_arrow_on_closed_select_opens() {
        let mut select = fruits();
        select.highlight_next();
        assert!(select.is_open());
        assert_eq!(select.highlighted(), Some(0));
    }

    #[test]
    fn test_commit() {
        let mut select = fruits();
        select.open();
        select.highlight_next();
        assert_eq!(select.commit(), Some("blueberry"));
        assert!(!select.is_open());
        assert_eq!(select.highlighted(), None);
    }

    #[test]
    fn test_select_value_rejects_disabled() {
        let mut select = fruits();
        assert!(!select.select_value("banana"));
        assert!(!select.select_value("durian"));
        assert_eq!(select.selected_value(), None);
    }

    #[test]
    fn test_typeahead() {
        let mut select = fruits();
        select.open();
        assert_eq!(select.typeahead('b'), Some(2));
        assert_eq!(select.typeahead('B'), Some(2));
        assert_eq!(select.typeahead('c'), Some(3));
        assert_eq!(select.typeahead('z'), None);
        assert_eq!(select.highlighted(), Some(3));
    }

    #[test]
    fn test_empty_select() {
        let mut select = Select::new(Vec::new());
        select.open();
        select.highlight_next();
        assert_eq!(select.highlighted(), None);
        assert_eq!(select.commit(), None);
        assert_eq!(select.typeahead('a'), None);
    }
}
