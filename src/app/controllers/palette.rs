use tracing::debug;

use crate::app::domain::command::Command;
use crate::app::services::fuzzy::{fuzzy_score, rank};

/// A ranked palette entry: index into the command list plus its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMatch {
    pub index: usize,
    pub score: u32,
}

/// Command palette state: open flag, query, ranked results and selection.
pub struct CommandPalette {
    commands: Vec<Command>,
    open: bool,
    query: String,
    results: Vec<PaletteMatch>,
    selected: usize,
}

/// Best score of the query over a command's label and keywords
pub fn command_score(query: &str, command: &Command) -> u32 {
    std::iter::once(command.label.as_str())
        .chain(command.keywords.iter().map(String::as_str))
        .map(|text| fuzzy_score(query, text))
        .max()
        .unwrap_or(0)
}

impl CommandPalette {
    pub fn new(commands: Vec<Command>) -> Self {
        let mut palette = Self {
            commands,
            open: false,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
        };
        palette.refresh();
        palette
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and clear the query.
    pub fn close(&mut self) {
        self.open = false;
        if !self.query.is_empty() {
            self.query.clear();
            self.refresh();
        }
        self.selected = 0;
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    pub fn set_commands(&mut self, commands: Vec<Command>) {
        self.commands = commands;
        self.refresh();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refresh();
    }

    fn refresh(&mut self) {
        let query = self.query.trim();
        let commands = &self.commands;
        let indices: Vec<usize> = (0..commands.len()).collect();
        self.results = rank(&indices, |&i| command_score(query, &commands[i]))
            .into_iter()
            .map(|(&index, score)| PaletteMatch { index, score })
            .collect();
        self.selected = 0;
        debug!(query, results = self.results.len(), "palette results refreshed");
    }

    pub fn results(&self) -> impl Iterator<Item = (&Command, u32)> {
        self.results
            .iter()
            .filter_map(|m| self.commands.get(m.index).map(|c| (c, m.score)))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Command> {
        let m = self.results.get(self.selected)?;
        self.commands.get(m.index)
    }

    /// Move the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.results.len();
    }

    /// Move the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.results.len() - 1);
    }

    /// Return the selected command's id and close the palette.
    pub fn execute(&mut self) -> Option<String> {
        let id = self.selected()?.id.clone();
        debug!(command = %id, "palette command executed");
        self.close();
        Some(id)
    }
}
