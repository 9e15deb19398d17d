//! Protokoll der ausgeführten Commands (Diagnose und Tests).

use std::collections::VecDeque;

use super::AppCommand;

/// Ringpuffer der zuletzt ausgeführten Commands, älteste zuerst.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(64),
        }
    }

    /// Hängt einen Command an; bei vollem Puffer fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge in Ausführungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }

    /// Anzahl tatsächlich geänderter Zellen (`SetCell`) im Log.
    pub fn cell_changes(&self) -> usize {
        self.entries
            .iter()
            .filter(|c| matches!(c, AppCommand::SetCell { .. }))
            .count()
    }
}
