//! Begrenzter Verlauf ausgeführter Commands (Statusleiste, Tests).

use super::AppCommand;
use std::collections::VecDeque;

/// Standard-Obergrenze gespeicherter Commands.
pub const DEFAULT_LOG_LIMIT: usize = 1000;

/// Verlauf der zuletzt ausgeführten Commands.
///
/// Beim Erreichen von `limit` wird die ältere Hälfte verworfen; `total` zählt
/// dagegen alle jemals aufgezeichneten Commands.
#[derive(Debug, Clone)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    limit: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LOG_LIMIT)
    }
}

impl CommandLog {
    /// Leerer Verlauf mit `DEFAULT_LOG_LIMIT`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leerer Verlauf mit eigener Obergrenze (mindestens 2).
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(2);
        Self {
            recent: VecDeque::with_capacity(limit),
            limit,
            total: 0,
        }
    }

    pub fn record(&mut self, command: AppCommand) {
        if self.recent.len() >= self.limit {
            self.recent.drain(..self.limit / 2);
        }
        self.recent.push_back(command);
        self.total += 1;
    }

    /// Anzahl gespeicherter Commands.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Anzahl aller aufgezeichneten Commands seit dem Start.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Gespeicherte Commands, ältester zuerst.
    pub fn entries(&self) -> Vec<AppCommand> {
        self.recent.iter().cloned().collect()
    }
}
