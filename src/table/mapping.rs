//! Ordered engine → measurement mapping

use serde::{Deserialize, Serialize};

/// A single engine measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Engine name (first table column)
    pub engine: String,
    /// Measurement (second table column)
    pub value: f64,
}

/// Engine name to measurement, in insertion order.
///
/// Engine names are unique. Re-inserting an existing engine replaces its value
/// but keeps the slot of its first occurrence, so chart ordering follows the
/// order in which engines first appear in the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsMapping {
    entries: Vec<ResultEntry>,
}

impl ResultsMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite the value for `engine`, returning the previous value
    pub fn insert(&mut self, engine: impl Into<String>, value: f64) -> Option<f64> {
        let engine = engine.into();
        match self.entries.iter_mut().find(|e| e.engine == engine) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                self.entries.push(ResultEntry { engine, value });
                None
            }
        }
    }

    /// Look up the value for an engine
    pub fn get(&self, engine: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.engine == engine)
            .map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(engine, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.engine.as_str(), e.value))
    }

    /// Engine names in insertion order
    pub fn engines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.engine.as_str())
    }

    /// Measurements in insertion order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.value)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ResultsMapping {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (engine, value) in iter {
            mapping.insert(engine, value);
        }
        mapping
    }
}
