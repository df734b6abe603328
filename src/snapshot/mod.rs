// Execution steps and the variable snapshots they carry

use rustc_hash::FxHashMap;
use std::fmt;

/// Simulated variable state at one point of execution.
///
/// Entries keep insertion order, which is also the display order. Assigning
/// to a name that already exists replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the textual value of a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Variable names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Insert or overwrite a variable
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }
}

impl PartialEq for MemorySnapshot {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the entries
        self.entries == other.entries
    }
}

impl Eq for MemorySnapshot {}

impl fmt::Display for MemorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        f.write_str("}")
    }
}

/// One unit of simulated progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStep {
    /// Zero-based source line to highlight
    pub line: usize,
    /// Text appended to the output buffer when the step is played (may be empty)
    pub output: String,
    /// Full variable state after this step
    pub memory: MemorySnapshot,
}

impl ExecutionStep {
    pub fn new(line: usize, output: impl Into<String>, memory: MemorySnapshot) -> Self {
        ExecutionStep {
            line,
            output: output.into(),
            memory,
        }
    }
}

impl fmt::Display for ExecutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {:>3} | {:<40} | {}",
            self.line + 1,
            format!("{:?}", self.output),
            self.memory
        )
    }
}
