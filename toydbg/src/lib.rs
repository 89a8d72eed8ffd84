use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
pub use serde_json::Error;

/// One encoded source line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DebugLine {
    /// Instruction address as counted by pass one.
    pub address: usize,
    /// Byte offset of the line's first chunk in the assembled output.
    pub offset: usize,
    pub text: String,
    pub line_number: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugInfo {
    pub lines: Vec<DebugLine>,
    pub offset_map: BTreeMap<usize, usize>,
    pub labels: BTreeMap<String, u16>,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_string(dbg: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(dbg)
    }

    pub fn add_label(&mut self, label: String, address: u16) {
        self.labels.insert(label, address);
    }

    pub fn add_line(&mut self, address: usize, offset: usize, text: String, line_number: usize) {
        self.lines.push(DebugLine {
            address,
            offset,
            text,
            line_number,
        });
        self.offset_map.insert(offset, self.lines.len() - 1);
    }

    /// Finds the listing line whose encoding starts at `offset`.
    pub fn line_at(&self, offset: usize) -> Option<&DebugLine> {
        self.offset_map.get(&offset).map(|&idx| &self.lines[idx])
    }
}
