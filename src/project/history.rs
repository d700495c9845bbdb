use std::collections::VecDeque;

use anyhow::{Context, Result};

use super::Design;

/// Undo levels kept before the oldest snapshot is dropped.
pub const MAX_HISTORY: usize = 50;

/// Undo/redo over serialized design snapshots.
///
/// Snapshots are JSON strings so a restored design is fully detached from
/// the one being edited.
#[derive(Debug, Clone, Default)]
pub struct DesignHistory {
    undo: VecDeque<String>,
    redo: Vec<String>,
}

impl DesignHistory {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn can_undo(&self) -> bool { !self.undo.is_empty() }
    #[inline] pub fn can_redo(&self) -> bool { !self.redo.is_empty() }

    /// Record `design` before it is mutated.  Clears the redo stack.
    pub fn push(&mut self, design: &Design) -> Result<()> {
        let snapshot = serde_json::to_string(design).context("[history.push] failed to snapshot design")?;
        if self.undo.len() == MAX_HISTORY {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
        self.redo.clear();
        Ok(())
    }

    /// Step back.  `current` goes onto the redo stack.
    pub fn undo(&mut self, current: &Design) -> Result<Option<Design>> {
        let Some(snapshot) = self.undo.pop_back() else { return Ok(None) };
        self.redo.push(serde_json::to_string(current).context("[history.undo] failed to snapshot design")?);
        let design = serde_json::from_str(&snapshot).context("[history.undo] corrupt snapshot")?;
        Ok(Some(design))
    }

    /// Step forward.  `current` goes back onto the undo stack.
    pub fn redo(&mut self, current: &Design) -> Result<Option<Design>> {
        let Some(snapshot) = self.redo.pop() else { return Ok(None) };
        self.undo.push_back(serde_json::to_string(current).context("[history.redo] failed to snapshot design")?);
        let design = serde_json::from_str(&snapshot).context("[history.redo] corrupt snapshot")?;
        Ok(Some(design))
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
