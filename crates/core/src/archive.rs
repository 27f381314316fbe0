//! Session archive of generated designs.

use crate::design::GenerationResult;
use crate::types::DesignId;

/// Ordered collection of generation results, newest first.
///
/// Held in process memory only; a restart loses all designs. The studio is
/// the sole writer and the only mutation is [`prepend`](Self::prepend) --
/// no reordering, no in-place edits, no deletion.
#[derive(Debug, Default)]
pub struct DesignArchive {
    designs: Vec<GenerationResult>,
}

impl DesignArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly assembled result at the front.
    pub fn prepend(&mut self, design: GenerationResult) {
        self.designs.insert(0, design);
    }

    /// All designs, newest first.
    pub fn designs(&self) -> &[GenerationResult] {
        &self.designs
    }

    /// Look up a design by id.
    pub fn get(&self, id: DesignId) -> Option<&GenerationResult> {
        self.designs.iter().find(|d| d.id == id)
    }

    /// The `n` newest designs (fewer if the archive is shorter).
    pub fn recent(&self, n: usize) -> &[GenerationResult] {
        &self.designs[..self.designs.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
