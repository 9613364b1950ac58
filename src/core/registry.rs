// Bar Registry
// Insertion-ordered collection of named bars; draw order is insertion order

use super::{Bar, Theme};

/// Ordered collection of bars keyed by title
///
/// Bar counts are small (single digits to low tens), so lookup is a
/// linear scan over the insertion-ordered vector.
#[derive(Debug, Default, Clone)]
pub struct BarRegistry {
    bars: Vec<Bar>,
}

impl BarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the bar with the given title, creating and appending a
    /// defaulted one if the title is unseen. Never fails.
    pub fn upsert(&mut self, title: &str, theme: Theme) -> &mut Bar {
        let idx = match self.bars.iter().position(|b| b.title == title) {
            Some(idx) => idx,
            None => {
                self.bars.push(Bar::new(title, theme));
                self.bars.len() - 1
            }
        };
        &mut self.bars[idx]
    }

    /// Look up a bar by title
    pub fn get(&self, title: &str) -> Option<&Bar> {
        self.bars.iter().find(|b| b.title == title)
    }

    /// Iterate bars in insertion (draw) order
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Number of bars
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the registry holds no bars
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Release all bars (widget teardown)
    pub fn wipe(&mut self) {
        self.bars.clear();
    }
}
