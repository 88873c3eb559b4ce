// SPDX-License-Identifier: MPL-2.0
//! Record of questions answered correctly.

/// Fixed-size record of which question indices were answered correctly at
/// least once.
///
/// Entries are only ever added; [`AnsweredSet::clear`] is the single way to
/// remove them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredSet {
    slots: Vec<bool>,
}

impl AnsweredSet {
    /// Creates an empty record for `total` questions.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            slots: vec![false; total],
        }
    }

    /// Marks `index` as answered. Returns true if the entry is new.
    ///
    /// Out-of-range indices are ignored.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|answered| **answered).count()
    }

    /// Number of questions tracked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Returns true once every question has been answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|answered| *answered)
    }

    /// Lowest index not yet answered.
    #[must_use]
    pub fn first_unanswered(&self) -> Option<usize> {
        self.slots.iter().position(|answered| !answered)
    }

    /// Answered indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, answered)| answered.then_some(index))
    }

    /// Fraction of answered questions in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.count() as f32 / self.slots.len() as f32
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = false);
    }
}
