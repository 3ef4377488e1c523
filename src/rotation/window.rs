// SPDX-License-Identifier: MPL-2.0
//! Keyed difference between two visible windows.
//!
//! Items are keyed by their position in the rotation's item sequence, so an
//! item that stays on screen while its neighbours change is reported as
//! `kept` and keeps its animation state.

/// Which item positions entered, stayed in, or left the visible window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowChange {
    /// Positions visible now but not before, in display order.
    pub entered: Vec<usize>,
    /// Positions visible both before and now, in display order.
    pub kept: Vec<usize>,
    /// Positions visible before but not now, in their previous order.
    pub left: Vec<usize>,
}

impl WindowChange {
    /// Compares the previous and current window positions.
    #[must_use]
    pub fn between(previous: &[usize], current: &[usize]) -> Self {
        let (kept, entered): (Vec<usize>, Vec<usize>) = current
            .iter()
            .copied()
            .partition(|position| previous.contains(position));
        let left = previous
            .iter()
            .copied()
            .filter(|position| !current.contains(position))
            .collect();

        Self {
            entered,
            kept,
            left,
        }
    }

    /// `true` when no item entered or left the window.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.entered.is_empty() && self.left.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_windows_are_unchanged() {
        let change = WindowChange::between(&[1, 2, 3], &[1, 2, 3]);
        assert!(change.is_unchanged());
        assert_eq!(change.kept, vec![1, 2, 3]);
    }

    #[test]
    fn overlapping_windows_keep_shared_items() {
        let change = WindowChange::between(&[9, 10, 0], &[1, 2, 3]);
        assert_eq!(change.entered, vec![1, 2, 3]);
        assert_eq!(change.left, vec![9, 10, 0]);

        let change = WindowChange::between(&[10, 0, 1], &[1, 2, 3]);
        assert_eq!(change.entered, vec![2, 3]);
        assert_eq!(change.kept, vec![1]);
        assert_eq!(change.left, vec![10, 0]);
    }

    #[test]
    fn single_item_swap() {
        let change = WindowChange::between(&[0], &[1]);
        assert_eq!(change.entered, vec![1]);
        assert_eq!(change.left, vec![0]);
        assert!(change.kept.is_empty());
    }

    #[test]
    fn default_is_unchanged() {
        assert!(WindowChange::default().is_unchanged());
    }
}
