//! The 3x3 combination grid.
//!
//! Nine single-capacity drop targets. Ideas are staged here before fusion.
//! The grid is keyed: when the controller bumps its grid key after a
//! successful fusion, [`CombinationGrid::sync_key`] clears every slot.

pub const GRID_COLUMNS: usize = 3;
pub const GRID_SLOTS: usize = GRID_COLUMNS * GRID_COLUMNS;

/// Minimum number of filled slots before `combine()` is offered.
pub const MIN_FUSION_INPUTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationGrid {
    slots: [Option<String>; GRID_SLOTS],
    key: u64,
}

impl CombinationGrid {
    pub fn new() -> Self {
        Self::with_key(0)
    }

    pub fn with_key(key: u64) -> Self {
        Self {
            slots: Default::default(),
            key,
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    /// Contents of one slot.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    pub fn slots(&self) -> &[Option<String>; GRID_SLOTS] {
        &self.slots
    }

    /// Store `text` in an empty slot. Returns whether anything changed.
    ///
    /// Occupied slots, out-of-range indices and empty text are ignored.
    pub fn drop(&mut self, text: &str, index: usize) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(text.to_string());
                tracing::debug!(slot = index, text, "Idea dropped into grid");
                true
            }
            _ => false,
        }
    }

    /// Clear a slot if it holds `text`. Returns whether anything changed.
    pub fn remove(&mut self, text: &str, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.as_deref() == Some(text) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    pub fn can_combine(&self) -> bool {
        self.filled_count() >= MIN_FUSION_INPUTS
    }

    /// Filled slot contents in slot order, once at least two are filled.
    pub fn combine(&self) -> Option<Vec<String>> {
        if !self.can_combine() {
            return None;
        }
        Some(self.slots.iter().flatten().cloned().collect())
    }

    /// Clear all slots unconditionally.
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }

    /// Adopt a new key. A different key clears the grid; returns whether it did.
    pub fn sync_key(&mut self, key: u64) -> bool {
        if self.key == key {
            return false;
        }
        self.key = key;
        self.reset();
        true
    }
}

impl Default for CombinationGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = CombinationGrid::new();
        assert_eq!(grid.filled_count(), 0);
        assert!((0..GRID_SLOTS).all(|i| grid.slot(i).is_none()));
        assert!(grid.combine().is_none());
    }

    #[test]
    fn drop_into_occupied_slot_keeps_original() {
        let mut grid = CombinationGrid::new();
        assert!(grid.drop("一杯清茶", 4));
        assert!(!grid.drop("慢享时光", 4));
        assert_eq!(grid.slot(4), Some("一杯清茶"));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn drop_ignores_empty_text_and_bad_index() {
        let mut grid = CombinationGrid::new();
        assert!(!grid.drop("", 0));
        assert!(!grid.drop("茶", GRID_SLOTS));
        assert!(grid.is_empty());
    }

    #[test]
    fn drop_accepts_any_text_including_duplicates() {
        let mut grid = CombinationGrid::new();
        assert!(grid.drop("同一句", 0));
        assert!(grid.drop("同一句", 1));
        assert_eq!(grid.combine(), Some(vec!["同一句".to_string(), "同一句".to_string()]));
    }

    #[test]
    fn remove_only_matching_text() {
        let mut grid = CombinationGrid::new();
        grid.drop("一杯清茶", 2);

        assert!(!grid.remove("别的", 2));
        assert_eq!(grid.slot(2), Some("一杯清茶"));

        assert!(!grid.remove("一杯清茶", 3));
        assert!(!grid.remove("一杯清茶", 99));

        assert!(grid.remove("一杯清茶", 2));
        assert_eq!(grid.slot(2), None);
    }

    #[test]
    fn combine_requires_two_and_preserves_slot_order() {
        let mut grid = CombinationGrid::new();
        grid.drop("第九", 8);
        assert!(!grid.can_combine());
        assert!(grid.combine().is_none());

        grid.drop("第一", 0);
        grid.drop("第五", 4);
        assert_eq!(
            grid.combine(),
            Some(vec!["第一".to_string(), "第五".to_string(), "第九".to_string()])
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut grid = CombinationGrid::new();
        for i in 0..GRID_SLOTS {
            grid.drop(&format!("idea {i}"), i);
        }
        assert_eq!(grid.filled_count(), GRID_SLOTS);

        grid.reset();
        assert!(grid.is_empty());
    }

    #[test]
    fn sync_key_clears_only_on_change() {
        let mut grid = CombinationGrid::with_key(3);
        grid.drop("a", 0);
        grid.drop("b", 1);

        assert!(!grid.sync_key(3));
        assert_eq!(grid.filled_count(), 2);

        assert!(grid.sync_key(4));
        assert!(grid.is_empty());
        assert_eq!(grid.key(), 4);
    }
}
