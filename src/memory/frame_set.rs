use linked_hash_map::LinkedHashMap;

use crate::common::types::Page;
use crate::memory::error::{FrameSetError, Result};
use crate::simulation::result::Snapshot;

/// Fixed-capacity ordered set of resident pages.
///
/// The front of the set is always the next eviction candidate. FIFO keeps
/// admission order; LRU keeps recency order by re-appending touched pages.
/// Membership, touch and eviction are all O(1). Storage grows with the
/// resident pages, never with the nominal capacity.
#[derive(Debug, Clone)]
pub struct FrameSet {
    capacity: usize,
    resident: LinkedHashMap<Page, ()>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            resident: LinkedHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    pub fn contains(&self, page: Page) -> bool {
        self.resident.contains_key(&page)
    }

    pub fn is_full(&self) -> bool {
        self.resident.len() == self.capacity
    }

    /// Append a page at the tail
    pub fn insert(&mut self, page: Page) -> Result<()> {
        if self.contains(page) {
            return Err(FrameSetError::PrecondViolation(format!(
                "page {} is already resident",
                page
            )));
        }
        if self.is_full() {
            return Err(FrameSetError::PrecondViolation(format!(
                "cannot admit page {} into a full set of {} frames",
                page, self.capacity
            )));
        }

        self.resident.insert(page, ());
        Ok(())
    }

    /// Remove and return the page at the front
    pub fn evict_oldest(&mut self) -> Result<Page> {
        self.resident
            .pop_front()
            .map(|(page, _)| page)
            .ok_or(FrameSetError::EmptyState)
    }

    /// Move a resident page to the tail, marking it most recently used
    pub fn touch(&mut self, page: Page) -> Result<()> {
        match self.resident.get_refresh(&page) {
            Some(_) => Ok(()),
            None => Err(FrameSetError::NotFound(page)),
        }
    }

    /// Iterate resident pages from front (oldest) to tail (newest)
    pub fn iter(&self) -> impl Iterator<Item = Page> + '_ {
        self.resident.keys().copied()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(set: &FrameSet) -> Vec<Page> {
        set.iter().collect()
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut set = FrameSet::new(3);
        set.insert(7).unwrap();
        set.insert(0).unwrap();
        set.insert(1).unwrap();

        assert_eq!(pages(&set), vec![7, 0, 1]);
        assert!(set.is_full());
        assert!(set.contains(0));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_insert_rejects_duplicate_and_overflow() {
        let mut set = FrameSet::new(1);
        set.insert(4).unwrap();

        assert!(matches!(set.insert(4), Err(FrameSetError::PrecondViolation(_))));
        assert!(matches!(set.insert(5), Err(FrameSetError::PrecondViolation(_))));
        assert_eq!(pages(&set), vec![4]);
    }

    #[test]
    fn test_evict_oldest() {
        let mut set = FrameSet::new(2);
        assert_eq!(set.evict_oldest(), Err(FrameSetError::EmptyState));

        set.insert(1).unwrap();
        set.insert(2).unwrap();
        assert_eq!(set.evict_oldest(), Ok(1));
        assert_eq!(pages(&set), vec![2]);
        assert!(!set.is_full());
    }

    #[test]
    fn test_touch_moves_to_tail() {
        let mut set = FrameSet::new(3);
        for page in [1, 2, 3] {
            set.insert(page).unwrap();
        }

        set.touch(1).unwrap();
        assert_eq!(pages(&set), vec![2, 3, 1]);
        assert_eq!(set.touch(9), Err(FrameSetError::NotFound(9)));

        // Touching the tail leaves the order alone
        set.touch(1).unwrap();
        assert_eq!(pages(&set), vec![2, 3, 1]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut set = FrameSet::new(2);
        set.insert(1).unwrap();
        let before = set.snapshot();

        set.insert(2).unwrap();
        set.evict_oldest().unwrap();

        assert_eq!(before.pages(), &[1]);
        assert_eq!(set.snapshot().pages(), &[2]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut set = FrameSet::new(usize::MAX);
        set.insert(1).unwrap();
        set.insert(2).unwrap();

        assert!(!set.is_full());
        assert_eq!(pages(&set), vec![1, 2]);
    }
}
