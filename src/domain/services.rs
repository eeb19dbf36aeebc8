//! Navigation policies for walking the quote collection.
//!
//! This module decides which quote is shown next. It knows nothing about
//! rendering or fetching: given the current index and the collection length,
//! it either produces a new index or reports that the operation is a no-op.

use super::models::BrowseMode;
use rand::Rng;

/// Picks quote indices according to the configured browse mode.
///
/// Sequential mode steps circularly through the collection with exact
/// modular arithmetic. Shuffle mode draws a uniformly random index that is
/// guaranteed different from the current one whenever the collection holds
/// more than one quote.
///
/// # Examples
///
/// ```
/// use tqex::domain::{BrowseMode, Navigator};
///
/// let nav = Navigator::new(BrowseMode::Sequential);
/// assert_eq!(nav.advance(2, 3), Some(0));
/// assert_eq!(nav.retreat(0, 3), Some(2));
/// assert_eq!(nav.advance(0, 0), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    mode: BrowseMode,
}

impl Navigator {
    /// Creates a navigator for the given browse mode.
    pub fn new(mode: BrowseMode) -> Self {
        Self { mode }
    }

    /// The browse mode this navigator applies.
    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    /// Index to show right after a successful load.
    ///
    /// Sequential mode always restarts at the first quote. Shuffle mode
    /// opens on a uniformly random quote, or 0 for an empty collection.
    pub fn initial_index(&self, len: usize) -> usize {
        match self.mode {
            BrowseMode::Sequential => 0,
            BrowseMode::Shuffle if len > 0 => rand::rng().random_range(0..len),
            BrowseMode::Shuffle => 0,
        }
    }

    /// Moves to the next quote.
    ///
    /// Returns `None` when the operation cannot change anything: the
    /// collection is empty, or shuffle mode has fewer than two quotes.
    pub fn advance(&self, current: usize, len: usize) -> Option<usize> {
        match self.mode {
            BrowseMode::Sequential if len > 0 => Some((current + 1) % len),
            BrowseMode::Shuffle if len > 1 => Some(Self::random_other(current, len)),
            _ => None,
        }
    }

    /// Moves to the previous quote.
    ///
    /// Same no-op conditions as [`Self::advance`].
    pub fn retreat(&self, current: usize, len: usize) -> Option<usize> {
        match self.mode {
            BrowseMode::Sequential if len > 0 => Some((current + len - 1) % len),
            BrowseMode::Shuffle if len > 1 => Some(Self::random_other(current, len)),
            _ => None,
        }
    }

    /// Whether advance/retreat can change what is shown.
    pub fn can_navigate(&self, len: usize) -> bool {
        match self.mode {
            BrowseMode::Sequential => len > 0,
            BrowseMode::Shuffle => len > 1,
        }
    }

    /// Uniform draw over `[0, len)` excluding `current`.
    ///
    /// Rejection sampling: redraw until the sample differs. Requires
    /// `len > 1`.
    fn random_other(current: usize, len: usize) -> usize {
        debug_assert!(len > 1);
        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(0..len);
            if candidate != current {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_advance_steps_forward() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.advance(0, 5), Some(1));
        assert_eq!(nav.advance(3, 5), Some(4));
    }

    #[test]
    fn test_sequential_advance_wraps_at_end() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.advance(4, 5), Some(0));
    }

    #[test]
    fn test_sequential_retreat_wraps_at_start() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.retreat(0, 5), Some(4));
        assert_eq!(nav.retreat(1, 5), Some(0));
    }

    #[test]
    fn test_sequential_single_quote_stays_put() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.advance(0, 1), Some(0));
        assert_eq!(nav.retreat(0, 1), Some(0));
    }

    #[test]
    fn test_sequential_empty_is_noop() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.advance(0, 0), None);
        assert_eq!(nav.retreat(0, 0), None);
    }

    #[test]
    fn test_sequential_round_trip() {
        let nav = Navigator::new(BrowseMode::Sequential);
        let mut index = 0;
        for _ in 0..3 {
            index = nav.advance(index, 3).unwrap();
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn test_sequential_initial_index_is_zero() {
        let nav = Navigator::new(BrowseMode::Sequential);
        assert_eq!(nav.initial_index(0), 0);
        assert_eq!(nav.initial_index(7), 0);
    }

    #[test]
    fn test_shuffle_initial_index_in_range() {
        let nav = Navigator::new(BrowseMode::Shuffle);
        assert_eq!(nav.initial_index(0), 0);
        for _ in 0..100 {
            assert!(nav.initial_index(5) < 5);
        }
    }

    #[test]
    fn test_shuffle_never_repeats_current() {
        let nav = Navigator::new(BrowseMode::Shuffle);
        let mut index = 2;
        for _ in 0..200 {
            let next = nav.advance(index, 5).unwrap();
            assert_ne!(next, index);
            assert!(next < 5);
            index = next;
        }
    }

    #[test]
    fn test_shuffle_retreat_never_repeats_current() {
        let nav = Navigator::new(BrowseMode::Shuffle);
        for _ in 0..200 {
            let next = nav.retreat(1, 3).unwrap();
            assert_ne!(next, 1);
            assert!(next < 3);
        }
    }

    #[test]
    fn test_shuffle_empty_and_single_are_noops() {
        let nav = Navigator::new(BrowseMode::Shuffle);
        assert_eq!(nav.advance(0, 0), None);
        assert_eq!(nav.retreat(0, 0), None);
        assert_eq!(nav.advance(0, 1), None);
        assert_eq!(nav.retreat(0, 1), None);
    }

    #[test]
    fn test_shuffle_draws_are_roughly_uniform() {
        let nav = Navigator::new(BrowseMode::Shuffle);
        let len = 4;
        let current = 1;
        let trials = 3000;

        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[nav.advance(current, len).unwrap()] += 1;
        }

        assert_eq!(counts[current], 0);
        // Each of the other three indices expects trials/3 = 1000 hits.
        // Bounds are ~11 standard deviations wide to keep the test stable.
        for (index, &count) in counts.iter().enumerate() {
            if index != current {
                assert!(
                    (700..=1300).contains(&count),
                    "index {} drawn {} times out of {}",
                    index,
                    count,
                    trials
                );
            }
        }
    }

    #[test]
    fn test_can_navigate_thresholds() {
        let sequential = Navigator::new(BrowseMode::Sequential);
        assert!(!sequential.can_navigate(0));
        assert!(sequential.can_navigate(1));

        let shuffle = Navigator::new(BrowseMode::Shuffle);
        assert!(!shuffle.can_navigate(0));
        assert!(!shuffle.can_navigate(1));
        assert!(shuffle.can_navigate(2));
    }
}
