use feruca::Collator;
use std::cmp::Ordering;

/// The three orderings a catalog can be put into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TitleAscending,
    TitleDescending,
    RatingDescending,
}

/// Dictionary-style title comparison using the Unicode Collation Algorithm
/// with the CLDR root locale, so "Amélie" sorts before "Amend" and lowercase
/// sorts before uppercase when titles otherwise agree.
///
/// Holds one collator for a whole sort.
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    pub fn new() -> Self {
        Self {
            collator: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b)
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison of two titles. Sorts should reuse a [`TitleCollator`].
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}
