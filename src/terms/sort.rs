//! Comparator building blocks shared by the sortable table views.

use std::cmp::Ordering;

use super::normalize::fold;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Header-click state: repeated clicks on the same column toggle the
/// direction, a click on a new column restarts from that view's initial
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: Direction,
}

impl<K: PartialEq + Copy> SortState<K> {
    pub fn new(key: K, direction: Direction) -> Self {
        Self { key, direction }
    }

    /// Registers a header click and returns the direction to sort with.
    pub fn select(&mut self, key: K, initial: Direction) -> Direction {
        self.direction = if self.key == key {
            self.direction.toggled()
        } else {
            initial
        };
        self.key = key;
        self.direction
    }
}

/// Compares strings with case and diacritics folded, so ordering matches
/// what a Portuguese-speaking reader expects from the column header. The
/// raw strings break ties to keep the comparison total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Compares optional years with `None` always ordered last, in both
/// directions. Used by the per-term article view; the plain table instead
/// coerces missing years to 0.
pub fn cmp_year_none_last(a: Option<i32>, b: Option<i32>, direction: Direction) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
    }
}
