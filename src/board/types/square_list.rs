//! Fixed-capacity list of destination squares.

use std::fmt;
use std::ops::Index;

use super::square::Square;

/// Upper bound on destinations of a single piece (a centralized queen has 27).
pub(crate) const MAX_DESTINATIONS: usize = 32;

const EMPTY_SQUARE: Square = Square(0, 0);

/// Destination squares in generation order, backed by a fixed-size array.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl SquareList {
    #[must_use]
    pub const fn new() -> Self {
        SquareList {
            squares: [EMPTY_SQUARE; MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        assert!(
            self.len < MAX_DESTINATIONS,
            "SquareList capacity {MAX_DESTINATIONS} exceeded"
        );
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Square> {
        self.as_slice().get(idx).copied()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl fmt::Debug for SquareList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over a `SquareList`
pub struct SquareListIntoIter {
    list: SquareList,
    idx: usize,
}

impl Iterator for SquareListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.list.get(self.idx)?;
        self.idx += 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SquareListIntoIter {}

impl IntoIterator for SquareList {
    type Item = Square;
    type IntoIter = SquareListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareListIntoIter { list: self, idx: 0 }
    }
}

impl FromIterator<Square> for SquareList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut list = SquareList::new();
        for sq in iter {
            list.push(sq);
        }
        list
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "SquareList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let list: SquareList = [Square(1, 2), Square(3, 4), Square(5, 6)]
            .into_iter()
            .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], Square(3, 4));
        assert!(list.contains(Square(5, 6)));
        assert!(!list.contains(Square(0, 0)));

        let owned: Vec<Square> = list.into_iter().collect();
        assert_eq!(owned, vec![Square(1, 2), Square(3, 4), Square(5, 6)]);
    }

    #[test]
    fn test_equality_ignores_unused_slots() {
        let mut a = SquareList::new();
        let mut b = SquareList::new();
        a.push(Square(2, 2));
        b.push(Square(2, 2));
        assert_eq!(a, b);
        b.push(Square(0, 0));
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_len_panics() {
        let list = SquareList::new();
        let _ = list[0];
    }
}
