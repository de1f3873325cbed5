use super::BstSet;
use crate::raw::Handle;

/// A mutating in-order traversal of a [`BstSet`].
///
/// This `struct` is created by the [`cursor_mut`] method on [`BstSet`]. It
/// yields elements in ascending order like [`iter`], but holds the set
/// exclusively and can remove the element it most recently yielded without
/// losing its place - the successor position is captured when an element is
/// yielded, before any removal can restructure the tree around it.
///
/// # Examples
///
/// Dropping every odd element during a single pass:
///
/// ```
/// use plain_tree::BstSet;
///
/// let mut set = BstSet::from([1, 2, 3, 4, 5]);
/// let mut cursor = set.cursor_mut();
/// while let Some(&n) = cursor.next() {
///     if n % 2 != 0 {
///         cursor.remove_last();
///     }
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 4]);
/// ```
///
/// [`cursor_mut`]: BstSet::cursor_mut
/// [`iter`]: BstSet::iter
#[must_use = "cursors are lazy and do nothing unless advanced"]
pub struct CursorMut<'a, T, C> {
    set: &'a mut BstSet<T, C>,
    /// The node the next call to `next` will yield.
    upcoming: Option<Handle>,
    /// The node yielded by the last call to `next`, cleared on removal.
    yielded: Option<Handle>,
}

impl<T, C> BstSet<T, C> {
    /// Returns a cursor positioned before the first (least) element.
    ///
    /// Unlike [`iter`](BstSet::iter), the cursor borrows the set mutably and
    /// supports [`remove_last`](CursorMut::remove_last). Plain structural
    /// mutation of the set during a traversal is therefore impossible - the
    /// cursor is the only handle to the set while it lives.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_tree::BstSet;
    ///
    /// let mut set = BstSet::from([2, 1, 3]);
    /// let mut cursor = set.cursor_mut();
    /// assert_eq!(cursor.next(), Some(&1));
    /// assert_eq!(cursor.next(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, C> {
        let upcoming = self.raw.first();
        CursorMut {
            set: self,
            upcoming,
            yielded: None,
        }
    }
}

impl<T, C> CursorMut<'_, T, C> {
    /// Advances the traversal and returns a reference to the next element in
    /// ascending order, or `None` once the traversal is exhausted.
    ///
    /// # Complexity
    ///
    /// O(h) per step; a full traversal visits every edge twice, so O(1)
    /// amortized.
    pub fn next(&mut self) -> Option<&T> {
        let handle = self.upcoming?;
        self.upcoming = self.set.raw.successor(handle);
        self.yielded = Some(handle);
        Some(&self.set.raw.node(handle).elem)
    }

    /// Removes and returns the element most recently yielded by
    /// [`next`](CursorMut::next).
    ///
    /// Equivalent to calling [`BstSet::take`] with that element, except that
    /// the traversal keeps its position: the upcoming element was captured
    /// before the removal, and its slot survives the splice even when the
    /// removed node has two children (the upcoming element is then exactly
    /// the substitute that takes the removed node's place).
    ///
    /// # Panics
    ///
    /// Panics if no element has been yielded yet, or if the last yielded
    /// element was already removed. Both are usage errors of the traversal,
    /// not recoverable conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_tree::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3]);
    /// let mut cursor = set.cursor_mut();
    /// cursor.next();
    /// assert_eq!(cursor.remove_last(), 1);
    /// assert_eq!(cursor.next(), Some(&2));
    /// assert!(!set.contains(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove_last(&mut self) -> T {
        let handle = self.yielded.take().expect("`CursorMut::remove_last()` - no element has been yielded!");
        self.set.raw.remove_at(handle)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn removes_the_minimum_and_keeps_going() {
        let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);
        let mut cursor = set.cursor_mut();
        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.remove_last(), 1);

        let mut rest = Vec::new();
        while let Some(&n) = cursor.next() {
            rest.push(n);
        }
        assert_eq!(rest, [3, 4, 5, 7, 8, 9]);
        assert!(!set.contains(&1));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn removing_a_junction_keeps_the_upcoming_element() {
        // Yield up to 5 (a two-child node); the upcoming element 7 is the
        // substitute spliced into 5's place by the removal.
        let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);
        let mut cursor = set.cursor_mut();
        while let Some(&n) = cursor.next() {
            if n == 5 {
                break;
            }
        }
        assert_eq!(cursor.remove_last(), 5);

        let mut rest = Vec::new();
        while let Some(&n) = cursor.next() {
            rest.push(n);
        }
        assert_eq!(rest, [7, 8, 9]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
    }

    #[test]
    #[should_panic(expected = "`CursorMut::remove_last()` - no element has been yielded!")]
    fn remove_before_first_advance_panics() {
        let mut set = BstSet::from([1, 2, 3]);
        let mut cursor = set.cursor_mut();
        let _ = cursor.remove_last();
    }

    #[test]
    #[should_panic(expected = "`CursorMut::remove_last()` - no element has been yielded!")]
    fn remove_twice_without_advance_panics() {
        let mut set = BstSet::from([1, 2, 3]);
        let mut cursor = set.cursor_mut();
        cursor.next();
        let _ = cursor.remove_last();
        let _ = cursor.remove_last();
    }
}
