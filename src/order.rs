use core::cmp::Ordering;

/// A strict total order over `T`, supplied by the caller of [`BstSet`].
///
/// `Ordering::Equal` is set-membership equality: two elements the order
/// considers equal are the same element as far as the set is concerned, even
/// when they are distinguishable through `Eq`. The order must be consistent,
/// transitive, and antisymmetric; this is not checked at runtime, and an
/// order violating it produces an unspecified tree shape.
///
/// Closures of type `Fn(&T, &T) -> Ordering` implement this trait, so most
/// callers never name it:
///
/// ```
/// use plain_tree::BstSet;
///
/// let mut by_len = BstSet::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// by_len.insert("kiwi");
/// // "pear" compares equal to "kiwi" under this order - same length.
/// assert!(!by_len.insert("pear"));
/// ```
///
/// [`BstSet`]: crate::BstSet
pub trait TotalOrder<T: ?Sized> {
    /// Compares two elements under this order.
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T` via [`Ord`].
///
/// This is the default order parameter of [`BstSet`], used by
/// [`BstSet::new`].
///
/// [`BstSet`]: crate::BstSet
/// [`BstSet::new`]: crate::BstSet::new
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: Ord> TotalOrder<T> for Natural {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
