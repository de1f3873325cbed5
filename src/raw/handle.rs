use core::num::NonZero;

/// Index of a live slot in the node arena.
///
/// Stored as the slot index plus one in a `NonZero<u32>`, so `Option<Handle>`
/// occupies the same four bytes as `Handle` and the three links carried by
/// every tree node stay at twelve bytes total.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<u32>);

impl Handle {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // `index + 1` cannot be zero and cannot overflow `u32`.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as u32).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
