use super::handle::Handle;

/// Which child link of a node is being addressed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node: one element and three links into the arena.
///
/// `left` and `right` address the subtrees of strictly lesser and strictly
/// greater elements. `parent` is a non-owning back-reference (absent for the
/// root) used for traversal stepping and removal bookkeeping; ownership of a
/// node rests with the arena slot, so back-references are just indices.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) parent: Option<Handle>,
}

impl<T> Node<T> {
    pub(crate) const fn new(elem: T, parent: Option<Handle>) -> Self {
        Self {
            elem,
            left: None,
            right: None,
            parent,
        }
    }

    /// Returns the child link on the given side.
    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Sets the child link on the given side.
    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
