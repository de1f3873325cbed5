use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::order::TotalOrder;

/// The unbalanced search tree backing `BstSet`.
///
/// Owns the node arena, the root link, and the element count; every piece of
/// link surgery lives here. The order is not stored - callers pass it into
/// the operations that compare elements, which keeps this type free of the
/// order parameter and lets purely structural operations (traversal stepping,
/// removal by handle) skip it entirely.
#[derive(Clone)]
pub(crate) struct RawBst<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
}

impl<T> RawBst<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Returns the leftmost (least) descendant of `from`, or `from` itself.
    pub(crate) fn leftmost(&self, mut from: Handle) -> Handle {
        while let Some(left) = self.nodes.get(from).left {
            from = left;
        }
        from
    }

    /// Returns the rightmost (greatest) descendant of `from`, or `from` itself.
    pub(crate) fn rightmost(&self, mut from: Handle) -> Handle {
        while let Some(right) = self.nodes.get(from).right {
            from = right;
        }
        from
    }

    /// Handle of the least element, if any.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Handle of the greatest element, if any.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Handle of the in-order successor of `of`, if any.
    ///
    /// The next element is the leftmost node of the right subtree when one
    /// exists; otherwise it is the first ancestor reached through a
    /// left-child edge.
    pub(crate) fn successor(&self, of: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes.get(of).right {
            return Some(self.leftmost(right));
        }

        let mut current = of;
        while let Some(parent) = self.nodes.get(current).parent {
            if self.nodes.get(parent).left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Handle of the in-order predecessor of `of`, if any.
    pub(crate) fn predecessor(&self, of: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes.get(of).left {
            return Some(self.rightmost(left));
        }

        let mut current = of;
        while let Some(parent) = self.nodes.get(current).parent {
            if self.nodes.get(parent).right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Membership walk: the handle of the node comparing `Equal` to `value`,
    /// if one is reached before an absent child.
    pub(crate) fn search<C>(&self, value: &T, order: &C) -> Option<Handle>
    where
        C: TotalOrder<T> + ?Sized,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match order.cmp(value, &node.elem) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Inserts `value` unless an equal element is already present.
    ///
    /// The walk stops the moment it sees `Equal`; otherwise the new node is
    /// attached under the last node visited, on the side the final
    /// comparison chose.
    pub(crate) fn insert<C>(&mut self, value: T, order: &C) -> bool
    where
        C: TotalOrder<T> + ?Sized,
    {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(value, None)));
            self.len += 1;
            return true;
        };

        let mut current = root;
        let side = loop {
            let node = self.nodes.get(current);
            let side = match order.cmp(&value, &node.elem) {
                Ordering::Equal => return false,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let leaf = self.nodes.alloc(Node::new(value, Some(current)));
        self.nodes.get_mut(current).set_child(side, Some(leaf));
        self.len += 1;
        true
    }

    /// Removes the element equal to `value`, returning it if it was present.
    pub(crate) fn take<C>(&mut self, value: &T, order: &C) -> Option<T>
    where
        C: TotalOrder<T> + ?Sized,
    {
        let found = self.search(value, order)?;
        Some(self.remove_at(found))
    }

    /// Detaches the node at `removed` and returns its element.
    ///
    /// Purely structural: never compares elements, so a cursor can remove
    /// the node it last yielded by handle alone. The handle of every other
    /// node survives the surgery - splicing rewrites links, not slots.
    pub(crate) fn remove_at(&mut self, removed: Handle) -> T {
        let node = self.nodes.get(removed);
        match (node.left, node.right) {
            (Some(left), Some(right)) => self.detach_junction(removed, left, right),
            (left, right) => self.detach_non_junction(removed, left.or(right)),
        }
        self.len -= 1;
        self.nodes.take(removed).elem
    }

    /// Splices out a node with at most one child: the child (if any) moves
    /// into the removed node's slot under its former parent, or becomes the
    /// new root.
    fn detach_non_junction(&mut self, removed: Handle, child: Option<Handle>) {
        let parent = self.nodes.get(removed).parent;
        self.reparent(parent, removed, child);
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = parent;
        }
    }

    /// Replaces a two-child node with its in-order successor.
    ///
    /// The substitution node is the leftmost node of the right subtree, so it
    /// has no left child and the removed node's left subtree can be grafted
    /// onto that vacant slot. When the substitution node sits deeper than the
    /// removed node's immediate right child it is first unhooked from its own
    /// parent (its right child takes its place) and adopts the removed node's
    /// right subtree; when it IS the immediate right child, its right subtree
    /// is already positioned and the removed node's stale right link must not
    /// be copied over it.
    fn detach_junction(&mut self, removed: Handle, left: Handle, right: Handle) {
        let parent = self.nodes.get(removed).parent;
        let substitute = self.leftmost(right);

        if substitute != right {
            let sub = self.nodes.get(substitute);
            let sub_parent = sub.parent;
            let sub_right = sub.right;
            if let Some(sub_parent) = sub_parent {
                // A leftmost node is its parent's left child.
                self.nodes.get_mut(sub_parent).left = sub_right;
                if let Some(sub_right) = sub_right {
                    self.nodes.get_mut(sub_right).parent = Some(sub_parent);
                }
            }
            self.nodes.get_mut(substitute).right = Some(right);
            self.nodes.get_mut(right).parent = Some(substitute);
        }

        self.reparent(parent, removed, Some(substitute));
        self.nodes.get_mut(substitute).parent = parent;

        self.nodes.get_mut(substitute).left = Some(left);
        self.nodes.get_mut(left).parent = Some(substitute);
    }

    /// Repoints whichever of `parent`'s child links addressed `removed` - or
    /// the root link when `parent` is absent - at `replacement`.
    fn reparent(&mut self, parent: Option<Handle>, removed: Handle, replacement: Option<Handle>) {
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let node = self.nodes.get_mut(parent);
                let side = if node.right == Some(removed) { Side::Right } else { Side::Left };
                node.set_child(side, replacement);
            }
        }
    }
}
