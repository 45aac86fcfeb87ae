use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::btree::Node;

/// Capacity of the pool a tree creates for itself when none is supplied.
pub const DEFAULT_FREELIST_SIZE: usize = 32;

/// A bounded pool of spare b-tree nodes.
///
/// A `FreeList` value is a cheap handle to a shared pool: cloning it and
/// passing the clones to [`BTree::with_free_list`](crate::BTree::with_free_list)
/// lets several trees draw from and return nodes to the same reservoir.
/// Nodes merged away or shed by a collapsing root go back into the pool
/// until it holds `capacity` spares; beyond that they are dropped.
///
/// The handle is reference-counted and not `Send`, so trees sharing a pool
/// live on one thread and the pool itself never needs a lock.
pub struct FreeList<T> {
    pool: Rc<RefCell<Pool<T>>>,
}

pub(crate) struct Pool<T> {
    nodes: Vec<Box<Node<T>>>,
    cap: usize,
}

impl<T> FreeList<T> {
    /// Creates a pool that retains at most `size` spare nodes.
    pub fn new(size: usize) -> Self {
        Self {
            pool: Rc::new(RefCell::new(Pool {
                nodes: Vec::with_capacity(size),
                cap: size,
            })),
        }
    }

    /// Number of spare nodes currently pooled.
    pub fn len(&self) -> usize {
        self.pool.borrow().nodes.len()
    }

    /// True when the pool holds no spare nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of spare nodes the pool retains.
    pub fn capacity(&self) -> usize {
        self.pool.borrow().cap
    }

    pub(crate) fn pool_mut(&self) -> RefMut<'_, Pool<T>> {
        self.pool.borrow_mut()
    }
}

impl<T> Clone for FreeList<T> {
    fn clone(&self) -> Self {
        Self {
            pool: Rc::clone(&self.pool),
        }
    }
}

impl<T> fmt::Debug for FreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Pool<T> {
    /// Pops a blank node, allocating a fresh one when the pool is empty.
    pub(crate) fn new_node(&mut self) -> Box<Node<T>> {
        self.nodes
            .pop()
            .unwrap_or_else(|| Box::new(Node::new()))
    }

    /// Returns a node to the pool, or drops it when the pool is full.  The
    /// node is cleared first, so pooled nodes never keep items or subtrees
    /// alive.
    pub(crate) fn free_node(&mut self, mut n: Box<Node<T>>) {
        if self.nodes.len() < self.cap {
            n.items.clear();
            n.children.clear();
            self.nodes.push(n);
        }
    }
}
