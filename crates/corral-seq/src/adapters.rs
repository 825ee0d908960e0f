//! Restricted-access adapters over [`Vector`].
//!
//! Each adapter owns a vector and exposes only the operations of its
//! discipline. Consuming one with `into_iter` or [`drain`](Stack::drain)
//! yields values in removal order.

use corral_core::{Arrayable, Collection, CollectionError};

use crate::vector::Vector;

/// Last-in, first-out stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vector<T>,
}

impl<T> Stack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Place a value on top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value. Underflow if empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop()
    }

    /// The top value without removing it. Underflow if empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.last()
    }

    /// Pop every value, top first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.items.pop().ok())
    }
}

impl<T> Collection for Stack<T> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Top first.
impl<T: Clone> Arrayable for Stack<T> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<crate::iter::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// First-in, first-out queue.
///
/// Dequeuing shifts the backing vector, so [`Queue::pop`] is O(len).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: Vector<T>,
}

impl<T> Queue<T> {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enqueue at the back.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Dequeue from the front. Underflow if empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.shift()
    }

    /// The front value without removing it. Underflow if empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.first()
    }

    /// Dequeue every value, front first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.items.shift().ok())
    }
}

impl<T> Collection for Queue<T> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Front first.
impl<T: Clone> Arrayable for Queue<T> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = crate::iter::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Double-ended queue with insertion and removal at both ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deque<T> {
    items: Vector<T>,
}

impl<T> Deque<T> {
    /// An empty deque.
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add at the back.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove from the back.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop()
    }

    /// Add at the front.
    pub fn unshift(&mut self, value: T) {
        self.items.unshift(value);
    }

    /// Remove from the front.
    pub fn shift(&mut self) -> Result<T, CollectionError> {
        self.items.shift()
    }

    /// The front value.
    pub fn first(&self) -> Result<&T, CollectionError> {
        self.items.first()
    }

    /// The back value.
    pub fn last(&self) -> Result<&T, CollectionError> {
        self.items.last()
    }

    /// Iterate front to back without consuming.
    pub fn iter(&self) -> crate::iter::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Collection for Deque<T> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Arrayable for Deque<T> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = crate::iter::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
