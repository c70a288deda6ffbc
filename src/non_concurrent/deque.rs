use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::trace;

use super::{ContainerError, EMPTY_PLACEHOLDER};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

/// A singly linked double-ended queue.
///
/// Elements can be added at either end in O(1), and are always removed from the front. Using
/// [`push`](Deque::push)/[`pop`](Deque::pop) gives stack order, and using
/// [`enqueue`](Deque::enqueue)/[`dequeue`](Deque::dequeue) gives queue order.
pub struct Deque<T> {
    size: usize,
    // NOTE: every node reachable from `head` is owned by this deque, and was made by `Node::alloc`.
    head: Link<T>,
    // NOTE: `tail` is `None` iff `head` is `None`, and otherwise points at the last node of the chain.
    tail: Link<T>,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the deque uniquely owns its nodes, the raw pointers are never shared with anything else.
unsafe impl<T: Send> Send for Deque<T> {}
// SAFETY: `&Deque<T>` only ever hands out `&T`.
unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T> Deque<T> {
    pub const fn new() -> Self {
        Self {
            size: 0,
            head: None,
            tail: None,
            _owns: PhantomData,
        }
    }

    /// The amount of elements in the deque.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Adds `value` in front of the current head.
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        trace!("Pushing node {node:?} onto the front of a deque of size {}", self.size);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.size += 1;
    }

    /// Adds `value` behind the current tail.
    pub fn enqueue_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        trace!("Enqueueing node {node:?} onto the back of a deque of size {}", self.size);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this deque, and `&mut self` means nobody is looking at it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Removes the head and returns its value.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::Empty)?;
        trace!("Releasing node {head:?} from the front of a deque of size {}", self.size);

        // SAFETY: `head` was made by `Node::alloc` and is owned by this deque. It gets unlinked
        //         right below, so nothing can reach it after the `Box` is dropped.
        let Node { value, next } = *unsafe { Box::from_raw(head.as_ptr()) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Ok(value)
    }

    /// Removes from the front. Same as [`pop_front`](Deque::pop_front); the two names only
    /// exist so callers can spell out whether they are using the deque as a stack or a queue.
    pub fn dequeue_front(&mut self) -> Result<T, ContainerError> {
        self.pop_front()
    }

    /// The value that the next `pop_front`/`dequeue_front` would return.
    pub fn peek_front(&self) -> Result<&T, ContainerError> {
        // SAFETY: `head` is live for as long as `self` is borrowed.
        self.head
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or(ContainerError::Empty)
    }

    pub fn push(&mut self, value: T) {
        self.push_front(value)
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.pop_front()
    }

    pub fn enqueue(&mut self, value: T) {
        self.enqueue_back(value)
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.dequeue_front()
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.peek_front()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.size,
            _marker: PhantomData,
        }
    }
}

impl<T: PartialEq> Deque<T> {
    /// Whether any element equals `value`. Linear in the size of the deque.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        // iterative, so long chains can't blow the stack
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This deque has a size of {} and contains the following:\n\n", self.size)?;
        if self.is_empty() {
            return f.write_str(EMPTY_PLACEHOLDER);
        }
        for value in self {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue_back(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the deque is borrowed for `'a`, so none of its nodes can be freed or mutated.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drains a deque front to back.
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
