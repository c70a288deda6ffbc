use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::{debug, trace};

use super::{ContainerError, EMPTY_PLACEHOLDER};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    // NOTE: navigation only. Ownership always flows head -> tail through `next`.
    prev: Link<T>,
}

/// A doubly linked list with indexed access.
///
/// Besides the deque operations at both ends, elements can be read or removed by position.
/// Positional access walks from whichever end is closer, so it costs at most `size / 2` hops.
pub struct DoubleLinkedList<T> {
    size: usize,
    head: Link<T>,
    tail: Link<T>,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list uniquely owns its nodes, the raw pointers are never shared with anything else.
unsafe impl<T: Send> Send for DoubleLinkedList<T> {}
// SAFETY: `&DoubleLinkedList<T>` only ever hands out `&T`.
unsafe impl<T: Sync> Sync for DoubleLinkedList<T> {}

impl<T> DoubleLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            size: 0,
            head: None,
            tail: None,
            _owns: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: self.head, prev: None })));
        trace!("Linking node {node:?} at the front of a list of size {}", self.size);
        match self.head {
            // SAFETY: `head` is live and owned by this list, and we hold `&mut self`.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.size += 1;
    }

    pub fn enqueue_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None, prev: self.tail })));
        trace!("Linking node {node:?} at the back of a list of size {}", self.size);
        match self.tail {
            // SAFETY: `tail` is live and owned by this list, and we hold `&mut self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Appends to the back of the list.
    pub fn add(&mut self, value: T) {
        self.enqueue_back(value)
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::Empty)?;
        // SAFETY: `head` is a node of this list
        Ok(unsafe { self.unlink(head) })
    }

    pub fn dequeue_front(&mut self) -> Result<T, ContainerError> {
        self.pop_front()
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::Empty)?;
        // SAFETY: `tail` is a node of this list
        Ok(unsafe { self.unlink(tail) })
    }

    pub fn peek_front(&self) -> Result<&T, ContainerError> {
        // SAFETY: `head` is live for as long as `self` is borrowed.
        self.head
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or(ContainerError::Empty)
    }

    pub fn peek_back(&self) -> Result<&T, ContainerError> {
        // SAFETY: `tail` is live for as long as `self` is borrowed.
        self.tail
            .map(|tail| unsafe { &(*tail.as_ptr()).value })
            .ok_or(ContainerError::Empty)
    }

    /// The element at `index`, counting from the front.
    pub fn get_at(&self, index: usize) -> Result<&T, ContainerError> {
        let node = self.node_at(index)?;
        // SAFETY: `node` belongs to this list, which is borrowed for the returned lifetime.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Removes the element at `index`, counting from the front.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ContainerError> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns nodes of this list
        Ok(unsafe { self.unlink(node) })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.size,
            _marker: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, ContainerError> {
        if index >= self.size {
            debug!("Rejecting access to index {index} of a list of size {}", self.size);
            return Err(ContainerError::IndexOutOfRange { index, size: self.size })
        }

        // SAFETY (both walks): `index < size`, so every hop lands on a live node of this list.
        let node = if index < self.size / 2 {
            let mut curr = self.head;
            for _ in 0..index {
                curr = curr.and_then(|node| unsafe { (*node.as_ptr()).next });
            }
            curr
        } else {
            let mut curr = self.tail;
            for _ in index + 1..self.size {
                curr = curr.and_then(|node| unsafe { (*node.as_ptr()).prev });
            }
            curr
        };

        // only reachable if the links disagree with `size`
        node.ok_or(ContainerError::IndexOutOfRange { index, size: self.size })
    }

    /// Detaches `node` from its neighbours and frees it.
    ///
    /// SAFETY: `node` must be a node currently linked into `self`.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        trace!("Releasing node {node:?} from a list of size {}", self.size);
        // SAFETY: guaranteed by caller. Nodes are only ever made by `Box::leak` in the push methods.
        let Node { value, next, prev } = *unsafe { Box::from_raw(node.as_ptr()) };
        match prev {
            // SAFETY: neighbours of a linked node are live nodes of the same list.
            Some(prev) => unsafe { (*prev.as_ptr()).next = next },
            None => self.head = next,
        }
        match next {
            // SAFETY: see above
            Some(next) => unsafe { (*next.as_ptr()).prev = prev },
            None => self.tail = prev,
        }
        self.size -= 1;
        value
    }
}

impl<T: PartialEq> DoubleLinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "There are: {} elements in this list\n\n", self.size)?;
        if self.is_empty() {
            return f.write_str(EMPTY_PLACEHOLDER);
        }
        for value in self {
            writeln!(f, "{value}----------")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for DoubleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        // SAFETY: the list is borrowed for `'a`, and `remaining > 0` means `front` hasn't crossed `back`.
        let node = unsafe { &*self.front?.as_ptr() };
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        // SAFETY: same as `next`
        let node = unsafe { &*self.back?.as_ptr() };
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoubleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
