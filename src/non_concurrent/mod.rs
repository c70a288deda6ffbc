//! Single-owner linked containers.
//!
//! Both containers keep the same bookkeeping: the container owns every node in its chain,
//! keeps a raw pointer to the last node, and a running size. Every partial operation returns
//! a [`ContainerError`] instead of panicking, and leaves the container untouched when it does.

use std::fmt;

mod deque;
mod double_linked_list;

pub use deque::{Deque, IntoIter as DequeIntoIter, Iter as DequeIter};
pub use double_linked_list::{DoubleLinkedList, Iter as ListIter};

/// Rendered in place of the elements when a container is empty.
pub(crate) const EMPTY_PLACEHOLDER: &str = "NOTHING!\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// Tried to read or remove from an empty container.
    Empty,
    /// Tried to access `index` in a container holding `size` elements.
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("the container is empty"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} is out of range for a container of size {size}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}
