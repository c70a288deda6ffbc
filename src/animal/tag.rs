use std::fmt;

/// Identity of an [`Animal`](super::Animal). Two animals are the same animal iff their tags match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u64);

impl Tag {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hands out strictly increasing tags.
///
/// There is no way to rewind a sequence, and it deliberately isn't `Clone`: two copies of the same
/// sequence would hand out the same tags twice. Make one per process and give it to whoever builds
/// animals (normally an [`AnimalFactory`](super::AnimalFactory)).
#[derive(Debug)]
pub struct TagSequence {
    // NOTE: `None` once `u64::MAX` has been handed out
    next: Option<u64>,
}

impl TagSequence {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// The tag the next call to [`next_tag`](TagSequence::next_tag) will return, if any.
    pub const fn peek(&self) -> Option<Tag> {
        match self.next {
            Some(next) => Some(Tag(next)),
            None => None,
        }
    }

    /// Hands out the next tag, or `None` once every tag has been used.
    pub fn next_tag(&mut self) -> Option<Tag> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(Tag(current))
    }
}

impl Default for TagSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn tags_are_unique_and_ordered() {
    let mut tags = TagSequence::starting_at(40);
    assert_eq!(tags.peek(), Some(Tag(40)));
    let a = tags.next_tag().unwrap();
    let b = tags.next_tag().unwrap();
    assert!(a < b);
    assert_eq!(b.get(), 41);
    assert_eq!(tags.peek().map(|t| t.to_string()).as_deref(), Some("42"));
}

#[test]
fn sequence_runs_out_instead_of_wrapping() {
    let mut tags = TagSequence::starting_at(u64::MAX - 1);
    assert_eq!(tags.next_tag(), Some(Tag(u64::MAX - 1)));
    assert_eq!(tags.next_tag(), Some(Tag(u64::MAX)));
    assert_eq!(tags.peek(), None);
    assert_eq!(tags.next_tag(), None);
    assert_eq!(tags.next_tag(), None);
}
