//! Tagged animal records, the usual payload of the linked containers.
//!
//! An [`Animal`] is a name plus a [`Species`], and is identified by its [`Tag`] alone: renaming
//! an animal or changing its ratings doesn't make it a different animal, and two animals with the
//! same name and ratings are still different animals. Animals are built by an [`AnimalFactory`],
//! which owns the [`TagSequence`] the tags come from.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

mod capability;
mod factory;
mod tag;

pub use capability::{PounceError, Predator, Prey};
pub use factory::AnimalFactory;
pub use tag::{Tag, TagSequence};

/// Shown instead of an empty name.
const NO_NAME: &str = "No Name Set";

/// A skill score between 0 and 10 (inclusive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(10);

    pub fn new(value: i64) -> Result<Self, AnimalError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(AnimalError::InvalidRating(value)),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = AnimalError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cat {
    pub evasion: Rating,
    pub pounce: Rating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mouse {
    pub evasion: Rating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dog {
    pub pounce: Rating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Cat(Cat),
    Mouse(Mouse),
    Dog(Dog),
}

impl Species {
    /// The name used for this species in records, e.g. `"Cat"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cat(_) => "Cat",
            Self::Mouse(_) => "Mouse",
            Self::Dog(_) => "Dog",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Animal {
    tag: Tag,
    name: String,
    species: Species,
}

impl Animal {
    pub(crate) fn new(tag: Tag, name: String, species: Species) -> Self {
        Self { tag, name, species }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn name(&self) -> &str {
        if self.name.is_empty() { NO_NAME } else { &self.name }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn species_mut(&mut self) -> &mut Species {
        &mut self.species
    }

    /// Alphabetical order by (displayed) name.
    pub fn cmp_by_name(&self, other: &Animal) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialEq for Animal {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Animal {}

impl Hash for Animal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.species.kind().to_lowercase();
        writeln!(f, "This {kind} is named {} and it has these values:", self.name())?;
        match self.species {
            Species::Cat(Cat { evasion, pounce }) => {
                writeln!(f, "\tEvasion: {evasion}")?;
                writeln!(f, "\tPounce: {pounce}")?;
            }
            Species::Mouse(Mouse { evasion }) => writeln!(f, "\tEvasion: {evasion}")?,
            Species::Dog(Dog { pounce }) => writeln!(f, "\tPounce: {pounce}")?,
        }
        writeln!(f, "\tTag Number: {}", self.tag)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimalError {
    /// A rating outside of `0..=10`.
    InvalidRating(i64),
    /// A record whose first field isn't a known species.
    UnknownSpecies(String),
    /// A record that ran out of fields before `field`.
    MissingField { record: String, field: &'static str },
    /// A rating field that isn't an integer.
    BadNumber(String),
    /// The tag sequence has handed out every tag it has.
    TagsExhausted,
}

impl fmt::Display for AnimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRating(value) => write!(f, "invalid rating {value} (expected 0 to {})", Rating::MAX),
            Self::UnknownSpecies(kind) => write!(f, "unknown species {kind:?}"),
            Self::MissingField { record, field } => write!(f, "record {record:?} has no {field}"),
            Self::BadNumber(text) => write!(f, "{text:?} is not a number"),
            Self::TagsExhausted => f.write_str("no tags left to hand out"),
        }
    }
}

impl std::error::Error for AnimalError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::new(0).map(Rating::get), Ok(0));
        assert_eq!(Rating::new(10).map(Rating::get), Ok(10));
        assert_eq!(Rating::new(11), Err(AnimalError::InvalidRating(11)));
        assert_eq!(Rating::try_from(-1), Err(AnimalError::InvalidRating(-1)));
        assert_eq!(Rating::new(300), Err(AnimalError::InvalidRating(300)));
    }

    #[test]
    fn equality_is_by_tag() {
        let mut tags = TagSequence::new();
        let tom = Animal::new(tags.next_tag().unwrap(), "Tom".into(), Species::Mouse(Mouse { evasion: r(3) }));
        let twin = Animal::new(tags.next_tag().unwrap(), "Tom".into(), Species::Mouse(Mouse { evasion: r(3) }));
        assert_ne!(tom, twin);

        let mut renamed = tom.clone();
        renamed.set_name("Thomas");
        *renamed.species_mut() = Species::Dog(Dog { pounce: r(9) });
        assert_eq!(tom, renamed);
    }

    #[test]
    fn display_matches_species() {
        let mut tags = TagSequence::starting_at(5);
        let cat = Animal::new(tags.next_tag().unwrap(), "Tom".into(), Species::Cat(Cat { evasion: r(7), pounce: r(3) }));
        assert_eq!(
            cat.to_string(),
            "This cat is named Tom and it has these values:\n\tEvasion: 7\n\tPounce: 3\n\tTag Number: 5\n"
        );
        let dog = Animal::new(tags.next_tag().unwrap(), String::new(), Species::Dog(Dog { pounce: r(10) }));
        assert_eq!(
            dog.to_string(),
            "This dog is named No Name Set and it has these values:\n\tPounce: 10\n\tTag Number: 6\n"
        );
    }

    #[test]
    fn sorting_by_name() {
        let mut tags = TagSequence::new();
        let mut animals: Vec<_> = ["Jerry", "Arlene", "Tom"]
            .into_iter()
            .map(|name| Animal::new(tags.next_tag().unwrap(), name.into(), Species::Mouse(Mouse { evasion: r(1) })))
            .collect();
        animals.sort_by(Animal::cmp_by_name);
        let names: Vec<_> = animals.iter().map(Animal::name).collect();
        assert_eq!(names, ["Arlene", "Jerry", "Tom"]);
    }
}
