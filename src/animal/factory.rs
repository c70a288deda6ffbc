use log::warn;

use super::{Animal, AnimalError, Cat, Dog, Mouse, Rating, Species, TagSequence};

/// Builds animals, giving each one a fresh tag.
///
/// Records are one animal per line, comma separated:
///
/// ```text
/// Cat,Tom,7,3      <- name, evasion, pounce
/// Mouse,Jerry,8    <- name, evasion
/// Dog,Spike,9      <- name, pounce
/// ```
#[derive(Debug, Default)]
pub struct AnimalFactory {
    tags: TagSequence,
}

impl AnimalFactory {
    pub const fn new() -> Self {
        Self::with_sequence(TagSequence::new())
    }

    pub const fn with_sequence(tags: TagSequence) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &TagSequence {
        &self.tags
    }

    /// Fails only once the tag sequence has run out.
    pub fn build(&mut self, name: impl Into<String>, species: Species) -> Result<Animal, AnimalError> {
        let tag = self.tags.next_tag().ok_or(AnimalError::TagsExhausted)?;
        Ok(Animal::new(tag, name.into(), species))
    }

    pub fn cat(&mut self, name: impl Into<String>, evasion: Rating, pounce: Rating) -> Result<Animal, AnimalError> {
        self.build(name, Species::Cat(Cat { evasion, pounce }))
    }

    pub fn mouse(&mut self, name: impl Into<String>, evasion: Rating) -> Result<Animal, AnimalError> {
        self.build(name, Species::Mouse(Mouse { evasion }))
    }

    pub fn dog(&mut self, name: impl Into<String>, pounce: Rating) -> Result<Animal, AnimalError> {
        self.build(name, Species::Dog(Dog { pounce }))
    }

    /// Same name and species as `animal`, but a new tag, so it's a different animal.
    pub fn duplicate(&mut self, animal: &Animal) -> Result<Animal, AnimalError> {
        self.build(animal.name.clone(), animal.species)
    }

    /// Parses a single record.
    ///
    /// Nothing is built (and no tag is used up) unless the whole record is valid. Fields past the
    /// ones a species needs are ignored.
    pub fn parse_record(&mut self, record: &str) -> Result<Animal, AnimalError> {
        let mut fields = record.trim().split(',').map(str::trim);
        let kind = fields.next().unwrap_or_default();

        let (name, species) = match kind {
            "Cat" | "Mouse" | "Dog" => {
                let name = next_field(&mut fields, record, "name")?;
                let species = match kind {
                    "Cat" => Species::Cat(Cat {
                        evasion: next_rating(&mut fields, record, "evasion")?,
                        pounce: next_rating(&mut fields, record, "pounce")?,
                    }),
                    "Mouse" => Species::Mouse(Mouse { evasion: next_rating(&mut fields, record, "evasion")? }),
                    _ => Species::Dog(Dog { pounce: next_rating(&mut fields, record, "pounce")? }),
                };
                (name, species)
            }
            other => return Err(AnimalError::UnknownSpecies(other.to_owned())),
        };

        self.build(name, species)
    }

    /// Parses every non-blank line of `text`, in order.
    pub fn parse_records<'a>(&'a mut self, text: &'a str) -> impl Iterator<Item = Result<Animal, AnimalError>> + 'a {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(move |line| {
                self.parse_record(line)
                    .inspect_err(|e| warn!("Rejected record {line:?}: {e}"))
            })
    }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    record: &str,
    field: &'static str,
) -> Result<&'a str, AnimalError> {
    fields.next().ok_or_else(|| AnimalError::MissingField { record: record.trim().to_owned(), field })
}

fn next_rating<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    record: &str,
    field: &'static str,
) -> Result<Rating, AnimalError> {
    let text = next_field(fields, record, field)?;
    let value: i64 = text.parse().map_err(|_| AnimalError::BadNumber(text.to_owned()))?;
    Rating::new(value)
}
