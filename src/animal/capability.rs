use std::fmt;

use super::{Animal, Cat, Dog, Mouse, Rating, Species, Tag};

/// Something that can be pounced on.
pub trait Prey {
    fn evasion(&self) -> Rating;
}

/// Something that pounces.
pub trait Predator {
    fn pounce_rating(&self) -> Rating;
}

impl Prey for Cat {
    fn evasion(&self) -> Rating {
        self.evasion
    }
}

impl Predator for Cat {
    fn pounce_rating(&self) -> Rating {
        self.pounce
    }
}

impl Prey for Mouse {
    fn evasion(&self) -> Rating {
        self.evasion
    }
}

impl Predator for Dog {
    fn pounce_rating(&self) -> Rating {
        self.pounce
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PounceError {
    NotAPredator(Tag),
    NotPrey(Tag),
    /// A predator tried to pounce on itself.
    StopHittingYourself(Tag),
    /// A predator tried to be its own partner.
    DoubleTeam(Tag),
    /// A cat tried to pounce on another cat.
    Cannibalism(Tag),
}

impl fmt::Display for PounceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAPredator(tag) => write!(f, "animal {tag} is not a predator"),
            Self::NotPrey(tag) => write!(f, "animal {tag} is not prey"),
            Self::StopHittingYourself(tag) => write!(f, "predator {tag} attempted to pounce on itself"),
            Self::DoubleTeam(tag) => write!(f, "predator {tag} attempted to be its own partner"),
            Self::Cannibalism(tag) => write!(f, "cat {tag} attempted to pounce on another cat"),
        }
    }
}

impl std::error::Error for PounceError {}

impl Animal {
    pub fn as_prey(&self) -> Option<&dyn Prey> {
        match &self.species {
            Species::Cat(cat) => Some(cat as &dyn Prey),
            Species::Mouse(mouse) => Some(mouse),
            Species::Dog(_) => None,
        }
    }

    pub fn as_predator(&self) -> Option<&dyn Predator> {
        match &self.species {
            Species::Cat(cat) => Some(cat as &dyn Predator),
            Species::Dog(dog) => Some(dog),
            Species::Mouse(_) => None,
        }
    }

    fn predator(&self) -> Result<&dyn Predator, PounceError> {
        self.as_predator().ok_or(PounceError::NotAPredator(self.tag))
    }

    fn prey(&self) -> Result<&dyn Prey, PounceError> {
        self.as_prey().ok_or(PounceError::NotPrey(self.tag))
    }

    fn is_cat(&self) -> bool {
        matches!(self.species, Species::Cat(_))
    }

    /// Whether `self` catches `target` on its own: the pounce has to beat the evasion.
    ///
    /// Cats never pounce on cats.
    pub fn pounce(&self, target: &Animal) -> Result<bool, PounceError> {
        let predator = self.predator()?;
        if self == target {
            return Err(PounceError::StopHittingYourself(self.tag))
        }
        let prey = target.prey()?;
        if self.is_cat() && target.is_cat() {
            return Err(PounceError::Cannibalism(self.tag))
        }
        Ok(prey.evasion() < predator.pounce_rating())
    }

    /// Whether `self` and `partner` catch `target` together: their combined pounce has to beat
    /// the evasion. Neither of them may be a cat going after a cat.
    pub fn pounce_with_partner(&self, target: &Animal, partner: &Animal) -> Result<bool, PounceError> {
        let predator = self.predator()?;
        if self == partner {
            return Err(PounceError::DoubleTeam(self.tag))
        }
        if self == target {
            return Err(PounceError::StopHittingYourself(self.tag))
        }
        let partner_predator = partner.predator()?;
        if partner == target {
            return Err(PounceError::StopHittingYourself(partner.tag))
        }
        let prey = target.prey()?;
        if target.is_cat() {
            if let Some(cat) = [self, partner].into_iter().find(|a| a.is_cat()) {
                return Err(PounceError::Cannibalism(cat.tag))
            }
        }

        let combined = u16::from(predator.pounce_rating().get()) + u16::from(partner_predator.pounce_rating().get());
        Ok(u16::from(prey.evasion().get()) < combined)
    }
}

#[cfg(test)]
mod tests {
    use crate::animal::{AnimalFactory, Rating};

    use super::*;

    fn r(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn capabilities_follow_species() {
        let mut factory = AnimalFactory::new();
        let cat = factory.cat("Tom", r(7), r(3)).unwrap();
        let mouse = factory.mouse("Jerry", r(8)).unwrap();
        let dog = factory.dog("Spike", r(9)).unwrap();

        assert!(cat.as_prey().is_some() && cat.as_predator().is_some());
        assert!(mouse.as_prey().is_some() && mouse.as_predator().is_none());
        assert!(dog.as_prey().is_none() && dog.as_predator().is_some());
        assert_eq!(cat.as_prey().map(|p| p.evasion()), Some(r(7)));
        assert_eq!(dog.as_predator().map(|p| p.pounce_rating()), Some(r(9)));
    }

    #[test]
    fn solo_pounce() {
        let mut factory = AnimalFactory::new();
        let tom = factory.cat("Tom", r(7), r(3)).unwrap();
        let jerry = factory.mouse("Jerry", r(8)).unwrap();
        let spike = factory.dog("Spike", r(9)).unwrap();

        assert_eq!(tom.pounce(&jerry), Ok(false));
        assert_eq!(spike.pounce(&jerry), Ok(true));
        assert_eq!(spike.pounce(&tom), Ok(true));
        // equal ratings favour the prey
        let even = factory.dog("Even", r(8)).unwrap();
        assert_eq!(even.pounce(&jerry), Ok(false));
    }

    #[test]
    fn solo_pounce_errors() {
        let mut factory = AnimalFactory::new();
        let tom = factory.cat("Tom", r(7), r(3)).unwrap();
        let jerry = factory.mouse("Jerry", r(8)).unwrap();
        let spike = factory.dog("Spike", r(9)).unwrap();

        assert_eq!(jerry.pounce(&tom), Err(PounceError::NotAPredator(jerry.tag())));
        assert_eq!(tom.pounce(&spike), Err(PounceError::NotPrey(spike.tag())));
        assert_eq!(tom.pounce(&tom.clone()), Err(PounceError::StopHittingYourself(tom.tag())));

        let gumball = factory.cat("Gumball", r(4), r(6)).unwrap();
        assert_eq!(tom.pounce(&gumball), Err(PounceError::Cannibalism(tom.tag())));
        assert_eq!(gumball.pounce(&tom), Err(PounceError::Cannibalism(gumball.tag())));
        // dogs may still go after cats
        assert_eq!(spike.pounce(&gumball), Ok(true));
    }

    #[test]
    fn team_pounce() {
        let mut factory = AnimalFactory::new();
        let tom = factory.cat("Tom", r(7), r(3)).unwrap();
        let jerry = factory.mouse("Jerry", r(8)).unwrap();
        let spike = factory.dog("Spike", r(5)).unwrap();
        let pup = factory.dog("Tyke", r(4)).unwrap();

        assert_eq!(tom.pounce_with_partner(&jerry, &spike), Ok(false));
        assert_eq!(spike.pounce_with_partner(&jerry, &pup), Ok(true));
        assert_eq!(pup.pounce_with_partner(&tom, &spike), Ok(true));
    }

    #[test]
    fn team_pounce_errors() {
        let mut factory = AnimalFactory::new();
        let tom = factory.cat("Tom", r(7), r(3)).unwrap();
        let jerry = factory.mouse("Jerry", r(8)).unwrap();
        let spike = factory.dog("Spike", r(5)).unwrap();

        assert_eq!(spike.pounce_with_partner(&jerry, &spike), Err(PounceError::DoubleTeam(spike.tag())));
        assert_eq!(spike.pounce_with_partner(&spike, &tom), Err(PounceError::StopHittingYourself(spike.tag())));
        assert_eq!(spike.pounce_with_partner(&tom, &tom), Err(PounceError::StopHittingYourself(tom.tag())));
        assert_eq!(spike.pounce_with_partner(&tom, &jerry), Err(PounceError::NotAPredator(jerry.tag())));

        let gumball = factory.cat("Gumball", r(4), r(6)).unwrap();
        assert_eq!(tom.pounce_with_partner(&gumball, &spike), Err(PounceError::Cannibalism(tom.tag())));
        assert_eq!(spike.pounce_with_partner(&gumball, &tom), Err(PounceError::Cannibalism(tom.tag())));
        assert_eq!(
            PounceError::Cannibalism(tom.tag()).to_string(),
            format!("cat {} attempted to pounce on another cat", tom.tag())
        );
        assert_eq!(
            PounceError::DoubleTeam(spike.tag()).to_string(),
            format!("predator {} attempted to be its own partner", spike.tag())
        );
    }
}
