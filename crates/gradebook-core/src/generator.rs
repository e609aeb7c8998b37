//! Random test data: participant identities and grades.
//!
//! The random source is injectable so scenario runs can be reproduced from a
//! seed.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Gender, Person};

pub const NAMES: &[&str] = &[
    "Alexander", "Veronika", "Ivan", "Anzhelika", "Nikolai", "Klubnika", "Evgeny", "Evelina",
    "Pyotr", "Lika", "Viktor", "Vika",
];

pub const SURNAMES: &[&str] = &[
    "Ivanov", "Nikolaev", "Alexandrov", "Loginov", "Parolev", "Vebov", "Pitonov", "Stilev",
    "Skriptov", "Variablov",
];

/// Lowest and highest grade a rater can give.
pub const GRADE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Produces random people and grades.
pub struct PersonGenerator<R = StdRng> {
    rng: R,
}

impl PersonGenerator<StdRng> {
    /// Deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PersonGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A random identity from the name pools.
    pub fn next_person(&mut self) -> Person {
        let name = NAMES.choose(&mut self.rng).copied().unwrap_or(NAMES[0]);
        let surname = SURNAMES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(SURNAMES[0]);
        identity(name, surname)
    }

    /// A random grade in [`GRADE_RANGE`].
    pub fn grade(&mut self) -> u8 {
        self.rng.random_range(GRADE_RANGE)
    }
}

/// Build a person, inferring gender from the first name.
///
/// Names ending in `a` are treated as female and get a feminine surname.
pub fn identity(name: &str, surname: &str) -> Person {
    let gender = if name.ends_with('a') {
        Gender::Female
    } else {
        Gender::Male
    };
    let surname = match gender {
        Gender::Female => format!("{surname}a"),
        Gender::Male => surname.to_string(),
    };
    Person::new(name, surname, Some(gender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn female_names_get_feminine_surnames() {
        let p = identity("Veronika", "Ivanov");
        assert_eq!(p.gender, Some(Gender::Female));
        assert_eq!(p.surname, "Ivanova");

        let p = identity("Ivan", "Ivanov");
        assert_eq!(p.gender, Some(Gender::Male));
        assert_eq!(p.surname, "Ivanov");
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let mut a = PersonGenerator::seeded(42);
        let mut b = PersonGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_person(), b.next_person());
            assert_eq!(a.grade(), b.grade());
        }
    }

    #[test]
    fn generated_people_come_from_the_pools() {
        let mut generator = PersonGenerator::seeded(7);
        for _ in 0..50 {
            let p = generator.next_person();
            assert!(NAMES.contains(&p.name.as_str()));
            let base = match p.gender {
                Some(Gender::Female) => p.surname.strip_suffix('a').unwrap_or(&p.surname),
                _ => p.surname.as_str(),
            };
            assert!(SURNAMES.contains(&base), "unexpected surname {}", p.surname);
        }
    }

    #[test]
    fn grades_stay_in_range() {
        let mut generator = PersonGenerator::seeded(3);
        for _ in 0..200 {
            assert!(GRADE_RANGE.contains(&generator.grade()));
        }
    }
}
