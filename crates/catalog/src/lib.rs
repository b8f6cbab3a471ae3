use std::collections::HashSet;

use anyhow::{bail, Result};
use shared::domain::{Category, CelestialObject, ImageRef, ObjectId};

/// Read-only store of celestial records. Constructed once, injected into the
/// access layer, and never mutated afterwards; shared freely without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CelestialObject>,
}

impl Catalog {
    /// Builds a catalog from explicit records. Ids must be positive and
    /// unique across the whole set.
    pub fn new(records: Vec<CelestialObject>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.id.0 <= 0 {
                bail!(
                    "catalog ids must be positive, got {} for {:?}",
                    record.id.0,
                    record.name
                );
            }
            if !seen.insert(record.id) {
                bail!("duplicate catalog id {} ({:?})", record.id.0, record.name);
            }
        }
        Ok(Self { records })
    }

    /// The fixed data set the application ships with. Well-formedness of the
    /// seed is covered by tests, so construction skips revalidation.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Full record sequence in original insertion order.
    pub fn all(&self) -> &[CelestialObject] {
        &self.records
    }

    pub fn by_id(&self, id: ObjectId) -> Option<&CelestialObject> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Ordered subsequence with the given category; empty when none match.
    pub fn by_category(&self, category: Category) -> Vec<CelestialObject> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record(
    id: i64,
    name: &str,
    category: Category,
    description: &str,
    distance_from_earth: &str,
    discovery_year: i32,
    image_key: &str,
    facts: [&str; 3],
) -> CelestialObject {
    CelestialObject {
        id: ObjectId(id),
        name: name.to_string(),
        category,
        description: description.to_string(),
        distance_from_earth: distance_from_earth.to_string(),
        discovery_year,
        image_ref: ImageRef::new(image_key),
        facts: facts.iter().map(|fact| fact.to_string()).collect(),
    }
}

fn seed_records() -> Vec<CelestialObject> {
    vec![
        record(
            1,
            "Mars",
            Category::Planet,
            "The Red Planet, fourth from the Sun",
            "225 million km",
            1610,
            "mars",
            [
                "Mars has two moons: Phobos and Deimos",
                "A day on Mars is 24.6 hours",
                "Mars has the largest volcano in the solar system",
            ],
        ),
        record(
            2,
            "Jupiter",
            Category::Planet,
            "The largest planet in our solar system",
            "778 million km",
            1610,
            "jupiter",
            [
                "Jupiter has 95 known moons",
                "The Great Red Spot is a giant storm",
                "Jupiter is mostly made of hydrogen and helium",
            ],
        ),
        record(
            3,
            "Andromeda Galaxy",
            Category::Galaxy,
            "The nearest major galaxy to the Milky Way",
            "2.537 million light years",
            964,
            "andro",
            [
                "Contains about 1 trillion stars",
                "Will collide with Milky Way in 4.5 billion years",
                "Visible to naked eye from Earth",
            ],
        ),
        record(
            4,
            "Europa",
            Category::Moon,
            "Jupiter's icy moon with subsurface ocean",
            "628 million km",
            1610,
            "europa",
            [
                "Has more water than Earth",
                "Surface is mostly water ice",
                "Potential for extraterrestrial life",
            ],
        ),
        record(
            5,
            "Sirius",
            Category::Star,
            "The brightest star in Earth's night sky",
            "8.6 light years",
            -10000,
            "sirius",
            [
                "Actually a binary star system",
                "25 times more luminous than the Sun",
                "Known as the 'Dog Star'",
            ],
        ),
        record(
            6,
            "Orion Nebula",
            Category::Nebula,
            "A stellar nursery where new stars are born",
            "1,344 light years",
            1610,
            "orion",
            [
                "Visible to naked eye",
                "Contains about 700 stars",
                "One of the most photographed objects",
            ],
        ),
        record(
            7,
            "Titan",
            Category::Moon,
            "Largest moon of Saturn, with a thick atmosphere",
            "1.2 billion km",
            1655,
            "titan",
            [
                "Has lakes of liquid methane and ethane",
                "Atmosphere is denser than Earth's",
                "Surface may support microbial life",
            ],
        ),
        record(
            8,
            "Betelgeuse",
            Category::Star,
            "A red supergiant in the Orion constellation",
            "642 light years",
            -1000,
            "bet",
            [
                "Expected to explode as a supernova",
                "One of the largest visible stars",
                "Its brightness varies over time",
            ],
        ),
        record(
            9,
            "Milky Way",
            Category::Galaxy,
            "Our home galaxy, a barred spiral",
            "0 light years",
            -1000,
            "milky",
            [
                "Contains over 100 billion stars",
                "Solar System is located in Orion Arm",
                "Center hosts a supermassive black hole",
            ],
        ),
        record(
            10,
            "Crab Nebula",
            Category::Nebula,
            "Remnant of a supernova observed in 1054",
            "6,500 light years",
            1731,
            "crab",
            [
                "Contains a rapidly spinning neutron star",
                "Expanding at 1,500 km/s",
                "Visible in multiple wavelengths",
            ],
        ),
    ]
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
