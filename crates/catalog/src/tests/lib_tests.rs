use super::*;

fn minimal(id: i64, name: &str, category: Category) -> CelestialObject {
    record(
        id,
        name,
        category,
        "desc",
        "1 km",
        2000,
        "asset",
        ["a", "b", "c"],
    )
}

#[test]
fn seed_data_passes_validation() {
    Catalog::new(seed_records()).expect("seed records");
}

#[test]
fn seeded_catalog_holds_ten_records_in_insertion_order() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.len(), 10);
    let ids: Vec<i64> = catalog.all().iter().map(|record| record.id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}

#[test]
fn all_is_idempotent() {
    let catalog = Catalog::seeded();
    let first = catalog.all().to_vec();
    let second = catalog.all().to_vec();
    assert_eq!(first, second);
}

#[test]
fn by_id_round_trips_every_seeded_id() {
    let catalog = Catalog::seeded();
    for record in catalog.all() {
        let found = catalog.by_id(record.id).expect("seeded id");
        assert_eq!(found.id, record.id);
    }
}

#[test]
fn by_id_absent_yields_none() {
    let catalog = Catalog::seeded();
    assert!(catalog.by_id(ObjectId(9999)).is_none());
    assert!(catalog.by_id(ObjectId(0)).is_none());
}

#[test]
fn by_category_returns_planets_in_original_order() {
    let catalog = Catalog::seeded();
    let planets = catalog.by_category(Category::Planet);
    let names: Vec<&str> = planets.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, ["Mars", "Jupiter"]);
    assert!(planets
        .iter()
        .all(|record| record.category == Category::Planet));
}

#[test]
fn by_category_preserves_relative_order() {
    let catalog = Catalog::seeded();
    let moons = catalog.by_category(Category::Moon);
    let ids: Vec<i64> = moons.iter().map(|record| record.id.0).collect();
    assert_eq!(ids, [4, 7]);
}

#[test]
fn by_category_is_empty_for_unrepresented_category() {
    let catalog =
        Catalog::new(vec![minimal(1, "Mars", Category::Planet)]).expect("single record");
    assert!(catalog.by_category(Category::Nebula).is_empty());
}

#[test]
fn facts_ordering_survives_reads() {
    let catalog = Catalog::seeded();
    let mars = catalog.by_id(ObjectId(1)).expect("mars");
    assert_eq!(mars.facts[0], "Mars has two moons: Phobos and Deimos");
    assert_eq!(mars.facts[2], "Mars has the largest volcano in the solar system");
}

#[test]
fn new_rejects_duplicate_ids() {
    let records = vec![
        minimal(1, "Mars", Category::Planet),
        minimal(1, "Jupiter", Category::Planet),
    ];
    let err = Catalog::new(records).expect_err("duplicate id");
    assert!(err.to_string().contains("duplicate catalog id 1"));
}

#[test]
fn new_rejects_non_positive_ids() {
    let err = Catalog::new(vec![minimal(0, "Nowhere", Category::Star)])
        .expect_err("non-positive id");
    assert!(err.to_string().contains("must be positive"));
}
