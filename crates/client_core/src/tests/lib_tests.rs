use super::*;

fn zero_latency() -> InMemoryCatalogAccess {
    InMemoryCatalogAccess::new(Arc::new(Catalog::seeded()), LatencyProfile::ZERO)
}

#[tokio::test]
async fn get_all_returns_full_catalog_in_order() {
    let access = zero_latency();
    let objects = access.get_all().await.expect("get_all");
    let ids: Vec<i64> = objects.iter().map(|object| object.id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn get_all_is_idempotent() {
    let access = zero_latency();
    let first = access.get_all().await.expect("first");
    let second = access.get_all().await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn get_all_suspends_for_the_list_latency() {
    let access = InMemoryCatalogAccess::seeded();
    let started = tokio::time::Instant::now();
    access.get_all().await.expect("get_all");
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn get_by_id_suspends_for_the_lookup_latency() {
    let access = InMemoryCatalogAccess::seeded();
    let started = tokio::time::Instant::now();
    access.get_by_id(ObjectId(5)).await.expect("get_by_id");
    assert_eq!(started.elapsed(), Duration::from_millis(800));
}

#[tokio::test]
async fn get_by_id_round_trips_and_misses() {
    let access = zero_latency();
    let sirius = access
        .get_by_id(ObjectId(5))
        .await
        .expect("get_by_id")
        .expect("sirius present");
    assert_eq!(sirius.name, "Sirius");
    assert_eq!(sirius.id, ObjectId(5));

    let missing = access.get_by_id(ObjectId(9999)).await.expect("get_by_id");
    assert!(missing.is_none());
}

#[tokio::test]
async fn get_by_category_filters_in_original_order() {
    let access = zero_latency();
    let planets = access
        .get_by_category(Category::Planet)
        .await
        .expect("get_by_category");
    let names: Vec<&str> = planets.iter().map(|object| object.name.as_str()).collect();
    assert_eq!(names, ["Mars", "Jupiter"]);
}

#[tokio::test(start_paused = true)]
async fn observe_all_emits_empty_then_full_then_ends() {
    let access = InMemoryCatalogAccess::seeded();
    let mut snapshots = access.observe_all();

    let first = snapshots.next().await.expect("first snapshot");
    assert!(first.is_empty());

    let started = tokio::time::Instant::now();
    let second = snapshots.next().await.expect("second snapshot");
    assert_eq!(second.len(), 10);
    assert_eq!(started.elapsed(), Duration::from_millis(1500));

    assert!(snapshots.next().await.is_none());
}

#[test]
fn latency_profile_scales_and_zeroes() {
    let scaled = LatencyProfile::default().scaled(0.5);
    assert_eq!(scaled.list, Duration::from_millis(750));
    assert_eq!(scaled.lookup, Duration::from_millis(400));
    assert_eq!(scaled.filtered, Duration::from_millis(500));
    assert_eq!(LatencyProfile::ZERO.list, Duration::ZERO);
}
