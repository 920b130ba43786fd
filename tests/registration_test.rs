//! Integration tests for patient registration, including the concurrent
//! allocation race

mod common;

use chrono::NaiveDate;
use common::MemoryStore;
use fake::faker::address::en::CityName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use intake::adapters::database::IntakeStore;
use intake::core::allocation::PatientIdentifierAllocator;
use intake::core::registration::Registrar;
use intake::domain::locations::LocationPrefixMap;
use intake::domain::patient::{Gender, NewPatient};
use std::collections::HashSet;
use std::sync::Arc;

fn locations() -> LocationPrefixMap {
    LocationPrefixMap::new(vec![("Superhero".to_string(), "HERO".to_string())]).unwrap()
}

fn random_request(location: &str) -> NewPatient {
    let last_name: String = LastName().fake();
    let first_name: String = FirstName().fake();
    let city: String = CityName().fake();

    NewPatient::builder()
        .last_name(last_name)
        .first_name(first_name)
        .date_of_birth(NaiveDate::from_ymd_opt(1990, 3, 14).unwrap())
        .gender(Gender::Female)
        .address_city(city)
        .location(location)
        .build()
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_yield_distinct_identifiers() {
    const CONCURRENT: usize = 8;

    let store = Arc::new(MemoryStore::new());
    let allocator = PatientIdentifierAllocator::new(store.clone(), locations());
    // Retry bound must absorb worst-case contention: each task can lose the
    // race to every other task at most once.
    let registrar = Arc::new(Registrar::new(allocator, store.clone(), 16, false));

    let mut handles = Vec::new();
    for _ in 0..CONCURRENT {
        let registrar = registrar.clone();
        handles.push(tokio::spawn(async move {
            registrar.register(random_request("Superhero")).await
        }));
    }

    let mut allocated = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("registration must succeed");
        allocated.insert(id.as_str().to_string());
    }

    // K simultaneous registrations produce K distinct identifiers.
    assert_eq!(allocated.len(), CONCURRENT);
    assert_eq!(store.patient_count().await, CONCURRENT);

    // And the namespace stays dense: every suffix 1..=K issued exactly once.
    let expected: HashSet<String> = (1..=CONCURRENT).map(|n| format!("HERO{n:03}")).collect();
    assert_eq!(allocated, expected);
}

#[tokio::test]
async fn registered_row_carries_demographics_unprocessed() {
    let store = Arc::new(MemoryStore::new());
    let allocator = PatientIdentifierAllocator::new(store.clone(), locations());
    let registrar = Registrar::new(allocator, store.clone(), 5, false);

    let request = random_request("Superhero");
    let expected_last_name = request.last_name.clone();

    let id = registrar.register(request).await.unwrap();
    assert_eq!(id.as_str(), "HERO001");

    let patients = store.list_patients().await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].last_name, expected_last_name);
    assert_eq!(patients[0].gender, Gender::Female);
    assert!(!patients[0].processed);
}

#[tokio::test]
async fn dry_run_allocates_but_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let allocator = PatientIdentifierAllocator::new(store.clone(), locations());
    let registrar = Registrar::new(allocator, store.clone(), 5, true);

    let id = registrar.register(random_request("Superhero")).await.unwrap();
    assert_eq!(id.as_str(), "HERO001");
    assert_eq!(store.patient_count().await, 0);
}
