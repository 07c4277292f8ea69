//! Repository Integration Tests
//!
//! Tests for the pantry, politician and candidate repositories against an
//! in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, LatLng, NewCandidate, NewPantry, NewPolitician, PantryType};
    use crate::repository::{
        apply_seed, init_db, CandidateRepository, PantryRepository, PoliticianRepository,
        Repository, SeedFile, SharedConnection,
    };
    use std::path::PathBuf;

    async fn setup_test_db() -> SharedConnection {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        db_state.connection()
    }

    fn pantry(name: &str) -> NewPantry {
        NewPantry {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            notes: String::new(),
            hours: "Mon-Fri 9-5".to_string(),
            kind: PantryType::Food,
            lat: 34.05,
            lng: -118.24,
        }
    }

    fn candidate(show_on_map: bool) -> NewCandidate {
        NewCandidate {
            name: "Jane Doe".to_string(),
            country: "USA".to_string(),
            state: "Ohio".to_string(),
            office: "House".to_string(),
            office_type: "House, School Board".to_string(),
            district: None,
            party: "Independent".to_string(),
            website: String::new(),
            phone: String::new(),
            show_on_map,
        }
    }

    #[tokio::test]
    async fn test_create_pantry() {
        let repo = PantryRepository::new(setup_test_db().await);

        let created = repo.create(&pantry("Test pantry")).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Test pantry");
        assert_eq!(created.hours, "Mon-Fri 9-5");
        assert!(!created.deleted);
    }

    #[tokio::test]
    async fn test_create_pantry_rejects_blank_name() {
        let repo = PantryRepository::new(setup_test_db().await);

        let err = repo.create(&pantry("   ")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_excludes_deleted_pantries() {
        let repo = PantryRepository::new(setup_test_db().await);

        let first = repo.create(&pantry("First")).await.unwrap();
        let second = repo.create(&pantry("Second")).await.unwrap();

        repo.soft_delete(first.id).await.expect("Delete failed");

        let listed = repo.list().await.expect("List failed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, second.id);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
        // Row is still stored
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_soft_delete_twice_is_not_found() {
        let repo = PantryRepository::new(setup_test_db().await);
        let created = repo.create(&pantry("Once")).await.unwrap();

        repo.soft_delete(created.id).await.unwrap();
        let err = repo.soft_delete(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = repo.soft_delete(9999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_politician_round_trip() {
        let repo = PoliticianRepository::new(setup_test_db().await);

        let created = repo
            .create(&NewPolitician {
                name: "Sam Senator".to_string(),
                office: "Senate".to_string(),
                state: "Texas".to_string(),
                district: None,
                lat: 31.0,
                lng: -99.0,
                website: Some("https://example.org".to_string()),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().expect("stored");
        assert_eq!(found, created);
        assert!(found.is_senate());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_candidate_round_trip() {
        let repo = CandidateRepository::new(setup_test_db().await);

        let created = repo
            .create(&(candidate(true), LatLng::new(40.4, -82.9)))
            .await
            .expect("Failed to create");

        assert!(created.show_on_map);
        assert_eq!(created.office_type, "House, School Board");
        assert_eq!(created.lat, 40.4);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_hidden_candidate_keeps_flag() {
        let repo = CandidateRepository::new(setup_test_db().await);

        let created = repo
            .create(&(candidate(false), LatLng::new(40.4, -82.9)))
            .await
            .unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(!found.show_on_map);
    }

    #[tokio::test]
    async fn test_candidate_requires_position() {
        let repo = CandidateRepository::new(setup_test_db().await);

        let err = repo
            .create(&(candidate(true), LatLng::new(f64::NAN, 0.0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_seed_fills_only_empty_tables() {
        let conn = setup_test_db().await;
        let pantries = PantryRepository::new(conn.clone());
        let politicians = PoliticianRepository::new(conn);

        let seed: SeedFile = serde_json::from_str(
            r#"{
                "pantries": [
                    {"name": "A", "address": "1 St", "type": "food", "lat": 1.0, "lng": 2.0},
                    {"name": "", "address": "2 St", "type": "food", "lat": 1.0, "lng": 2.0},
                    {"name": "B", "address": "3 St", "type": "library", "lat": 3.0, "lng": 4.0}
                ],
                "politicians": [
                    {"name": "P", "office": "House", "state": "Ohio", "lat": 40.0, "lng": -83.0}
                ]
            }"#,
        )
        .unwrap();

        let report = apply_seed(&seed, &pantries, &politicians).await.unwrap();
        assert_eq!(report.pantries, 2);
        assert_eq!(report.politicians, 1);

        let again = apply_seed(&seed, &pantries, &politicians).await.unwrap();
        assert_eq!(again.pantries, 0);
        assert_eq!(again.politicians, 0);
        assert_eq!(pantries.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bundled_seed_imports_every_pantry() {
        let conn = setup_test_db().await;
        let pantries = PantryRepository::new(conn.clone());
        let politicians = PoliticianRepository::new(conn);

        let seed: SeedFile =
            serde_json::from_str(include_str!("../../../data/seed.json")).expect("seed parses");
        let report = apply_seed(&seed, &pantries, &politicians).await.unwrap();

        assert_eq!(report.pantries, 10);
        let listed = pantries.list().await.unwrap();
        assert_eq!(listed[0].name, "LA Food Bank");
        assert!(listed.iter().all(|p| p.kind == PantryType::Food));
    }
}
