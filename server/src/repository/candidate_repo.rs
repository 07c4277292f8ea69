//! Candidate Repository Implementation
//!
//! Candidates are stored with coordinates resolved before insertion.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{Candidate, DomainError, DomainResult, LatLng, NewCandidate};

const CANDIDATE_COLUMNS: &str = "id, name, country, state, office, office_type, district, \
     party, website, phone, show_on_map, lat, lng";

pub struct CandidateRepository {
    conn: SharedConnection,
}

impl CandidateRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_candidate(row: &Row<'_>) -> rusqlite::Result<Candidate> {
    Ok(Candidate {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        state: row.get(3)?,
        office: row.get(4)?,
        office_type: row.get(5)?,
        district: row.get(6)?,
        party: row.get(7)?,
        website: row.get(8)?,
        phone: row.get(9)?,
        show_on_map: row.get::<_, i64>(10)? != 0,
        lat: row.get(11)?,
        lng: row.get(12)?,
    })
}

#[async_trait]
impl Repository<Candidate> for CandidateRepository {
    /// Submission plus its geocoded position
    type Draft = (NewCandidate, LatLng);

    async fn create(&self, submission: &(NewCandidate, LatLng)) -> DomainResult<Candidate> {
        let (draft, position) = submission;
        draft.validate().map_err(DomainError::InvalidInput)?;
        if !position.is_valid() {
            return Err(DomainError::InvalidInput(format!(
                "Invalid coordinates ({}, {})",
                position.lat, position.lng
            )));
        }

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO candidates (name, country, state, office, office_type, district,
                party, website, phone, show_on_map, lat, lng)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                draft.name.trim(),
                draft.country,
                draft.state,
                draft.office,
                draft.office_type,
                draft.district,
                draft.party,
                draft.website,
                draft.phone,
                i64::from(draft.show_on_map),
                position.lat,
                position.lng
            ],
        )?;

        let id = conn.last_insert_rowid() as u32;
        let stored = NewCandidate {
            name: draft.name.trim().to_string(),
            ..draft.clone()
        };
        Ok(stored.into_candidate(id, *position))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Candidate>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM candidates WHERE id = ?", CANDIDATE_COLUMNS),
            params![id],
            row_to_candidate,
        )
        .optional()
        .map_err(DomainError::from)
    }

    async fn list(&self) -> DomainResult<Vec<Candidate>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM candidates ORDER BY id",
            CANDIDATE_COLUMNS
        ))?;
        let candidates = stmt
            .query_map([], row_to_candidate)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(candidates)
    }

    async fn count(&self) -> DomainResult<u64> {
        let conn = self.conn.lock().await;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
