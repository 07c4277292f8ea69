//! Politician Repository Implementation

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, NewPolitician, Politician};

const POLITICIAN_COLUMNS: &str = "id, name, office, state, district, lat, lng, website";

pub struct PoliticianRepository {
    conn: SharedConnection,
}

impl PoliticianRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_politician(row: &Row<'_>) -> rusqlite::Result<Politician> {
    Ok(Politician {
        id: row.get(0)?,
        name: row.get(1)?,
        office: row.get(2)?,
        state: row.get(3)?,
        district: row.get(4)?,
        lat: row.get(5)?,
        lng: row.get(6)?,
        website: row.get(7)?,
    })
}

#[async_trait]
impl Repository<Politician> for PoliticianRepository {
    type Draft = NewPolitician;

    async fn create(&self, draft: &NewPolitician) -> DomainResult<Politician> {
        if draft.name.trim().is_empty() || draft.office.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Politician name and office are required".to_string(),
            ));
        }

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO politicians (name, office, state, district, lat, lng, website)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                draft.name,
                draft.office,
                draft.state,
                draft.district,
                draft.lat,
                draft.lng,
                draft.website
            ],
        )?;

        let id = conn.last_insert_rowid() as u32;
        Ok(draft.clone().into_politician(id))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Politician>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM politicians WHERE id = ?", POLITICIAN_COLUMNS),
            params![id],
            row_to_politician,
        )
        .optional()
        .map_err(DomainError::from)
    }

    async fn list(&self) -> DomainResult<Vec<Politician>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM politicians ORDER BY id",
            POLITICIAN_COLUMNS
        ))?;
        let politicians = stmt
            .query_map([], row_to_politician)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(politicians)
    }

    async fn count(&self) -> DomainResult<u64> {
        let conn = self.conn.lock().await;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM politicians", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
