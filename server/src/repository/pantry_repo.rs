//! Pantry Repository Implementation
//!
//! SQLite-backed pantries. Rows are soft-deleted by flipping `deleted`, and
//! reads only ever see live rows.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, NewPantry, Pantry, PantryType};

const PANTRY_COLUMNS: &str = "id, name, address, notes, hours, type, lat, lng, deleted";

pub struct PantryRepository {
    conn: SharedConnection,
}

impl PantryRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Hide a pantry from every list. Fails with NotFound when no live
    /// pantry has this id.
    pub async fn soft_delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE pantries SET deleted = 1 WHERE id = ? AND deleted = 0",
            params![id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Pantry {}", id)));
        }
        Ok(())
    }
}

fn row_to_pantry(row: &Row<'_>) -> rusqlite::Result<Pantry> {
    Ok(Pantry {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        notes: row.get(3)?,
        hours: row.get(4)?,
        kind: PantryType::from_str(&row.get::<_, String>(5)?),
        lat: row.get(6)?,
        lng: row.get(7)?,
        deleted: row.get::<_, i64>(8)? != 0,
    })
}

#[async_trait]
impl Repository<Pantry> for PantryRepository {
    type Draft = NewPantry;

    async fn create(&self, draft: &NewPantry) -> DomainResult<Pantry> {
        draft.validate().map_err(DomainError::InvalidInput)?;

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO pantries (name, address, notes, hours, type, lat, lng, deleted)
             VALUES (?, ?, ?, ?, ?, ?, ?, 0)",
            params![
                draft.name.trim(),
                draft.address.trim(),
                draft.notes,
                draft.hours,
                draft.kind.as_str(),
                draft.lat,
                draft.lng
            ],
        )?;

        let id = conn.last_insert_rowid() as u32;
        conn.query_row(
            &format!("SELECT {} FROM pantries WHERE id = ?", PANTRY_COLUMNS),
            params![id],
            row_to_pantry,
        )
        .map_err(DomainError::from)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Pantry>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM pantries WHERE id = ? AND deleted = 0", PANTRY_COLUMNS),
            params![id],
            row_to_pantry,
        )
        .optional()
        .map_err(DomainError::from)
    }

    async fn list(&self) -> DomainResult<Vec<Pantry>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM pantries WHERE deleted = 0 ORDER BY id",
            PANTRY_COLUMNS
        ))?;
        let pantries = stmt
            .query_map([], row_to_pantry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pantries)
    }

    async fn count(&self) -> DomainResult<u64> {
        let conn = self.conn.lock().await;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM pantries", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
