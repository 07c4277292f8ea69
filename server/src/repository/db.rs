//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{DomainError, DomainResult};

/// One connection shared by every repository
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and migrate it.
/// `:memory:` gives a private in-memory database.
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", db_path.display(), e)))?;

    run_migrations(&conn)?;
    info!("database ready at {}", db_path.display());

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.iter().any(|name| name == column))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS pantries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            deleted INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS politicians (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            office TEXT NOT NULL,
            state TEXT NOT NULL,
            district TEXT,
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            website TEXT
        );
        CREATE TABLE IF NOT EXISTS candidates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            country TEXT NOT NULL,
            state TEXT NOT NULL,
            office TEXT NOT NULL,
            office_type TEXT NOT NULL DEFAULT '',
            district TEXT,
            party TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            show_on_map INTEGER NOT NULL DEFAULT 1,
            lat REAL NOT NULL,
            lng REAL NOT NULL
        );",
    )?;

    // Upgrade pantry tables created without the hours and type columns
    if !column_exists(conn, "pantries", "hours")? {
        conn.execute("ALTER TABLE pantries ADD COLUMN hours TEXT NOT NULL DEFAULT ''", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add hours: {}", e)))?;
    }

    if !column_exists(conn, "pantries", "type")? {
        conn.execute("ALTER TABLE pantries ADD COLUMN type TEXT NOT NULL DEFAULT 'food'", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add type: {}", e)))?;
    }

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_pantries_deleted ON pantries(deleted)",
        [],
    )?;

    Ok(())
}
