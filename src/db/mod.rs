use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

const MIGRATIONS: &[(i32, &str, &str)] = &[(
    1,
    "Media collection",
    include_str!("migrations/001_media.sql"),
)];

pub struct Database {
    pool: DbPool,
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

impl Database {
    pub fn open(path: &str) -> Result<Self> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let conn = pool.get()?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        Ok(Self { pool })
    }

    /// Each in-memory connection is its own database, so the pool holds
    /// exactly one and never recycles it. The name only shows up in logs.
    pub fn open_memory(name: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;
        tracing::debug!("Opened in-memory database '{}'", name);
        Ok(Self { pool })
    }

    pub fn get(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>> {
        Ok(self.checkout()?)
    }

    pub(crate) fn checkout(
        &self,
    ) -> std::result::Result<r2d2::PooledConnection<SqliteConnectionManager>, r2d2::Error> {
        self.pool.get()
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.get()?;
        run_migrations(&conn)?;
        Ok(())
    }

    /// Every known migration with the time it was applied, if it was.
    pub fn get_migration_status(&self) -> Result<Vec<(i32, &'static str, Option<String>)>> {
        let conn = self.get()?;
        ensure_migrations_table(&conn)?;

        let mut statuses = Vec::with_capacity(MIGRATIONS.len());
        let mut stmt = conn.prepare("SELECT applied_at FROM schema_migrations WHERE version = ?")?;
        for (version, description, _) in MIGRATIONS {
            let applied_at: Option<String> = stmt
                .query_row([version], |row| row.get::<_, Option<String>>(0))
                .optional()?
                .flatten();
            statuses.push((*version, *description, applied_at));
        }
        Ok(statuses)
    }
}

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

fn run_migrations(conn: &Connection) -> Result<()> {
    ensure_migrations_table(conn)?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    for (version, _, sql) in MIGRATIONS {
        if *version > current_version {
            tracing::info!("Running migration {}", version);
            conn.execute_batch(sql)?;
            conn.execute(
                "INSERT INTO schema_migrations (version) VALUES (?)",
                [version],
            )?;
        }
    }

    Ok(())
}
