use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS blogs (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL CHECK (length(title) > 0),
            author      TEXT NOT NULL DEFAULT '',
            url         TEXT NOT NULL CHECK (length(url) > 0),
            likes       INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0),
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS users (
            id              TEXT PRIMARY KEY,
            username        TEXT NOT NULL UNIQUE,
            name            TEXT NOT NULL DEFAULT '',
            password_hash   TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
