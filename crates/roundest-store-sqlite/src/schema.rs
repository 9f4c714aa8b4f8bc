//! SQL schema for the Roundest SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Counters are only ever changed by relative increments.
CREATE TABLE IF NOT EXISTS pokemon (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    dex_id      INTEGER NOT NULL UNIQUE,
    up_votes    INTEGER NOT NULL DEFAULT 0 CHECK (up_votes >= 0),
    down_votes  INTEGER NOT NULL DEFAULT 0 CHECK (down_votes >= 0),
    inserted_at TEXT    NOT NULL,   -- RFC 3339 UTC; server-assigned
    updated_at  TEXT    NOT NULL    -- RFC 3339 UTC; refreshed on every vote
);

CREATE INDEX IF NOT EXISTS pokemon_up_votes_idx ON pokemon(up_votes);

PRAGMA user_version = 1;
";
