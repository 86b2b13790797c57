//! SQL schema for the debate SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per topic document. Arguments are embedded, never stored alone.
CREATE TABLE IF NOT EXISTS topics (
    topic_id          TEXT PRIMARY KEY,
    title             TEXT NOT NULL,
    arguments_for     TEXT NOT NULL DEFAULT '[]',   -- JSON array of arguments
    arguments_against TEXT NOT NULL DEFAULT '[]',   -- JSON array of arguments
    created_at        TEXT NOT NULL,   -- fixed-width RFC 3339 UTC
    updated_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS topics_created_idx ON topics(created_at);

PRAGMA user_version = 1;
";
