//! Database schema migrations.
//!
//! Migrations are applied in order when the database is opened. The
//! `schema_version` table records which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: member accounts
    r#"
CREATE TABLE users (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    username       TEXT NOT NULL UNIQUE,
    course         TEXT NOT NULL,
    year           TEXT NOT NULL,
    password_hash  TEXT NOT NULL,           -- Argon2 PHC string
    created_at     TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_login ON users(username, course, year);
"#,
    // v2: club admin accounts
    r#"
CREATE TABLE admins (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    admin_username  TEXT NOT NULL UNIQUE,
    password_hash   TEXT NOT NULL,          -- Argon2 PHC string
    role            TEXT NOT NULL CHECK (role IN ('lead', 'president')),
    club            TEXT NOT NULL,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_admins_login ON admins(admin_username, role, club);
"#,
];
