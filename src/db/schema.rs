//! Database schema migrations for unsocial-core.
//!
//! Each entry is applied once, in order, inside a transaction. Posts keep
//! their comments and likes embedded as JSON columns so a post is loaded and
//! saved as one document.

/// Ordered list of schema migrations.
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: users and posts
    "CREATE TABLE users (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL UNIQUE,
        username    TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        created_at  TEXT NOT NULL
    );
    CREATE TABLE posts (
        id        TEXT PRIMARY KEY,
        author    TEXT NOT NULL,
        image     TEXT NOT NULL,
        text      TEXT NOT NULL,
        date      TEXT NOT NULL,
        comments  TEXT NOT NULL DEFAULT '[]',
        likes     TEXT NOT NULL DEFAULT '[]'
    );
    CREATE INDEX idx_posts_author ON posts(author);
    CREATE INDEX idx_posts_date ON posts(date);",
];

/// Ordered list of schema migrations.
#[cfg(feature = "postgres")]
pub const MIGRATIONS: &[&str] = &[
    // v1: users and posts
    "CREATE TABLE users (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL UNIQUE,
        username    TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        created_at  TEXT NOT NULL
    );
    CREATE TABLE posts (
        id        TEXT PRIMARY KEY,
        author    TEXT NOT NULL,
        image     TEXT NOT NULL,
        text      TEXT NOT NULL,
        date      TEXT NOT NULL,
        comments  TEXT NOT NULL DEFAULT '[]',
        likes     TEXT NOT NULL DEFAULT '[]'
    );
    CREATE INDEX idx_posts_author ON posts(author);
    CREATE INDEX idx_posts_date ON posts(date);",
];
