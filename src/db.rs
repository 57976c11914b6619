use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        content TEXT NOT NULL,
        created_at TEXT NOT NULL,
        likes INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS likes (
        user_id INTEGER NOT NULL REFERENCES users(id),
        post_id INTEGER NOT NULL REFERENCES posts(id),
        PRIMARY KEY (user_id, post_id)
    )",
    "CREATE TABLE IF NOT EXISTS follows (
        follower_id INTEGER NOT NULL REFERENCES users(id),
        following_id INTEGER NOT NULL REFERENCES users(id),
        PRIMARY KEY (follower_id, following_id)
    )",
];

pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(url)
        .await?;
    init(&db_pool).await?;
    Ok(db_pool)
}

pub async fn init(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for stmt in SCHEMA {
        sqlx::query(stmt).execute(db_pool).await?;
    }
    Ok(())
}
