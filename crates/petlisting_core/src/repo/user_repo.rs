//! Owner repository contract and SQLite implementation.

use crate::model::user::{User, UserId};
use crate::repo::{ensure_table_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

const USER_COLUMNS: &[&str] = &["id", "name", "email"];

/// Repository interface for owner lookups.
pub trait UserRepository {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Inserts a new owner. Used for seeding; accounts are otherwise managed
    /// outside this crate.
    fn create_user(&self, name: &str, email: Option<&str>) -> RepoResult<User>;
}

/// SQLite-backed owner repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "users", USER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, name, email FROM users WHERE id = ?1;",
                [id],
                |row| {
                    Ok(User {
                        id: row.get("id")?,
                        name: row.get("name")?,
                        email: row.get("email")?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    fn create_user(&self, name: &str, email: Option<&str>) -> RepoResult<User> {
        self.conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2);",
            params![name, email],
        )?;
        let id = self.conn.last_insert_rowid();
        self.find_by_id(id)?
            .ok_or_else(|| RepoError::InvalidData(format!("user {id} missing after insert")))
    }
}
