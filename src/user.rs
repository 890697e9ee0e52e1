//! The admin backend's one entity: [`User`], its grid registration, and the
//! storage seam the HTTP layer talks to.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RowmapResult;

/// One row of the user table.
///
/// `update_time` is a timestamp and sits outside the mapper's coercion
/// table: it is registered as `Unsupported`, so it exports as a blank
/// column and stays untouched on import.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub user_status: i64,
    pub user_grade: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    pub update_user: i64,
}

crate::grid_record!(User {
    user_id: Integer,
    user_name: Text,
    user_status: Integer,
    user_grade: Integer,
    update_time: Unsupported,
    update_user: Integer,
});

/// Storage seam for users. Implementations decide where rows live; the
/// handlers and CLI only ever see this trait.
pub trait UserStore: Send + Sync {
    /// All users, in insertion order. An empty table is an empty vec, not an
    /// error.
    fn list(&self) -> RowmapResult<Vec<User>>;

    /// Replace the whole table, returning how many rows landed.
    fn replace_all(&self, users: Vec<User>) -> RowmapResult<usize>;
}

/// In-process store backed by a `RwLock<Vec<User>>`.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// The sample dataset the server boots with
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User {
                user_id: 1,
                user_name: "alice".to_string(),
                user_status: 1,
                user_grade: 3,
                update_time: None,
                update_user: 100,
            },
            User {
                user_id: 2,
                user_name: "bob".to_string(),
                user_status: 1,
                user_grade: 1,
                update_time: None,
                update_user: 100,
            },
            User {
                user_id: 3,
                user_name: "carol".to_string(),
                user_status: 0,
                user_grade: 2,
                update_time: None,
                update_user: 101,
            },
        ])
    }
}

impl UserStore for MemoryUserStore {
    fn list(&self) -> RowmapResult<Vec<User>> {
        let users = self
            .users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(users.clone())
    }

    fn replace_all(&self, users: Vec<User>) -> RowmapResult<usize> {
        let count = users.len();
        let mut table = self
            .users
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *table = users;
        Ok(count)
    }
}
