//! The in-memory user directory.

use std::sync::Arc;

use super::user::User;

/// Seed data served by a default deployment, in insertion order.
const SEED_USERS: [(&str, i64); 5] = [
    ("Jorn", 0),
    ("Markus", 3),
    ("Andrew", 2),
    ("Ori", 4),
    ("Mike", 1),
];

/// Immutable, ordered collection of users.
///
/// Built once at startup and shared read-only; cloning only bumps a
/// reference count.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Arc<[User]>,
}

impl UserDirectory {
    /// Directory holding the five seeded users.
    pub fn seeded() -> Self {
        Self::from_users(
            SEED_USERS
                .iter()
                .map(|(name, id)| User::new(*name, *id))
                .collect(),
        )
    }

    /// Directory over an arbitrary set of users, kept in the given order.
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
