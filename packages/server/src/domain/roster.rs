//! Roster: live mapping of connection identity to registered user.

use std::collections::HashMap;

use super::{
    entity::User,
    error::HubError,
    value_object::{ConnectionId, Timestamp, Username},
};

/// Registered users keyed by their connection.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: HashMap<ConnectionId, User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user for `connection_id`.
    ///
    /// # Errors
    ///
    /// * `HubError::UsernameRequired` - the trimmed name is empty
    /// * `HubError::AlreadyJoined` - the connection already has an entry
    /// * `HubError::UsernameTaken` - another connection holds the same trimmed name
    pub fn register(
        &mut self,
        connection_id: ConnectionId,
        raw_username: &str,
        joined_at: Timestamp,
    ) -> Result<User, HubError> {
        let username = Username::new(raw_username).map_err(|_| HubError::UsernameRequired)?;

        if self.users.contains_key(&connection_id) {
            return Err(HubError::AlreadyJoined);
        }
        if self.is_taken(&username) {
            return Err(HubError::UsernameTaken(username.into_string()));
        }

        let user = User::new(connection_id.clone(), username, joined_at);
        self.users.insert(connection_id, user.clone());
        Ok(user)
    }

    /// Remove the entry for `connection_id`. Unknown connections are a no-op.
    pub fn unregister(&mut self, connection_id: &ConnectionId) -> Option<User> {
        self.users.remove(connection_id)
    }

    pub fn lookup(&self, connection_id: &ConnectionId) -> Option<&User> {
        self.users.get(connection_id)
    }

    pub fn is_taken(&self, username: &Username) -> bool {
        self.users.values().any(|user| &user.username == username)
    }

    /// Point-in-time copy of the registered users, oldest join first.
    pub fn snapshot(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();

        // Sort by join time, then name, for consistent ordering
        users.sort_by(|a, b| {
            a.joined_at
                .cmp(&b.joined_at)
                .then_with(|| a.username.as_str().cmp(b.username.as_str()))
        });

        users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
