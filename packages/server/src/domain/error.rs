//! Domain error types.

use thiserror::Error;

/// Errors raised while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("connection id must not be empty")]
    ConnectionIdEmpty,

    #[error("username must not be empty")]
    UsernameEmpty,

    #[error("message text must not be empty")]
    MessageTextEmpty,
}

/// Category of a protocol error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (blank username).
    Validation,
    /// The requested username is held by another connection.
    Conflict,
    /// The connection is not in the state the action requires.
    Authorization,
}

/// Protocol errors reported to the originating connection.
///
/// The `Display` text is what the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("Nom d'utilisateur requis")]
    UsernameRequired,

    #[error("Ce nom d'utilisateur est déjà pris")]
    UsernameTaken(String),

    #[error("Vous devez d'abord vous connecter")]
    NotJoined,

    #[error("Vous avez déjà rejoint le chat")]
    AlreadyJoined,
}

impl HubError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HubError::UsernameRequired => ErrorKind::Validation,
            HubError::UsernameTaken(_) => ErrorKind::Conflict,
            HubError::NotJoined | HubError::AlreadyJoined => ErrorKind::Authorization,
        }
    }
}

/// Errors raised while pushing events to connections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not connected")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode event: {0}")]
    Encode(String),
}
