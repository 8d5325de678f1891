//! ChatRoom aggregate: roster + history and the join/send/typing/leave protocol.
//!
//! Methods here are pure state transitions. Each one mutates the aggregate and
//! returns the outbound deliveries in emission order; sending them is left to
//! the caller.

use super::{
    entity::ChatMessage,
    error::HubError,
    event::{Delivery, OutboundEvent},
    factory::MessageIdFactory,
    history::History,
    roster::Roster,
    value_object::{ConnectionId, MessageText, Timestamp},
};

#[derive(Debug, Clone, Default)]
pub struct ChatRoom {
    roster: Roster,
    history: History,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            roster: Roster::new(),
            history: History::with_capacity(capacity),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Register `connection_id` under `raw_username` and announce it.
    ///
    /// The sender receives the history as it was before its own join notice;
    /// the notice itself reaches everyone through `NewMessage`.
    pub fn join(
        &mut self,
        connection_id: &ConnectionId,
        raw_username: &str,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, HubError> {
        if self.roster.lookup(connection_id).is_some() {
            return Err(HubError::AlreadyJoined);
        }

        let user = self
            .roster
            .register(connection_id.clone(), raw_username, now)?;
        let history = self.history.snapshot();

        let notice = ChatMessage::system(
            MessageIdFactory::generate(),
            MessageText::joined_notice(&user.username),
            now,
        );
        self.history.append(notice.clone());
        let users = self.roster.snapshot();

        Ok(vec![
            Delivery::only(connection_id, OutboundEvent::Joined(user.clone())),
            Delivery::only(connection_id, OutboundEvent::MessageHistory(history)),
            Delivery::only(connection_id, OutboundEvent::UsersList(users.clone())),
            Delivery::all_except(connection_id, OutboundEvent::UserJoined(user)),
            Delivery::all_except(connection_id, OutboundEvent::UsersList(users)),
            Delivery::all(OutboundEvent::NewMessage(notice)),
        ])
    }

    /// Append a message from a registered connection.
    ///
    /// Blank text yields no deliveries and leaves the history untouched.
    pub fn send_message(
        &mut self,
        connection_id: &ConnectionId,
        raw_text: &str,
        now: Timestamp,
    ) -> Result<Vec<Delivery>, HubError> {
        let author = self
            .roster
            .lookup(connection_id)
            .map(|user| user.username.clone())
            .ok_or(HubError::NotJoined)?;

        let Ok(text) = MessageText::new(raw_text) else {
            return Ok(Vec::new());
        };

        let message = ChatMessage::new(MessageIdFactory::generate(), author, text, now);
        self.history.append(message.clone());

        Ok(vec![Delivery::all(OutboundEvent::NewMessage(message))])
    }

    /// Relay a typing indicator to everyone but the typist.
    pub fn typing(&self, connection_id: &ConnectionId) -> Vec<Delivery> {
        self.roster
            .lookup(connection_id)
            .map(|user| {
                vec![Delivery::all_except(
                    connection_id,
                    OutboundEvent::UserTyping(user.username.clone()),
                )]
            })
            .unwrap_or_default()
    }

    pub fn stop_typing(&self, connection_id: &ConnectionId) -> Vec<Delivery> {
        self.roster
            .lookup(connection_id)
            .map(|user| {
                vec![Delivery::all_except(
                    connection_id,
                    OutboundEvent::UserStoppedTyping(user.username.clone()),
                )]
            })
            .unwrap_or_default()
    }

    /// Remove the departing connection and announce it to the others.
    ///
    /// Connections that never joined, or already left, produce nothing.
    pub fn leave(&mut self, connection_id: &ConnectionId, now: Timestamp) -> Vec<Delivery> {
        let Some(user) = self.roster.unregister(connection_id) else {
            return Vec::new();
        };

        let notice = ChatMessage::system(
            MessageIdFactory::generate(),
            MessageText::left_notice(&user.username),
            now,
        );
        self.history.append(notice.clone());
        let users = self.roster.snapshot();

        vec![
            Delivery::all_except(connection_id, OutboundEvent::UserLeft(user)),
            Delivery::all_except(connection_id, OutboundEvent::UsersList(users)),
            Delivery::all_except(connection_id, OutboundEvent::NewMessage(notice)),
        ]
    }
}
