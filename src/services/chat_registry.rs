//! Live chat connection registry
//!
//! Process-wide mapping from user id to the outbound channel of that user's
//! open chat socket. A user has at most one live connection; a newer
//! connection replaces the older one, and disconnect only removes the entry
//! if it still belongs to the departing connection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::mpsc;

/// Frames pushed to a connected chat client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A message delivered to the receiver
    Message {
        id: i64,
        sender_id: i64,
        receiver_id: i64,
        content: String,
        created_at: DateTime<Utc>,
    },
    /// Acknowledgement to the sender
    Sent {
        id: i64,
        receiver_id: i64,
        delivered: bool,
        created_at: DateTime<Utc>,
    },
    /// A per-frame failure; the socket stays open
    Error { message: String },
}

struct Connection {
    ticket: u64,
    sender: mpsc::UnboundedSender<ChatEvent>,
}

/// Registry of live chat connections
#[derive(Clone, Default)]
pub struct ChatRegistry {
    connections: Arc<DashMap<i64, Connection>>,
    next_ticket: Arc<AtomicU64>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user's connection, replacing any previous one.
    ///
    /// Returns the receiving end of the outbound channel and a ticket that
    /// identifies this connection for `unregister`.
    pub fn register(&self, user_id: i64) -> (u64, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);

        self.connections
            .insert(user_id, Connection { ticket, sender: tx });

        (ticket, rx)
    }

    /// Remove a user's connection, but only if it is still the one identified
    /// by `ticket` — a reconnect must not be clobbered by the old socket's
    /// teardown.
    pub fn unregister(&self, user_id: i64, ticket: u64) {
        self.connections
            .remove_if(&user_id, |_, conn| conn.ticket == ticket);
    }

    /// Push an event to a user's live connection.
    ///
    /// Returns whether the event was handed to an open channel; `false` means
    /// the user is offline and the event is dropped from real-time delivery.
    pub fn send_to(&self, user_id: i64, event: ChatEvent) -> bool {
        match self.connections.get(&user_id) {
            Some(conn) => conn.sender.send(event).is_ok(),
            None => false,
        }
    }

    /// Whether a user currently has a live connection
    pub fn is_online(&self, user_id: i64) -> bool {
        self.connections.contains_key(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_event(id: i64) -> ChatEvent {
        ChatEvent::Message {
            id,
            sender_id: 1,
            receiver_id: 2,
            content: "hello!".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_and_deliver() {
        let registry = ChatRegistry::new();
        let (_ticket, mut rx) = registry.register(2);

        assert!(registry.is_online(2));
        assert!(registry.send_to(2, message_event(1)));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ChatEvent::Message { id: 1, .. }));
    }

    #[tokio::test]
    async fn test_offline_user_not_delivered() {
        let registry = ChatRegistry::new();
        assert!(!registry.send_to(99, message_event(1)));
    }

    #[tokio::test]
    async fn test_reconnect_replaces_connection() {
        let registry = ChatRegistry::new();
        let (old_ticket, _old_rx) = registry.register(2);
        let (_new_ticket, mut new_rx) = registry.register(2);

        // Old socket's teardown must not remove the new connection
        registry.unregister(2, old_ticket);
        assert!(registry.is_online(2));

        assert!(registry.send_to(2, message_event(7)));
        let event = new_rx.recv().await.unwrap();
        assert!(matches!(event, ChatEvent::Message { id: 7, .. }));
    }

    #[tokio::test]
    async fn test_unregister_current_connection() {
        let registry = ChatRegistry::new();
        let (ticket, _rx) = registry.register(3);

        registry.unregister(3, ticket);
        assert!(!registry.is_online(3));
        assert!(!registry.send_to(3, message_event(1)));
    }

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_value(message_event(5)).unwrap();
        assert_eq!(json["type"], "message");
        assert_eq!(json["id"], 5);
        assert_eq!(json["content"], "hello!");
    }
}
