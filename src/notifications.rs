// src/notifications.rs
//! Persistent read/unread event inbox
//!
//! The store exclusively owns its notification list; all mutation goes
//! through its methods. Every mutating operation performs a synchronous
//! full-list write-through to storage before returning, and republishes a
//! summary on a watch channel so consumers can observe changes without
//! polling (the poller contract is still supported on top of `list()` /
//! `unread_count()`).
//!
//! Mutations never suspend and never hold the lock across an await, so they
//! run to completion without interleaving.

use crate::persistence::StorageAdapter;
use crate::toast::{Toast, ToastSink};
use crate::types::{Notification, NotificationKind};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, warn};

const STORAGE_KEY: &str = "notifications";

/// Snapshot published to observers after every mutation and on every poll.
#[derive(Debug, Clone, Default)]
pub struct NotificationSummary {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

pub struct NotificationStore {
    entries: Mutex<Vec<Notification>>,
    storage: Arc<dyn StorageAdapter>,
    toasts: Arc<dyn ToastSink>,
    changed: watch::Sender<NotificationSummary>,
}

impl NotificationStore {
    /// Load the persisted list from storage. Missing or unparsable data
    /// fails open to an empty inbox; startup is never fatal.
    pub fn new(storage: Arc<dyn StorageAdapter>, toasts: Arc<dyn ToastSink>) -> Self {
        let entries = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Notification>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Discarding unparsable notification data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load notifications, starting empty: {}", e);
                Vec::new()
            }
        };

        let initial = NotificationSummary {
            unread_count: entries.iter().filter(|n| !n.read).count(),
            notifications: entries.clone(),
        };
        let (changed, _) = watch::channel(initial);

        Self {
            entries: Mutex::new(entries),
            storage,
            toasts,
            changed,
        }
    }

    /// Create a notification, insert it at the head, persist, and toast.
    /// Returns the new notification's id.
    pub fn add(&self, kind: NotificationKind, title: &str, message: &str) -> String {
        let notification = Notification::new(kind, title, message);
        let id = notification.id.clone();

        {
            let mut entries = self.entries.lock().unwrap();
            entries.insert(0, notification);
            self.persist(&entries);
        }
        self.publish();

        self.toasts.push(Toast::info(title, message));
        debug!("Added notification {}", id);
        id
    }

    /// Insert an already-built notification (workflow event constructors).
    pub fn push(&self, notification: Notification) -> String {
        let id = notification.id.clone();
        let toast = Toast::info(&notification.title, &notification.message);

        {
            let mut entries = self.entries.lock().unwrap();
            entries.insert(0, notification);
            self.persist(&entries);
        }
        self.publish();

        self.toasts.push(toast);
        id
    }

    /// Full ordered sequence, newest first, read and unread alike.
    pub fn list(&self) -> Vec<Notification> {
        self.entries.lock().unwrap().clone()
    }

    /// Recomputed from current state on every call, never cached.
    pub fn unread_count(&self) -> usize {
        self.entries.lock().unwrap().iter().filter(|n| !n.read).count()
    }

    /// Mark one entry as read. No-op when the id is unknown.
    pub fn mark_as_read(&self, id: &str) {
        {
            let mut entries = self.entries.lock().unwrap();
            match entries.iter_mut().find(|n| n.id == id) {
                Some(entry) => entry.read = true,
                None => return,
            }
            self.persist(&entries);
        }
        self.publish();
    }

    /// Mark every entry as read. Idempotent.
    pub fn mark_all_as_read(&self) {
        {
            let mut entries = self.entries.lock().unwrap();
            for entry in entries.iter_mut() {
                entry.read = true;
            }
            self.persist(&entries);
        }
        self.publish();
    }

    /// Remove one entry. No-op when the id is unknown.
    pub fn delete(&self, id: &str) {
        {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|n| n.id != id);
            if entries.len() == before {
                return;
            }
            self.persist(&entries);
        }
        self.publish();
    }

    /// Empty the inbox. Idempotent.
    pub fn clear_all(&self) {
        {
            let mut entries = self.entries.lock().unwrap();
            entries.clear();
            self.persist(&entries);
        }
        self.publish();
    }

    /// Observe summaries pushed after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<NotificationSummary> {
        self.changed.subscribe()
    }

    pub fn summary(&self) -> NotificationSummary {
        let entries = self.entries.lock().unwrap();
        NotificationSummary {
            unread_count: entries.iter().filter(|n| !n.read).count(),
            notifications: entries.clone(),
        }
    }

    fn persist(&self, entries: &[Notification]) {
        // Write-through happens before the mutation returns; a storage
        // failure is logged but never escapes to the caller.
        match serde_json::to_string(entries) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(STORAGE_KEY, &raw) {
                    warn!("Failed to persist notifications: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize notifications: {}", e),
        }
    }

    fn publish(&self) {
        // send_replace keeps publishing valid even with no subscribers.
        self.changed.send_replace(self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::toast::RecordingToasts;

    fn store() -> (NotificationStore, Arc<MemoryStorage>, Arc<RecordingToasts>) {
        let storage = Arc::new(MemoryStorage::new());
        let toasts = Arc::new(RecordingToasts::new());
        let store = NotificationStore::new(storage.clone(), toasts.clone());
        (store, storage, toasts)
    }

    fn assert_unread_invariant(store: &NotificationStore) {
        let expected = store.list().iter().filter(|n| !n.read).count();
        assert_eq!(store.unread_count(), expected);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let (store, _, toasts) = store();

        let id = store.add(NotificationKind::System, "T", "M");
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert!(!listed[0].read);
        assert_eq!(store.unread_count(), 1);
        assert_eq!(toasts.titles(), vec!["T".to_string()]);

        store.delete(&id);
        assert!(store.list().is_empty());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_newest_first_ordering() {
        let (store, _, _) = store();
        store.add(NotificationKind::System, "first", "m");
        store.add(NotificationKind::Application, "second", "m");
        store.add(NotificationKind::Interview, "third", "m");

        let titles: Vec<_> = store.list().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_unread_count_invariant_under_operation_sequence() {
        let (store, _, _) = store();

        let a = store.add(NotificationKind::System, "a", "m");
        assert_unread_invariant(&store);
        let b = store.add(NotificationKind::Application, "b", "m");
        assert_unread_invariant(&store);
        let _c = store.add(NotificationKind::Interview, "c", "m");
        assert_unread_invariant(&store);

        store.mark_as_read(&b);
        assert_unread_invariant(&store);
        assert_eq!(store.unread_count(), 2);

        store.delete(&a);
        assert_unread_invariant(&store);
        assert_eq!(store.unread_count(), 1);

        store.mark_all_as_read();
        assert_unread_invariant(&store);
        assert_eq!(store.unread_count(), 0);

        store.add(NotificationKind::System, "d", "m");
        assert_unread_invariant(&store);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_as_read_is_idempotent() {
        let (store, _, _) = store();
        store.add(NotificationKind::System, "a", "m");
        store.add(NotificationKind::System, "b", "m");

        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);
        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let (store, _, _) = store();
        store.add(NotificationKind::System, "a", "m");

        store.clear_all();
        assert!(store.list().is_empty());
        store.clear_all();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let (store, _, _) = store();
        store.add(NotificationKind::System, "a", "m");

        store.mark_as_read("no-such-id");
        store.delete("no-such-id");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn test_round_trip_across_store_instances() {
        let storage = Arc::new(MemoryStorage::new());
        let toasts = Arc::new(RecordingToasts::new());

        let ids = {
            let store = NotificationStore::new(storage.clone(), toasts.clone());
            let a = store.add(NotificationKind::Application, "a", "m1");
            let b = store.add(NotificationKind::Interview, "b", "m2");
            store.mark_as_read(&a);
            (a, b)
        };

        // Simulated process restart: a fresh store over the same storage.
        let reloaded = NotificationStore::new(storage, toasts);
        let listed = reloaded.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, ids.1);
        assert_eq!(listed[1].id, ids.0);
        assert!(listed[1].read);
        assert_eq!(reloaded.unread_count(), 1);
    }

    #[test]
    fn test_unparsable_persisted_data_fails_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("notifications", "not json at all").unwrap();

        let store = NotificationStore::new(storage, Arc::new(RecordingToasts::new()));
        assert!(store.list().is_empty());
        assert_eq!(store.unread_count(), 0);

        // The store stays usable after a failed load.
        store.add(NotificationKind::System, "a", "m");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_subscribers_see_mutations() {
        let (store, _, _) = store();
        let rx = store.subscribe();

        store.add(NotificationKind::System, "a", "m");
        assert_eq!(rx.borrow().unread_count, 1);

        store.mark_all_as_read();
        assert_eq!(rx.borrow().unread_count, 0);
        assert_eq!(rx.borrow().notifications.len(), 1);
    }

    #[test]
    fn test_workflow_event_push() {
        let (store, _, toasts) = store();
        let id = store.push(Notification::application_submitted("Backend Engineer", "Wang"));

        let listed = store.list();
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].kind, NotificationKind::Application);
        assert_eq!(toasts.titles(), vec!["Application received".to_string()]);
    }
}
