//! Ephemeral operator notifications
//!
//! Single-slot channel: the newest notification replaces whatever is on
//! screen and restarts the 3 second expiry. Expiry is epoch-guarded so a
//! timer fired for a superseded notification cannot clear its successor.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub const NOTIFICATION_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Slot contents plus the epoch of the notification occupying it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifySlot {
    current: Option<Notification>,
    epoch: u64,
}

impl NotifySlot {
    /// Put a new notification in the slot, superseding any visible one.
    /// Returns the epoch the expiry timer must present to clear it.
    pub fn publish(&mut self, notification: Notification) -> u64 {
        self.epoch += 1;
        self.current = Some(notification);
        self.epoch
    }

    /// Clear the slot, but only if `epoch` still identifies its occupant
    pub fn expire(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Handle shared by every store that reports mutation outcomes
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotifySlot>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NotifySlot::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(Notification {
            message: message.into(),
            kind: NotificationKind::Success,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notification {
            message: message.into(),
            kind: NotificationKind::Error,
        });
    }

    fn publish(&self, notification: Notification) {
        let mut epoch = 0;
        self.slot.update(|slot| epoch = slot.publish(notification));
        let slot = self.slot;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            slot.update(|s| s.expire(epoch));
        });
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position banner rendering the current notification, if any
#[component]
pub fn NotificationHost(notifier: Notifier) -> impl IntoView {
    view! {
        {move || {
            if let Some(notification) = notifier.current() {
                let background = match notification.kind {
                    NotificationKind::Success => "#28a745",
                    NotificationKind::Error => "#dc3545",
                };
                let icon = match notification.kind {
                    NotificationKind::Success => "✓",
                    NotificationKind::Error => "⚠",
                };
                view! {
                    <div style=format!(
                        "position: fixed; top: 16px; right: 16px; z-index: 1000; padding: 12px 16px; border-radius: 6px; box-shadow: 0 2px 6px rgba(0,0,0,0.3); color: white; display: flex; align-items: center; gap: 8px; background: {};",
                        background
                    )>
                        <span>{icon}</span>
                        <span>{notification.message}</span>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(message: &str) -> Notification {
        Notification {
            message: message.to_string(),
            kind: NotificationKind::Success,
        }
    }

    #[test]
    fn test_publish_and_expire() {
        let mut slot = NotifySlot::default();
        let epoch = slot.publish(note("saved"));
        assert_eq!(slot.current().unwrap().message, "saved");
        slot.expire(epoch);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_newer_notification_supersedes() {
        let mut slot = NotifySlot::default();
        let first = slot.publish(note("first"));
        let second = slot.publish(note("second"));
        assert_eq!(slot.current().unwrap().message, "second");

        // The first notification's timer fires late and must not clear the
        // superseding one
        slot.expire(first);
        assert_eq!(slot.current().unwrap().message, "second");

        slot.expire(second);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_expire_on_empty_slot_is_harmless() {
        let mut slot = NotifySlot::default();
        slot.expire(5);
        assert!(slot.current().is_none());
    }
}
