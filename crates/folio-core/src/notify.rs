//! Notification toasts
//!
//! Tracks each toast through its lifecycle so the DOM layer can drive it
//! with plain timers:
//!
//! ```text
//! push ──show_delay──► Visible ──auto_dismiss / close──► Leaving ──remove_delay──► removed
//! ```
//!
//! Transitions are idempotent: a toast closed by hand and then hit by its
//! auto-dismiss timer is dismissed (and removed) once.

use serde::{Deserialize, Serialize};

use crate::config::NotificationTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Parse a kind name; anything unrecognised is `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    /// Font Awesome icon for the toast.
    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Info => "fa-info-circle",
        }
    }

    /// Class list for the toast element.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Attached but not yet slid in.
    Pending,
    Visible,
    /// Sliding out; removed after the removal delay.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    next_id: u64,
    live: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            live: Vec::new(),
        }
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.live.push(Notification {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Pending,
        });
        tracing::debug!("Notification {:?} queued ({})", id, kind.as_str());
        id
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Pending → Visible. False for any other state.
    pub fn show(&mut self, id: NotificationId) -> bool {
        self.transition(id, NotificationPhase::Visible, |phase| {
            phase == NotificationPhase::Pending
        })
    }

    /// Pending/Visible → Leaving. False when already leaving or gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.transition(id, NotificationPhase::Leaving, |phase| {
            phase != NotificationPhase::Leaving
        })
    }

    /// Drop a leaving toast. True only the first time.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.live.len();
        self.live
            .retain(|n| !(n.id == id && n.phase == NotificationPhase::Leaving));
        self.live.len() != before
    }

    fn transition(
        &mut self,
        id: NotificationId,
        to: NotificationPhase,
        allowed: impl Fn(NotificationPhase) -> bool,
    ) -> bool {
        match self.live.iter_mut().find(|n| n.id == id) {
            Some(n) if allowed(n.phase) => {
                n.phase = to;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter {
        NotificationCenter::new(NotificationTimings::default())
    }

    #[test]
    fn test_full_lifecycle() {
        let mut c = center();
        let id = c.push("CV download started!", NotificationKind::Success);
        assert_eq!(c.get(id).unwrap().phase, NotificationPhase::Pending);
        assert!(c.show(id));
        assert_eq!(c.get(id).unwrap().phase, NotificationPhase::Visible);
        assert!(c.dismiss(id));
        assert!(c.remove(id));
        assert!(c.is_empty());
    }

    #[test]
    fn test_close_then_auto_dismiss_is_single() {
        let mut c = center();
        let id = c.push("hi", NotificationKind::Info);
        c.show(id);
        assert!(c.dismiss(id));
        assert!(!c.dismiss(id));
        assert!(c.remove(id));
        assert!(!c.remove(id));
    }

    #[test]
    fn test_closed_before_show_never_becomes_visible() {
        let mut c = center();
        let id = c.push("quick", NotificationKind::Error);
        assert!(c.dismiss(id));
        assert!(!c.show(id));
        assert_eq!(c.get(id).unwrap().phase, NotificationPhase::Leaving);
    }

    #[test]
    fn test_remove_requires_leaving() {
        let mut c = center();
        let id = c.push("stay", NotificationKind::Info);
        assert!(!c.remove(id));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut c = center();
        let a = c.push("a", NotificationKind::Info);
        let b = c.push("b", NotificationKind::Info);
        assert_ne!(a, b);
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(
            NotificationKind::Success.class_name(),
            "notification notification-success"
        );
        assert_eq!(NotificationKind::Error.icon_class(), "fa-exclamation-circle");
        assert_eq!(NotificationKind::Info.icon_class(), "fa-info-circle");
    }

    #[test]
    fn test_kind_from_name_defaults_to_info() {
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Info);
    }
}
