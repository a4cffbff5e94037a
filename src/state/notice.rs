//! Transient user notices (the board's replacement for blocking alerts).
//!
//! Error notices stay until dismissed; info notices may also be dismissed by
//! a timer, which passes the id it was scheduled for so a newer notice is
//! never cleared by an older timer.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use atlas::controller::AddOutcome;
use atlas::error::LocateError;

/// How long info notices stay on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Replace the current notice. Returns the new notice's id.
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, kind, message: message.into() });
        self.next_id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if notice `id` is still the one showing.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

/// Notice text for an add action.
pub fn add_message(outcome: AddOutcome) -> (NoticeKind, String) {
    match outcome {
        AddOutcome::Inserted(_) => (NoticeKind::Info, "Location saved".to_owned()),
        AddOutcome::Duplicate(loc) => (
            NoticeKind::Info,
            format!("A location at latitude {} is already saved", loc.latitude),
        ),
    }
}

/// Notice text for a failed "locate me".
pub fn locate_message(err: &LocateError) -> (NoticeKind, String) {
    (NoticeKind::Error, err.to_string())
}
